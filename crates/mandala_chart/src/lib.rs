//! Chart computation on top of a [`mandala_ephem::PositionResolver`].
//!
//! - [`zodiac`]: sign and degree/minute of a longitude
//! - [`gate_line`]: gate and line on the 64-gate mandala
//! - [`activation`]: the 13-body activation order and longitude snapshots
//! - [`design_time`]: the pre-birth instant at a given solar arc
//! - [`astrology`], [`human_design`], [`gene_keys`]: the three charts

pub mod activation;
pub mod angle;
pub mod astrology;
pub mod design_time;
pub mod error;
pub mod gate_line;
pub mod gene_keys;
pub mod human_design;
pub mod zodiac;

pub use activation::{ACTIVATION_ORDER, ActivationBody, LongitudeSnapshot};
pub use angle::{normalize_360, signed_diff_deg};
pub use astrology::{AstrologyChart, compute_astrology};
pub use design_time::{DesignTime, DesignTimeConfig, solve_design_time};
pub use error::ChartError;
pub use gate_line::{
    GATE_COUNT, GATE_WIDTH_DEG, GateLine, GateSequence, LINE_WIDTH_DEG, LINES_PER_GATE,
    MandalaParams, map_to_gate_line,
};
pub use gene_keys::{ActivationKey, GeneKeysActivationSequence, derive_gene_keys};
pub use human_design::{ActivationSet, HumanDesignChart, compute_human_design};
pub use zodiac::{ALL_SIGNS, DegMin, Sign, ZodiacPosition, deg_min, sign_from_longitude, zodiac_position};
