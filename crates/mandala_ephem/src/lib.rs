//! Tropical ecliptic positions and house cusps.
//!
//! The [`PositionResolver`] trait is the seam chart computation depends on.
//! [`Ephemeris`] is an analytic implementation built from:
//! - mean Keplerian elements for the Sun and planets, with light-time
//! - the Meeus Chapter 47 series for the Moon
//! - Delaunay Ω for the mean node, plus the five Meeus Ch. 47 terms for the true node
//! - GMST, nutation and obliquity for the chart angles
//!
//! A process-wide instance is available through [`init`] and [`engine`].

pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod fundamental;
pub mod global;
pub mod houses;
pub mod kepler;
pub mod lunar;
pub mod lunar_nodes;
pub mod planets;
pub mod resolver;
pub mod sidereal;

pub use body::{EphemerisBody, HouseCusps, HouseSystem, NodeMode};
pub use config::{DEFAULT_MAX_SEMI_ARC_LATITUDE_DEG, EphemerisConfig};
pub use engine::Ephemeris;
pub use error::EphemerisError;
pub use fundamental::normalize_deg;
pub use global::{engine, init, is_initialized};
pub use houses::{arc_forward, ascendant_mc, placidus_cusps, porphyry_cusps};
pub use lunar_nodes::{mean_node_deg, north_node_deg, south_node_deg, true_node_deg};
pub use resolver::PositionResolver;
pub use sidereal::gmst_deg;
