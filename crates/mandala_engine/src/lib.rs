//! End-to-end chart computation for a single birth case.
//!
//! [`compute_case`] validates the engine contract, normalizes the birth
//! time, resolves positions, solves the design time and maps everything
//! into the astrology, Human Design and Gene Keys charts.
//! [`emit_golden`] renders the result in the canonical golden layout.

pub mod emit;
pub mod error;
pub mod pipeline;

pub use emit::emit_golden;
pub use error::EngineError;
pub use pipeline::{ChartInputs, ChartReport, compute_case};
