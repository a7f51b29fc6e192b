//! Longitude → gate/line mapping on the Human Design mandala.
//!
//! The wheel is divided into 64 gates of `gate_width_deg`, each split into
//! six lines of `line_width_deg`, starting at `start_deg`. Intervals are
//! start-inclusive and end-exclusive. The order in which gate numbers
//! appear around the wheel is supplied as a [`GateSequence`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;
use crate::error::ChartError;

pub const GATE_COUNT: usize = 64;
pub const LINES_PER_GATE: usize = 6;
/// 360 / 64
pub const GATE_WIDTH_DEG: f64 = 5.625;
/// 5.625 / 6
pub const LINE_WIDTH_DEG: f64 = 0.9375;

/// Mandala geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MandalaParams {
    /// Longitude at which the first gate of the sequence begins.
    pub start_deg: f64,
    pub gate_width_deg: f64,
    pub line_width_deg: f64,
}

impl MandalaParams {
    /// Standard widths with the given start longitude.
    pub fn with_start(start_deg: f64) -> Self {
        Self {
            start_deg,
            gate_width_deg: GATE_WIDTH_DEG,
            line_width_deg: LINE_WIDTH_DEG,
        }
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.start_deg.is_finite() {
            return Err(ChartError::InvalidConfig("start_deg must be finite"));
        }
        if !(self.gate_width_deg.is_finite() && self.gate_width_deg > 0.0) {
            return Err(ChartError::InvalidConfig("gate_width_deg must be positive"));
        }
        if !(self.line_width_deg.is_finite() && self.line_width_deg > 0.0) {
            return Err(ChartError::InvalidConfig("line_width_deg must be positive"));
        }
        Ok(())
    }
}

/// Order of gate numbers around the wheel, starting at `start_deg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSequence([u8; GATE_COUNT]);

impl GateSequence {
    /// Validate that `gates` is a permutation of 1..=64.
    pub fn new(gates: &[u8]) -> Result<Self, ChartError> {
        if gates.len() != GATE_COUNT {
            return Err(ChartError::InvalidGateSequence(format!(
                "expected {GATE_COUNT} entries, got {}",
                gates.len()
            )));
        }
        let mut seen = [false; GATE_COUNT];
        let mut seq = [0u8; GATE_COUNT];
        for (i, &g) in gates.iter().enumerate() {
            if !(1..=64).contains(&g) {
                return Err(ChartError::InvalidGateSequence(format!(
                    "entry {i} is {g}, outside 1..=64"
                )));
            }
            let slot = usize::from(g - 1);
            if seen[slot] {
                return Err(ChartError::InvalidGateSequence(format!("gate {g} repeated")));
            }
            seen[slot] = true;
            seq[i] = g;
        }
        Ok(Self(seq))
    }

    /// Gate number at a 0-based wheel position.
    pub fn gate_at(&self, index: usize) -> u8 {
        self.0[index.min(GATE_COUNT - 1)]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// A gate (1..=64) and line (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateLine {
    pub gate: u8,
    pub line: u8,
}

impl Display for GateLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.gate, self.line)
    }
}

/// Map an ecliptic longitude to its gate and line.
pub fn map_to_gate_line(lon_deg: f64, params: &MandalaParams, seq: &GateSequence) -> GateLine {
    let r = normalize_360(lon_deg - params.start_deg);
    let gate_index = (r / params.gate_width_deg).floor().clamp(0.0, (GATE_COUNT - 1) as f64);
    let within = r % params.gate_width_deg;
    let line_index = (within / params.line_width_deg)
        .floor()
        .clamp(0.0, (LINES_PER_GATE - 1) as f64);
    GateLine {
        gate: seq.gate_at(gate_index as usize),
        line: line_index as u8 + 1,
    }
}
