//! Lunar ascending node longitude.
//!
//! Mean node: the fifth Delaunay argument Ω.
//! True node: mean node plus the five periodic terms of Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47:
//!
//! ```text
//! Ω − 1.4979 sin 2(D − F) − 0.1500 sin M − 0.1226 sin 2D
//!   + 0.1176 sin 2F − 0.0801 sin 2(M′ − F)
//! ```

use crate::body::NodeMode;
use crate::fundamental::{fundamental_arguments, normalize_deg};

/// Periodic terms: `[nl, nl', nF, nD, nΩ, amplitude_deg]`, with
/// `l = M′`, `l' = M` as returned by [`fundamental_arguments`].
#[rustfmt::skip]
static PERTURBATIONS: [[f64; 6]; 5] = [
    [0.0, 0.0, -2.0, 2.0, 0.0, -1.4979],
    [0.0, 1.0,  0.0, 0.0, 0.0, -0.1500],
    [0.0, 0.0,  0.0, 2.0, 0.0, -0.1226],
    [0.0, 0.0,  2.0, 0.0, 0.0,  0.1176],
    [2.0, 0.0, -2.0, 0.0, 0.0, -0.0801],
];

/// Mean north node longitude in degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_deg(fundamental_arguments(t)[4].to_degrees())
}

/// True north node longitude in degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let correction: f64 = PERTURBATIONS
        .iter()
        .map(|p| {
            let angle: f64 = p[..5].iter().zip(&args).map(|(n, a)| n * a).sum();
            p[5] * angle.sin()
        })
        .sum();
    normalize_deg(args[4].to_degrees() + correction)
}

/// North node longitude for the given mode.
pub fn north_node_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}

/// South node: the north node + 180°.
pub fn south_node_deg(north_deg: f64) -> f64 {
    normalize_deg(north_deg + 180.0)
}
