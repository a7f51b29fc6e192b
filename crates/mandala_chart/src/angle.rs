//! Angle normalization shared by all mappers.

/// Normalize degrees into [0, 360). Never returns 360.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `a − b` mapped into (−180, 180].
pub fn signed_diff_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}
