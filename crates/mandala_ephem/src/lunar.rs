//! Geocentric Moon longitude.
//!
//! Periodic series for the Moon's longitude (59 terms) from Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47, Table 47.A, with the
//! additive Venus/Jupiter/flattening terms. Accuracy ~10″.

use crate::fundamental::{normalize_deg, nutation_deg};

/// Table 47.A longitude terms: `[D, M, M', F, Σl (1e-6 deg)]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 59] = [
    [0, 0, 1, 0, 6288774], [2, 0, -1, 0, 1274027], [2, 0, 0, 0, 658314],
    [0, 0, 2, 0, 213618], [0, 1, 0, 0, -185116], [0, 0, 0, 2, -114332],
    [2, 0, -2, 0, 58793], [2, -1, -1, 0, 57066], [2, 0, 1, 0, 53322],
    [2, -1, 0, 0, 45758], [0, 1, -1, 0, -40923], [1, 0, 0, 0, -34720],
    [0, 1, 1, 0, -30383], [2, 0, 0, -2, 15327], [0, 0, 1, 2, -12528],
    [0, 0, 1, -2, 10980], [4, 0, -1, 0, 10675], [0, 0, 3, 0, 10034],
    [4, 0, -2, 0, 8548], [2, 1, -1, 0, -7888], [2, 1, 0, 0, -6766],
    [1, 0, -1, 0, -5163], [1, 1, 0, 0, 4987], [2, -1, 1, 0, 4036],
    [2, 0, 2, 0, 3994], [4, 0, 0, 0, 3861], [2, 0, -3, 0, 3665],
    [0, 1, -2, 0, -2689], [2, 0, -1, 2, -2602], [2, -1, -2, 0, 2390],
    [1, 0, 1, 0, -2348], [2, -2, 0, 0, 2236], [0, 1, 2, 0, -2120],
    [0, 2, 0, 0, -2069], [2, -2, -1, 0, 2048], [2, 0, 1, -2, -1773],
    [2, 0, 0, 2, -1595], [4, -1, -1, 0, 1215], [0, 0, 2, 2, -1110],
    [3, 0, -1, 0, -892], [2, 1, 1, 0, -810], [4, -1, -2, 0, 759],
    [0, 2, -1, 0, -713], [2, 2, -1, 0, -700], [2, 1, -2, 0, 691],
    [2, -1, 0, -2, 596], [4, 0, 1, 0, 549], [0, 0, 4, 0, 537],
    [4, -1, 0, 0, 520], [1, 0, -2, 0, -487], [2, 1, 0, -2, -399],
    [0, 0, 2, -2, -381], [1, 1, 1, 0, 351], [3, 0, -2, 0, -340],
    [4, 0, -3, 0, 330], [2, -1, 2, 0, 327], [0, 2, 1, 0, -323],
    [1, 1, -1, 0, 299], [2, 0, 3, 0, 294],
];

/// Geocentric tropical Moon longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0. With `apparent` the nutation in
/// longitude is added; lunar aberration is negligible.
pub fn moon_longitude_deg(t: f64, apparent: bool) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l_mean = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    // Earth orbit eccentricity factor for terms involving M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum = 0.0_f64;
    for &[nd, nm, nmp, nf, coeff] in &LONGITUDE_TERMS {
        let arg = f64::from(nd) * d + f64::from(nm) * m + f64::from(nmp) * mp + f64::from(nf) * f;
        let ecc = e.powi(nm.abs());
        sum += f64::from(coeff) * ecc * arg.to_radians().sin();
    }
    sum += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (l_mean - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let mut lon = l_mean + sum / 1e6;
    if apparent {
        lon += nutation_deg(t).0;
    }
    normalize_deg(lon)
}
