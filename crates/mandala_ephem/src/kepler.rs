//! Heliocentric positions from mean Keplerian elements.
//!
//! Element table: E. M. Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL SSD), Table 1, valid 1800–2050.
//! Positions are in the J2000 ecliptic frame, in AU.

/// Orbiting bodies with tabulated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    Mercury,
    Venus,
    /// Earth–Moon barycenter.
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Light travel time per AU, in days.
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// `[a, e, I, L, ϖ, Ω]` at J2000.0 and their rates per Julian century.
///
/// Units: AU, dimensionless, degrees.
#[rustfmt::skip]
const ELEMENTS: [([f64; 6], [f64; 6]); 9] = [
    // Mercury
    ([ 0.38709927, 0.20563593,  7.00497902, 252.25032350,  77.45779628,  48.33076593],
     [ 0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081]),
    // Venus
    ([ 0.72333566, 0.00677672,  3.39467605, 181.97909950, 131.60246718,  76.67984255],
     [ 0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418]),
    // Earth-Moon barycenter
    ([ 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193,   0.0],
     [ 0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364,  0.0]),
    // Mars
    ([ 1.52371034, 0.09339410,  1.84969142,  -4.55343205, -23.94362959,  49.55953891],
     [ 0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343]),
    // Jupiter
    ([ 5.20288700, 0.04838624,  1.30439695,  34.39644051,  14.72847983, 100.47390909],
     [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668,  0.20469106]),
    // Saturn
    ([ 9.53667594, 0.05386179,  2.48599187,  49.95424423,  92.59887831, 113.66242448],
     [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794]),
    // Uranus
    ([19.18916464, 0.04725744,  0.77263783, 313.23810451, 170.95427630,  74.01692503],
     [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281,  0.04240589]),
    // Neptune
    ([30.06992276, 0.00859048,  1.77004347, -55.12002969,  44.96476227, 131.78422574],
     [ 0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664]),
    // Pluto
    ([39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
     [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482]),
];

impl Orbit {
    const fn index(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBary => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
            Self::Uranus => 6,
            Self::Neptune => 7,
            Self::Pluto => 8,
        }
    }
}

/// Solve Kepler's equation `M = E − e·sin E` by Newton iteration.
///
/// `m` in radians; returns the eccentric anomaly in radians.
pub fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ea = m + e * m.sin();
    for _ in 0..30 {
        let delta = (m - (ea - e * ea.sin())) / (1.0 - e * ea.cos());
        ea += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric J2000 ecliptic position `[x, y, z]` in AU.
///
/// `t` = Julian centuries since J2000.0.
pub fn heliocentric_position(orbit: Orbit, t: f64) -> [f64; 3] {
    let (base, rate) = &ELEMENTS[orbit.index()];
    let mut el = [0.0_f64; 6];
    for (i, v) in el.iter_mut().enumerate() {
        *v = base[i] + rate[i] * t;
    }
    let [a, e, incl, mean_lon, peri_lon, node] = el;

    let arg_peri = (peri_lon - node).to_radians();
    // Mean anomaly reduced to [-180, 180).
    let m = (mean_lon - peri_lon + 180.0).rem_euclid(360.0) - 180.0;
    let ea = solve_kepler(m.to_radians(), e);

    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.to_radians().sin_cos();
    let (si, ci) = incl.to_radians().sin_cos();

    let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
    let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;
    [x, y, z]
}
