//! Design-time search against the analytic ephemeris.
//!
//! Birth: 1990-04-09 18:04 Europe/Amsterdam = JD 2447991.169444 (UTC).

use mandala_chart::{
    ActivationBody, DesignTimeConfig, GateSequence, LongitudeSnapshot, MandalaParams,
    compute_human_design, derive_gene_keys, signed_diff_deg, solve_design_time,
};
use mandala_ephem::{Ephemeris, EphemerisBody, EphemerisConfig, NodeMode, PositionResolver};

const BIRTH_JD: f64 = 2_447_991.169_444_444_6;

#[rustfmt::skip]
const CANON_SEQUENCE: [u8; 64] = [
    13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3, 27, 24,
    2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56, 31, 33,
    7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50, 28, 44,
    1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60, 41, 19,
];

fn eph() -> Ephemeris {
    Ephemeris::new(EphemerisConfig::default()).unwrap()
}

#[test]
fn design_sun_is_88_degrees_behind() {
    let eph = eph();
    let cfg = DesignTimeConfig::new(88.0, 1e-4, 1.0);
    let dt = solve_design_time(&eph, BIRTH_JD, &cfg).unwrap();

    let birth_sun = eph.longitude_at(BIRTH_JD, EphemerisBody::Sun).unwrap();
    let design_sun = eph.longitude_at(dt.jd, EphemerisBody::Sun).unwrap();
    let target = (birth_sun - 88.0).rem_euclid(360.0);

    assert!(signed_diff_deg(design_sun, target).abs() < 1e-4);
    assert!(dt.residual_deg.abs() < 1e-4);
    assert!(dt.jd < BIRTH_JD);
    assert!((BIRTH_JD - dt.jd - 87.64).abs() < 0.1, "span = {}", BIRTH_JD - dt.jd);
    assert_eq!(dt.widenings, 0);
}

#[test]
fn golden_activations_and_gene_keys() {
    let eph = eph();
    let seq = GateSequence::new(&CANON_SEQUENCE).unwrap();
    let params = MandalaParams::with_start(313.25);

    let dt = solve_design_time(&eph, BIRTH_JD, &DesignTimeConfig::new(88.0, 1e-4, 1.0)).unwrap();
    let personality = LongitudeSnapshot::capture(&eph, BIRTH_JD, NodeMode::True).unwrap();
    let design = LongitudeSnapshot::capture(&eph, dt.jd, NodeMode::True).unwrap();
    let hd = compute_human_design(&personality, &design, &params, &seq);

    assert_eq!(hd.personality.get(ActivationBody::Sun), "51.5");
    assert_eq!(hd.personality.get(ActivationBody::Earth), "57.5");
    assert_eq!(hd.design.get(ActivationBody::Sun), "61.1");
    assert_eq!(hd.design.get(ActivationBody::Earth), "62.1");
    assert_eq!(hd.personality.get(ActivationBody::NorthNode), "13.2");
    assert_eq!(hd.personality.get(ActivationBody::SouthNode), "7.2");
    assert_eq!(hd.design.get(ActivationBody::NorthNode), "13.4");
    assert_eq!(hd.design.get(ActivationBody::SouthNode), "7.4");

    let gk = derive_gene_keys(&hd).unwrap();
    assert_eq!((gk.lifes_work.key, gk.lifes_work.line), (51, 5));
    assert_eq!((gk.evolution.key, gk.evolution.line), (57, 5));
    assert_eq!((gk.radiance.key, gk.radiance.line), (61, 1));
    assert_eq!((gk.purpose.key, gk.purpose.line), (62, 1));
}

#[test]
fn zero_offset_design_equals_personality() {
    let eph = eph();
    let seq = GateSequence::new(&CANON_SEQUENCE).unwrap();
    let params = MandalaParams::with_start(313.25);
    let dt = solve_design_time(&eph, BIRTH_JD, &DesignTimeConfig::new(0.0, 1e-4, 1.0)).unwrap();
    assert_eq!(dt.jd, BIRTH_JD);

    let p = LongitudeSnapshot::capture(&eph, BIRTH_JD, NodeMode::True).unwrap();
    let d = LongitudeSnapshot::capture(&eph, dt.jd, NodeMode::True).unwrap();
    assert_eq!(p, d);
    let hd = compute_human_design(&p, &d, &params, &seq);
    assert_eq!(hd.personality, hd.design);
}
