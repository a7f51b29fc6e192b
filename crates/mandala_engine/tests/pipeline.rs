//! Full pipeline against the analytic ephemeris.

use std::fs;
use std::path::Path;

use mandala_chart::{ActivationBody, Sign};
use mandala_config::{Canon, CanonPaths, ConfigError, apply_canon, load_case};
use mandala_engine::{EngineError, compute_case, emit_golden};
use mandala_ephem::{Ephemeris, EphemerisConfig};
use mandala_time::TimeError;

fn canon() -> Canon {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../canon");
    Canon::load(&CanonPaths::in_dir(&dir).unwrap()).unwrap()
}

fn input() -> serde_json::Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/golden_case_v1.input.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn eph() -> Ephemeris {
    Ephemeris::new(EphemerisConfig::default()).unwrap()
}

#[test]
fn golden_case_end_to_end() {
    let canon = canon();
    let case = apply_canon(input(), &canon).unwrap();
    let report = compute_case(&case, &canon.gate_sequence, &eph()).unwrap();

    assert!((report.birth.jd_utc - 2_447_991.169_444).abs() < 1e-5);
    assert_eq!(report.birth.utc_offset_seconds, 7200);
    assert!((report.birth.jd_utc - report.design_time.jd - 87.64).abs() < 0.1);

    let sun = report.astrology.position(ActivationBody::Sun);
    assert_eq!((sun.sign, sun.deg), (Sign::Aries, 19));
    assert!((31..=33).contains(&sun.min));
    assert_eq!(report.astrology.ascendant.sign, Sign::Virgo);
    assert_eq!(report.astrology.mc.sign, Sign::Gemini);

    let hd = &report.human_design;
    assert_eq!(hd.personality.get(ActivationBody::Sun), "51.5");
    assert_eq!(hd.personality.get(ActivationBody::Earth), "57.5");
    assert_eq!(hd.design.get(ActivationBody::Sun), "61.1");
    assert_eq!(hd.design.get(ActivationBody::Earth), "62.1");
    assert_eq!(hd.personality.get(ActivationBody::NorthNode), "13.2");
    assert_eq!(hd.personality.get(ActivationBody::SouthNode), "7.2");
    assert_eq!(hd.design.get(ActivationBody::NorthNode), "13.4");
    assert_eq!(hd.design.get(ActivationBody::SouthNode), "7.4");

    let gk = &report.gene_keys;
    assert_eq!((gk.lifes_work.key, gk.lifes_work.line), (51, 5));
    assert_eq!((gk.purpose.key, gk.purpose.line), (62, 1));

    let out = emit_golden(&report);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["expected"]["gene_keys"]["activation_sequence"]["radiance"]["key"], 61);
    assert_eq!(v["expected"]["astrology"]["positions"]["earth"]["sign"], "Libra");
}

#[test]
fn loads_case_from_disk() {
    let canon = canon();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("case.json");
    fs::write(&path, input().to_string()).unwrap();

    let case = load_case(&path, &canon).unwrap();
    let report = compute_case(&case, &canon.gate_sequence, &eph()).unwrap();
    assert_eq!(report.contract.case.case_id.as_deref(), Some("golden_case_v1"));
}

#[test]
fn contract_violation_aborts_before_computation() {
    let canon = canon();
    let mut raw = input();
    raw["engine_contract"]["zodiac"] = "sidereal".into();
    let case = apply_canon(raw, &canon).unwrap();

    let err = compute_case(&case, &canon.gate_sequence, &eph()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Config(ConfigError::ContractViolation { field: "engine_contract.zodiac", .. })
    ));
}

#[test]
fn unknown_timezone_is_reported() {
    let canon = canon();
    let mut raw = input();
    raw["birth"]["timezone_iana"] = "Mars/Olympus_Mons".into();
    let case = apply_canon(raw, &canon).unwrap();

    let err = compute_case(&case, &canon.gate_sequence, &eph()).unwrap_err();
    assert!(matches!(err, EngineError::Time(TimeError::TimezoneNotFound(_))));
}

#[test]
fn placidus_refused_in_polar_latitudes() {
    let canon = canon();
    let mut raw = input();
    raw["birth"]["latitude"] = 78.2232.into();
    raw["birth"]["timezone_iana"] = "Europe/Oslo".into();
    let case = apply_canon(raw, &canon).unwrap();

    let err = compute_case(&case, &canon.gate_sequence, &eph()).unwrap_err();
    assert!(matches!(err, EngineError::Ephemeris(_)));
}

#[test]
fn zero_offset_design_equals_personality() {
    let canon = canon();
    let mut raw = input();
    raw["engine_contract"]["design_time_solver"]["sun_offset_deg"] = 0.0.into();
    let case = apply_canon(raw, &canon).unwrap();

    let report = compute_case(&case, &canon.gate_sequence, &eph()).unwrap();
    assert_eq!(report.design_time.jd, report.birth.jd_utc);
    assert_eq!(report.human_design.design, report.human_design.personality);
}
