//! Byte-exact serialization of a fully populated chart.
//!
//! Positions are fixed values, so this test pins the layout and the
//! mapping rules independently of the ephemeris.

use std::path::{Path, PathBuf};

use mandala_chart::{DesignTime, LongitudeSnapshot};
use mandala_config::{Canon, CanonPaths, load_case, validate_contract};
use mandala_engine::{ChartInputs, ChartReport, emit_golden};
use mandala_ephem::{HouseCusps, NodeMode};
use mandala_time::normalize_birth;

const BIRTH_JD: f64 = 2_447_991.169_444_444_6;
const DESIGN_JD: f64 = 2_447_903.527_415_636;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn canon() -> Canon {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../canon");
    Canon::load(&CanonPaths::in_dir(&dir).unwrap()).unwrap()
}

#[rustfmt::skip]
fn birth_values(north_node: f64) -> [f64; 13] {
    // earth and south_node are derived
    [19.5432, 0.0, north_node, 0.0, 194.3406, 38.2793, 333.4036, 321.5834,
     93.8202, 294.757, 279.586, 284.5606, 227.1347]
}

#[rustfmt::skip]
const DESIGN_VALUES: [f64; 13] = [
    291.5433, 0.0, 316.5776, 0.0, 122.0617, 284.734, 302.6516, 257.4457,
    93.8561, 286.8531, 276.4139, 282.434, 227.3544,
];

fn report() -> ChartReport {
    let canon = canon();
    let case = load_case(&fixtures().join("golden_case_v1.input.json"), &canon).unwrap();
    let contract = validate_contract(&case).unwrap();
    let birth = normalize_birth(&case.birth.date, &case.birth.time_hh_mm, &case.birth.timezone_iana)
        .unwrap();

    let inputs = ChartInputs {
        astrology: LongitudeSnapshot::from_longitudes(BIRTH_JD, NodeMode::Mean, birth_values(313.2333)),
        personality: LongitudeSnapshot::from_longitudes(BIRTH_JD, NodeMode::True, birth_values(314.3696)),
        design: LongitudeSnapshot::from_longitudes(DESIGN_JD, NodeMode::True, DESIGN_VALUES),
        houses: HouseCusps {
            cusps: [175.4966; 12],
            ascendant: 175.4966,
            mc: 84.0729,
        },
    };
    let design_time = DesignTime {
        jd: DESIGN_JD,
        sun_longitude_deg: 291.5433,
        target_deg: 291.5432,
        residual_deg: 1e-4,
        widenings: 0,
        iterations: 15,
    };
    ChartReport::assemble(contract, birth, design_time, &inputs, &canon.gate_sequence).unwrap()
}

#[test]
fn emits_golden_case_byte_for_byte() {
    let expected = std::fs::read_to_string(fixtures().join("golden_case_v1.json")).unwrap();
    let actual = emit_golden(&report());
    assert_eq!(actual, expected);
}

#[test]
fn output_is_valid_json_without_trailing_newline() {
    let out = emit_golden(&report());
    assert!(out.ends_with('}'));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["case_id"], "golden_case_v1");
    assert_eq!(v["engine_contract"]["node_policy_by_system"]["human_design"], "true");
    assert_eq!(v["expected"]["human_design"]["activation_object_order"][2], "north_node");
}

#[test]
fn case_id_is_omitted_when_absent() {
    let mut r = report();
    r.contract.case.case_id = None;
    let out = emit_golden(&r);
    assert!(out.starts_with("{\n  \"birth\": {\n"));
    assert!(!out.contains("case_id"));
}

#[test]
fn strings_are_escaped() {
    let mut r = report();
    r.contract.case.birth.place_name = "Den \"Haag\"".to_string();
    let out = emit_golden(&r);
    assert!(out.contains(r#""place_name": "Den \"Haag\"","#));
    serde_json::from_str::<serde_json::Value>(&out).unwrap();
}

#[test]
fn emission_is_deterministic() {
    let r = report();
    assert_eq!(emit_golden(&r), emit_golden(&r));
}
