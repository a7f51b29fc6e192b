//! Birth case → astrology, Human Design and Gene Keys charts.

use mandala_chart::{
    AstrologyChart, DesignTime, GateSequence, GeneKeysActivationSequence, HumanDesignChart,
    LongitudeSnapshot, compute_astrology, compute_human_design, derive_gene_keys,
    solve_design_time,
};
use mandala_config::{CaseInput, ValidatedContract, validate_contract};
use mandala_ephem::{HouseCusps, PositionResolver};
use mandala_time::{BirthInstant, normalize_birth};
use tracing::info;

use crate::error::EngineError;

/// Everything computed for one case.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReport {
    pub contract: ValidatedContract,
    pub birth: BirthInstant,
    pub design_time: DesignTime,
    pub astrology: AstrologyChart,
    pub human_design: HumanDesignChart,
    pub gene_keys: GeneKeysActivationSequence,
}

/// Snapshots feeding a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartInputs {
    /// Birth instant, astrology node policy.
    pub astrology: LongitudeSnapshot,
    /// Birth instant, Human Design node policy.
    pub personality: LongitudeSnapshot,
    /// Design instant, Human Design node policy.
    pub design: LongitudeSnapshot,
    pub houses: HouseCusps,
}

impl ChartReport {
    /// Map already-resolved positions into the three charts.
    pub fn assemble(
        contract: ValidatedContract,
        birth: BirthInstant,
        design_time: DesignTime,
        inputs: &ChartInputs,
        gate_sequence: &GateSequence,
    ) -> Result<Self, EngineError> {
        let astrology = compute_astrology(&inputs.astrology, inputs.houses);
        let human_design = compute_human_design(
            &inputs.personality,
            &inputs.design,
            &contract.mandala,
            gate_sequence,
        );
        let gene_keys = derive_gene_keys(&human_design)?;
        Ok(Self {
            contract,
            birth,
            design_time,
            astrology,
            human_design,
            gene_keys,
        })
    }
}

/// Run the full pipeline for one case.
///
/// The contract is validated before anything is computed; any error aborts.
pub fn compute_case<R: PositionResolver + ?Sized>(
    case: &CaseInput,
    gate_sequence: &GateSequence,
    resolver: &R,
) -> Result<ChartReport, EngineError> {
    let contract = validate_contract(case)?;
    let b = &case.birth;

    let birth = normalize_birth(&b.date, &b.time_hh_mm, &b.timezone_iana)?;
    info!(utc = %birth.utc, jd = birth.jd_utc, "birth normalized");

    let houses = resolver.house_cusps(birth.jd_utc, b.latitude, b.longitude, contract.house_system)?;
    let astrology = LongitudeSnapshot::capture(resolver, birth.jd_utc, contract.astrology_nodes)?;
    let personality =
        LongitudeSnapshot::capture(resolver, birth.jd_utc, contract.human_design_nodes)?;

    let design_time = solve_design_time(resolver, birth.jd_utc, &contract.solver)?;
    info!(
        jd = design_time.jd,
        sun = design_time.sun_longitude_deg,
        residual = design_time.residual_deg,
        widenings = design_time.widenings,
        iterations = design_time.iterations,
        "design time solved"
    );
    let design = if design_time.jd == birth.jd_utc {
        personality
    } else {
        LongitudeSnapshot::capture(resolver, design_time.jd, contract.human_design_nodes)?
    };

    let inputs = ChartInputs {
        astrology,
        personality,
        design,
        houses,
    };
    ChartReport::assemble(contract, birth, design_time, &inputs, gate_sequence)
}
