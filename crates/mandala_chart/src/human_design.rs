//! Human Design personality/design activations.

use crate::activation::{ACTIVATION_ORDER, ActivationBody, LongitudeSnapshot};
use crate::gate_line::{GateSequence, MandalaParams, map_to_gate_line};

/// Rendered `G.L` activations for one snapshot, indexed by body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationSet([String; 13]);

impl ActivationSet {
    fn from_snapshot(snap: &LongitudeSnapshot, params: &MandalaParams, seq: &GateSequence) -> Self {
        Self(ACTIVATION_ORDER.map(|b| map_to_gate_line(snap.get(b), params, seq).to_string()))
    }

    pub fn get(&self, body: ActivationBody) -> &str {
        &self.0[body.index()]
    }

    /// `(body, "G.L")` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ActivationBody, &str)> + '_ {
        ACTIVATION_ORDER
            .into_iter()
            .map(move |b| (b, self.0[b.index()].as_str()))
    }
}

/// Personality (birth) and Design activations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanDesignChart {
    pub personality: ActivationSet,
    pub design: ActivationSet,
}

impl HumanDesignChart {
    /// Output order of activation objects.
    pub fn activation_object_order(&self) -> &'static [ActivationBody; 13] {
        &ACTIVATION_ORDER
    }
}

/// Map both snapshots through the mandala.
pub fn compute_human_design(
    personality: &LongitudeSnapshot,
    design: &LongitudeSnapshot,
    params: &MandalaParams,
    seq: &GateSequence,
) -> HumanDesignChart {
    HumanDesignChart {
        personality: ActivationSet::from_snapshot(personality, params, seq),
        design: ActivationSet::from_snapshot(design, params, seq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala_ephem::NodeMode;

    fn identity() -> GateSequence {
        GateSequence::new(&(1..=64).collect::<Vec<u8>>()).unwrap()
    }

    #[test]
    fn identical_snapshots_give_identical_sets() {
        let snap = LongitudeSnapshot::from_longitudes(0.0, NodeMode::True, [12.3; 13]);
        let chart = compute_human_design(&snap, &snap, &MandalaParams::with_start(0.0), &identity());
        assert_eq!(chart.personality, chart.design);
    }

    #[test]
    fn renders_gate_dot_line() {
        let mut v = [0.0; 13];
        v[0] = 5.625 + 0.9375 * 2.0 + 0.1;
        let snap = LongitudeSnapshot::from_longitudes(0.0, NodeMode::True, v);
        let chart = compute_human_design(&snap, &snap, &MandalaParams::with_start(0.0), &identity());
        assert_eq!(chart.personality.get(ActivationBody::Sun), "2.3");
        // Earth is Sun + 180°: wheel index 33, same line
        assert_eq!(chart.personality.get(ActivationBody::Earth), "34.3");
        assert_eq!(chart.activation_object_order()[0], ActivationBody::Sun);
        assert_eq!(chart.design.iter().count(), 13);
    }
}
