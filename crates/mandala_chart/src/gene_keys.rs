//! Gene Keys activation sequence.
//!
//! Four keys read from the Human Design chart:
//! life's work = personality Sun, evolution = personality Earth,
//! radiance = design Sun, purpose = design Earth.

use crate::activation::ActivationBody;
use crate::error::ChartError;
use crate::human_design::HumanDesignChart;

/// A gene key number and line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationKey {
    pub key: u8,
    pub line: u8,
}

impl ActivationKey {
    /// Parse `"G.L"` with G in 1..=64 and L in 1..=6.
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidActivationFormat(s.to_string());
        let (gate, line) = s.split_once('.').ok_or_else(invalid)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(gate) || !digits(line) {
            return Err(invalid());
        }
        let key: u8 = gate.parse().map_err(|_| invalid())?;
        let line: u8 = line.parse().map_err(|_| invalid())?;
        if !(1..=64).contains(&key) || !(1..=6).contains(&line) {
            return Err(invalid());
        }
        Ok(Self { key, line })
    }
}

/// The four-entry activation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneKeysActivationSequence {
    pub lifes_work: ActivationKey,
    pub evolution: ActivationKey,
    pub radiance: ActivationKey,
    pub purpose: ActivationKey,
}

impl GeneKeysActivationSequence {
    /// `(name, key)` in output order.
    pub fn entries(&self) -> [(&'static str, ActivationKey); 4] {
        [
            ("lifes_work", self.lifes_work),
            ("evolution", self.evolution),
            ("radiance", self.radiance),
            ("purpose", self.purpose),
        ]
    }
}

pub fn derive_gene_keys(hd: &HumanDesignChart) -> Result<GeneKeysActivationSequence, ChartError> {
    Ok(GeneKeysActivationSequence {
        lifes_work: ActivationKey::parse(hd.personality.get(ActivationBody::Sun))?,
        evolution: ActivationKey::parse(hd.personality.get(ActivationBody::Earth))?,
        radiance: ActivationKey::parse(hd.design.get(ActivationBody::Sun))?,
        purpose: ActivationKey::parse(hd.design.get(ActivationBody::Earth))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::LongitudeSnapshot;
    use crate::gate_line::{GateSequence, MandalaParams};
    use crate::human_design::compute_human_design;
    use mandala_ephem::NodeMode;

    #[test]
    fn parse_valid() {
        assert_eq!(ActivationKey::parse("51.5").unwrap(), ActivationKey { key: 51, line: 5 });
        assert_eq!(ActivationKey::parse("1.1").unwrap(), ActivationKey { key: 1, line: 1 });
        assert_eq!(ActivationKey::parse("64.6").unwrap(), ActivationKey { key: 64, line: 6 });
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "51", "51.", ".5", "51.5.1", "a.b", "51,5", " 51.5", "+5.1", "65.1", "0.3", "12.7", "12.0", "300.1"] {
            assert_eq!(
                ActivationKey::parse(bad),
                Err(ChartError::InvalidActivationFormat(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn derives_from_sun_and_earth() {
        let seq = GateSequence::new(&(1..=64).collect::<Vec<u8>>()).unwrap();
        let params = MandalaParams::with_start(0.0);
        let mut p = [0.0; 13];
        p[0] = 0.1; // gate 1 line 1; earth gate 33 line 1
        let mut d = [0.0; 13];
        d[0] = 90.0 + 5.0; // index 16 → gate 17, line 6; earth index 48 → gate 49, line 6
        let hd = compute_human_design(
            &LongitudeSnapshot::from_longitudes(0.0, NodeMode::True, p),
            &LongitudeSnapshot::from_longitudes(0.0, NodeMode::True, d),
            &params,
            &seq,
        );
        let gk = derive_gene_keys(&hd).unwrap();
        assert_eq!(gk.lifes_work, ActivationKey { key: 1, line: 1 });
        assert_eq!(gk.evolution, ActivationKey { key: 33, line: 1 });
        assert_eq!(gk.radiance, ActivationKey { key: 17, line: 6 });
        assert_eq!(gk.purpose, ActivationKey { key: 49, line: 6 });
        assert_eq!(gk.entries()[0].0, "lifes_work");
    }
}
