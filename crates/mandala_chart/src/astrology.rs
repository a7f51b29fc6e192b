//! Tropical astrology chart.

use mandala_ephem::HouseCusps;

use crate::activation::{ACTIVATION_ORDER, ActivationBody, LongitudeSnapshot};
use crate::zodiac::{ZodiacPosition, zodiac_position};

/// Zodiac positions for the 13 activation bodies plus the chart angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstrologyChart {
    positions: [ZodiacPosition; 13],
    pub ascendant: ZodiacPosition,
    pub mc: ZodiacPosition,
    /// Full house cusps and exact angles from the resolver.
    pub houses: HouseCusps,
}

impl AstrologyChart {
    pub fn position(&self, body: ActivationBody) -> ZodiacPosition {
        self.positions[body.index()]
    }

    /// `(body, position)` in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = (ActivationBody, ZodiacPosition)> + '_ {
        ACTIVATION_ORDER
            .into_iter()
            .map(move |b| (b, self.positions[b.index()]))
    }
}

/// Map a (mean-node) snapshot and the house angles to zodiac positions.
pub fn compute_astrology(snapshot: &LongitudeSnapshot, houses: HouseCusps) -> AstrologyChart {
    let positions = ACTIVATION_ORDER.map(|b| zodiac_position(snapshot.get(b)));
    AstrologyChart {
        positions,
        ascendant: zodiac_position(houses.ascendant),
        mc: zodiac_position(houses.mc),
        houses,
    }
}
