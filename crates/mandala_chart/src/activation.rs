//! The fixed 13-body activation order and longitude snapshots.

use std::fmt::{Display, Formatter};

use mandala_ephem::{EphemerisBody, NodeMode, PositionResolver, south_node_deg};
use tracing::debug;

use crate::angle::normalize_360;
use crate::error::ChartError;

/// A body that receives an activation in every chart.
///
/// Declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationBody {
    Sun,
    Earth,
    NorthNode,
    SouthNode,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Canonical body order.
pub const ACTIVATION_ORDER: [ActivationBody; 13] = [
    ActivationBody::Sun,
    ActivationBody::Earth,
    ActivationBody::NorthNode,
    ActivationBody::SouthNode,
    ActivationBody::Moon,
    ActivationBody::Mercury,
    ActivationBody::Venus,
    ActivationBody::Mars,
    ActivationBody::Jupiter,
    ActivationBody::Saturn,
    ActivationBody::Uranus,
    ActivationBody::Neptune,
    ActivationBody::Pluto,
];

impl ActivationBody {
    /// Output key.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Earth => "earth",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// Position in [`ACTIVATION_ORDER`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ACTIVATION_ORDER.into_iter().find(|b| b.name() == name)
    }

    /// The body read from the resolver, or `None` for derived points.
    const fn resolver_body(self, node_mode: NodeMode) -> Option<EphemerisBody> {
        match self {
            Self::Sun => Some(EphemerisBody::Sun),
            Self::NorthNode => Some(EphemerisBody::node(node_mode)),
            Self::Moon => Some(EphemerisBody::Moon),
            Self::Mercury => Some(EphemerisBody::Mercury),
            Self::Venus => Some(EphemerisBody::Venus),
            Self::Mars => Some(EphemerisBody::Mars),
            Self::Jupiter => Some(EphemerisBody::Jupiter),
            Self::Saturn => Some(EphemerisBody::Saturn),
            Self::Uranus => Some(EphemerisBody::Uranus),
            Self::Neptune => Some(EphemerisBody::Neptune),
            Self::Pluto => Some(EphemerisBody::Pluto),
            Self::Earth | Self::SouthNode => None,
        }
    }
}

impl Display for ActivationBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Longitudes of all 13 activation bodies at one instant, in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeSnapshot {
    pub jd: f64,
    pub node_mode: NodeMode,
    longitudes: [f64; 13],
}

fn derive_opposites(longitudes: &mut [f64; 13]) {
    longitudes[ActivationBody::Earth.index()] =
        normalize_360(longitudes[ActivationBody::Sun.index()] + 180.0);
    longitudes[ActivationBody::SouthNode.index()] =
        south_node_deg(longitudes[ActivationBody::NorthNode.index()]);
}

impl LongitudeSnapshot {
    /// Read every body from `resolver` at `jd`.
    ///
    /// Earth is the Sun + 180° and the south node is the north node + 180°.
    pub fn capture<R: PositionResolver + ?Sized>(
        resolver: &R,
        jd: f64,
        node_mode: NodeMode,
    ) -> Result<Self, ChartError> {
        let mut longitudes = [0.0_f64; 13];
        for body in ACTIVATION_ORDER {
            if let Some(eb) = body.resolver_body(node_mode) {
                longitudes[body.index()] = normalize_360(resolver.longitude_at(jd, eb)?);
            }
        }
        derive_opposites(&mut longitudes);
        debug!(jd, node_mode = node_mode.name(), sun = longitudes[0], "captured snapshot");
        Ok(Self {
            jd,
            node_mode,
            longitudes,
        })
    }

    /// Build a snapshot from explicit values in [`ACTIVATION_ORDER`].
    ///
    /// Values are normalized; Earth and the south node are re-derived.
    pub fn from_longitudes(jd: f64, node_mode: NodeMode, values: [f64; 13]) -> Self {
        let mut longitudes = values.map(normalize_360);
        derive_opposites(&mut longitudes);
        Self {
            jd,
            node_mode,
            longitudes,
        }
    }

    pub fn get(&self, body: ActivationBody) -> f64 {
        self.longitudes[body.index()]
    }

    /// `(body, longitude)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ActivationBody, f64)> + '_ {
        ACTIVATION_ORDER
            .into_iter()
            .map(move |b| (b, self.longitudes[b.index()]))
    }
}
