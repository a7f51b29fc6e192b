//! Bodies, node modes and house systems understood by a resolver.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A point whose tropical geocentric ecliptic longitude can be requested.
///
/// The Earth is not listed: charts derive it as the Sun + 180°. South nodes
/// are likewise derived from the north node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EphemerisBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    /// Mean lunar ascending node.
    MeanNode,
    /// True (osculating-approximation) lunar ascending node.
    TrueNode,
}

impl EphemerisBody {
    /// Lowercase identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::Chiron => "chiron",
            Self::MeanNode => "mean_node",
            Self::TrueNode => "true_node",
        }
    }

    /// The node body for a given node mode.
    pub const fn node(mode: NodeMode) -> Self {
        match mode {
            NodeMode::Mean => Self::MeanNode,
            NodeMode::True => Self::TrueNode,
        }
    }
}

impl Display for EphemerisBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean or true lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus short-period perturbations.
    True,
}

impl NodeMode {
    /// `true` selects the true node, `false` the mean node.
    pub const fn from_true_flag(true_node: bool) -> Self {
        if true_node { Self::True } else { Self::Mean }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

/// House division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    /// Time-based trisection of diurnal and nocturnal semi-arcs.
    #[default]
    Placidus,
    /// Space-based trisection of the ecliptic quadrants.
    Porphyry,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "placidus",
            Self::Porphyry => "porphyry",
        }
    }
}

/// Twelve house cusps plus the chart angles, all in degrees [0, 360).
///
/// `cusps[0]` is the first house cusp (the Ascendant), `cusps[9]` the tenth
/// (the MC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
}
