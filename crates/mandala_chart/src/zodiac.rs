//! Tropical zodiac sign and degree/minute decomposition.
//!
//! The ecliptic is split into 12 equal signs of 30° starting at Aries = 0°.

use std::fmt::{Display, Formatter};

use crate::angle::normalize_360;

/// Guard against floor() flicker when a value sits a rounding error below
/// a whole degree or minute.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// The 12 tropical signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in zodiacal order (0 = Aries).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Start longitude of the sign in degrees.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * 30.0
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign containing the (not necessarily normalized) longitude.
pub fn sign_from_longitude(lon_deg: f64) -> Sign {
    let idx = (normalize_360(lon_deg) / 30.0).floor() as usize;
    ALL_SIGNS[idx.min(11)]
}

/// Whole degrees and arc-minutes within a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegMin {
    /// 0..=29
    pub deg: u8,
    /// 0..=59
    pub min: u8,
}

/// Decompose a longitude into degrees and minutes within its sign.
pub fn deg_min(lon_deg: f64) -> DegMin {
    let z = normalize_360(lon_deg) % 30.0;
    let deg = (z + BOUNDARY_EPSILON).floor().clamp(0.0, 29.0);
    let min = ((z - deg) * 60.0 + BOUNDARY_EPSILON).floor().clamp(0.0, 59.0);
    DegMin {
        deg: deg as u8,
        min: min as u8,
    }
}

/// Sign plus degree/minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZodiacPosition {
    pub sign: Sign,
    pub deg: u8,
    pub min: u8,
}

/// Map a longitude to its zodiac position.
pub fn zodiac_position(lon_deg: f64) -> ZodiacPosition {
    let DegMin { deg, min } = deg_min(lon_deg);
    ZodiacPosition {
        sign: sign_from_longitude(lon_deg),
        deg,
        min,
    }
}
