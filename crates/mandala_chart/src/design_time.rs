//! Design-time search.
//!
//! Finds the instant before birth at which the Sun stood `sun_offset_deg`
//! behind its birth longitude. The signed residual
//! `sun(T) − target` in (−180, 180] is bracketed around
//! `T0 − sun_offset_deg` days (the Sun moves ~1°/day), the bracket is widened
//! symmetrically until it straddles a sign change, then bisected.

use mandala_ephem::{EphemerisBody, PositionResolver};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::angle::{normalize_360, signed_diff_deg};
use crate::error::ChartError;

/// Upper bound on bisection steps; the bracket-width exit fires long before.
const MAX_BISECTIONS: u32 = 200;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Solver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTimeConfig {
    /// Solar arc between design and birth. `<= 0` disables the search.
    pub sun_offset_deg: f64,
    /// Stop as soon as |residual| falls below this.
    pub stop_if_abs_sun_diff_deg_below: f64,
    /// Stop when the bracket is narrower than this. `<= 0` means 1 s.
    pub stop_if_time_bracket_below_seconds: f64,
    /// Half-width of the initial bracket, in days.
    pub initial_half_width_days: f64,
    /// Days added to each side per widening.
    pub widen_step_days: f64,
    pub max_widenings: u32,
}

impl Default for DesignTimeConfig {
    fn default() -> Self {
        Self {
            sun_offset_deg: 88.0,
            stop_if_abs_sun_diff_deg_below: 1e-4,
            stop_if_time_bracket_below_seconds: 1.0,
            initial_half_width_days: 5.0,
            widen_step_days: 2.0,
            max_widenings: 10,
        }
    }
}

impl DesignTimeConfig {
    /// Contract parameters with the default bracket schedule.
    pub fn new(sun_offset_deg: f64, stop_deg: f64, stop_seconds: f64) -> Self {
        Self {
            sun_offset_deg,
            stop_if_abs_sun_diff_deg_below: stop_deg,
            stop_if_time_bracket_below_seconds: stop_seconds,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.sun_offset_deg.is_finite() {
            return Err(ChartError::InvalidConfig("sun_offset_deg must be finite"));
        }
        if !self.stop_if_abs_sun_diff_deg_below.is_finite()
            || self.stop_if_abs_sun_diff_deg_below < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "stop_if_abs_sun_diff_deg_below must be non-negative",
            ));
        }
        if !self.stop_if_time_bracket_below_seconds.is_finite() {
            return Err(ChartError::InvalidConfig(
                "stop_if_time_bracket_below_seconds must be finite",
            ));
        }
        if !(self.initial_half_width_days.is_finite() && self.initial_half_width_days > 0.0) {
            return Err(ChartError::InvalidConfig("initial_half_width_days must be positive"));
        }
        if !(self.widen_step_days.is_finite() && self.widen_step_days > 0.0) {
            return Err(ChartError::InvalidConfig("widen_step_days must be positive"));
        }
        Ok(())
    }

    fn stop_days(&self) -> f64 {
        let seconds = if self.stop_if_time_bracket_below_seconds > 0.0 {
            self.stop_if_time_bracket_below_seconds
        } else {
            1.0
        };
        seconds / SECONDS_PER_DAY
    }
}

/// Outcome of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTime {
    /// Design Julian Day.
    pub jd: f64,
    /// Sun longitude at `jd`.
    pub sun_longitude_deg: f64,
    /// Target Sun longitude.
    pub target_deg: f64,
    /// `sun_longitude_deg − target_deg` in (−180, 180].
    pub residual_deg: f64,
    pub widenings: u32,
    pub iterations: u32,
}

/// Sign change that is not the ±180° wrap of the residual.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Locate the design instant for a birth at `birth_jd`.
///
/// # Errors
/// [`ChartError::DesignTimeBracketNotFound`] when no sign change is found
/// after `max_widenings`; resolver errors are propagated.
pub fn solve_design_time<R: PositionResolver + ?Sized>(
    resolver: &R,
    birth_jd: f64,
    config: &DesignTimeConfig,
) -> Result<DesignTime, ChartError> {
    config.validate()?;
    let sun = |jd: f64| resolver.longitude_at(jd, EphemerisBody::Sun);
    let birth_sun = sun(birth_jd)?;
    let offset = config.sun_offset_deg;

    if offset <= 0.0 {
        return Ok(DesignTime {
            jd: birth_jd,
            sun_longitude_deg: birth_sun,
            target_deg: birth_sun,
            residual_deg: 0.0,
            widenings: 0,
            iterations: 0,
        });
    }

    let target = normalize_360(birth_sun - offset);
    let residual = |jd: f64| -> Result<(f64, f64), ChartError> {
        let lon = sun(jd)?;
        Ok((signed_diff_deg(lon, target), lon))
    };
    let found = |jd: f64, lon: f64, res: f64, widenings: u32, iterations: u32| DesignTime {
        jd,
        sun_longitude_deg: lon,
        target_deg: target,
        residual_deg: res,
        widenings,
        iterations,
    };

    let mut lo = birth_jd - (offset + config.initial_half_width_days);
    let mut hi = birth_jd - (offset - config.initial_half_width_days);
    let (mut f_lo, mut lon_lo) = residual(lo)?;
    let (mut f_hi, mut lon_hi) = residual(hi)?;
    let mut widenings = 0;

    loop {
        if f_lo == 0.0 {
            return Ok(found(lo, lon_lo, f_lo, widenings, 0));
        }
        if f_hi == 0.0 {
            return Ok(found(hi, lon_hi, f_hi, widenings, 0));
        }
        if is_genuine_crossing(f_lo, f_hi) {
            break;
        }
        if widenings >= config.max_widenings {
            return Err(ChartError::DesignTimeBracketNotFound { offset_deg: offset });
        }
        widenings += 1;
        lo -= config.widen_step_days;
        hi += config.widen_step_days;
        (f_lo, lon_lo) = residual(lo)?;
        (f_hi, lon_hi) = residual(hi)?;
        debug!(widenings, lo, hi, f_lo, f_hi, "widened design-time bracket");
    }

    let stop_days = config.stop_days();
    let mut iterations = 0;
    while hi - lo > stop_days && iterations < MAX_BISECTIONS {
        iterations += 1;
        let mid = 0.5 * (lo + hi);
        let (f_mid, lon_mid) = residual(mid)?;
        if f_mid.abs() < config.stop_if_abs_sun_diff_deg_below {
            info!(jd = mid, residual = f_mid, iterations, "design time found");
            return Ok(found(mid, lon_mid, f_mid, widenings, iterations));
        }
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let jd = 0.5 * (lo + hi);
    let (res, lon) = residual(jd)?;
    info!(jd, residual = res, iterations, "design time bracket closed");
    Ok(found(jd, lon, res, widenings, iterations))
}
