//! IANA zone resolution and local → UTC conversion.
//!
//! Overlap policy: a wall-clock time that occurs twice (fall-back) resolves
//! to the later UTC instant, i.e. the offset in force after the transition.
//! Gap policy: a wall-clock time skipped by a spring-forward transition is
//! read with the offset in force before the transition, which lands the
//! instant the same distance past the transition.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::TimeError;

/// How a local wall-clock time mapped onto the zone's offset rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalResolution {
    /// Exactly one UTC instant.
    Unique,
    /// Fall-back overlap; the later instant was chosen.
    OverlapLater,
    /// Spring-forward gap; the pre-transition offset was applied.
    GapShifted,
}

/// Look up an IANA zone identifier.
pub fn resolve_zone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::TimezoneNotFound(name.to_string()))
}

/// Convert a local wall-clock time in `tz` to a UTC instant.
pub fn local_to_utc(
    local: NaiveDateTime,
    tz: Tz,
) -> Result<(DateTime<Utc>, LocalResolution), TimeError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => Ok((t.with_timezone(&Utc), LocalResolution::Unique)),
        LocalResult::Ambiguous(earlier, later) => {
            warn!(
                %local,
                zone = tz.name(),
                earlier = %earlier.with_timezone(&Utc),
                later = %later.with_timezone(&Utc),
                "ambiguous local time, using later instant"
            );
            Ok((later.with_timezone(&Utc), LocalResolution::OverlapLater))
        }
        LocalResult::None => {
            // Offset a comfortable distance before the transition.
            let probe = local - TimeDelta::hours(12);
            let before = tz.offset_from_utc_datetime(&probe).fix().local_minus_utc();
            let utc_naive = local - TimeDelta::seconds(i64::from(before));
            let utc = Utc.from_utc_datetime(&utc_naive);
            warn!(
                %local,
                zone = tz.name(),
                offset_seconds = before,
                %utc,
                "nonexistent local time, applying pre-transition offset"
            );
            Ok((utc, LocalResolution::GapShifted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn resolve_known_zone() {
        assert_eq!(resolve_zone("Europe/Amsterdam").unwrap(), Tz::Europe__Amsterdam);
        assert_eq!(resolve_zone("UTC").unwrap(), Tz::UTC);
    }

    #[test]
    fn resolve_unknown_zone() {
        assert_eq!(
            resolve_zone("Mars/Olympus_Mons"),
            Err(TimeError::TimezoneNotFound("Mars/Olympus_Mons".into()))
        );
    }

    #[test]
    fn summer_time_offset_applied() {
        // CEST (+02:00) in April 1990
        let (utc, res) = local_to_utc(local(1990, 4, 9, 18, 4), Tz::Europe__Amsterdam).unwrap();
        assert_eq!(res, LocalResolution::Unique);
        assert_eq!(utc.timestamp(), 639_677_040);
    }

    #[test]
    fn fall_back_overlap_takes_later_instant() {
        // 02:30 happens twice on 2021-10-31; the second one is CET (+01:00) = 01:30Z
        let (utc, res) = local_to_utc(local(2021, 10, 31, 2, 30), Tz::Europe__Amsterdam).unwrap();
        assert_eq!(res, LocalResolution::OverlapLater);
        assert_eq!(utc.timestamp(), 1_635_643_800);
    }

    #[test]
    fn spring_forward_gap_uses_pre_transition_offset() {
        // 02:30 does not exist on 2021-03-28; read with +01:00 → 01:30Z
        let (utc, res) = local_to_utc(local(2021, 3, 28, 2, 30), Tz::Europe__Amsterdam).unwrap();
        assert_eq!(res, LocalResolution::GapShifted);
        assert_eq!(utc.timestamp(), 1_616_895_000);
    }
}
