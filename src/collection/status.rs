use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

use super::format::{format_date, format_distance};
use super::model::StatusInput;
use crate::clock::{Clock, SystemClock};
use crate::parse::parse_count;

/// Live mints ending within this window get relative "ends in" text.
const RELATIVE_END_WINDOW_DAYS: i64 = 7;

/// Upstream hints under which a collection may show as live.
const LIVE_ELIGIBLE_HINTS: [&str; 2] = ["upcoming", "live"];

/// Badge color for the status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Yellow,
    Green,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// The one phase that `status_text` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MintPhase {
    Upcoming,
    Live,
    SoldOut,
    Ended,
    Unavailable,
}

impl MintPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Live => "live",
            Self::SoldOut => "sold_out",
            Self::Ended => "ended",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for MintPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived display state of a collection's mint.
///
/// The flags are computed independently. `is_ended` and `is_sold_out` can
/// both hold, and so can `is_upcoming` and `is_sold_out`. Only `phase`,
/// `status_text` and `status_color` pick a single winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStatus {
    pub is_upcoming: bool,
    pub is_live: bool,
    pub is_ended: bool,
    pub is_sold_out: bool,
    pub phase: MintPhase,
    pub status_text: String,
    pub status_color: StatusColor,
    pub start_date_text: String,
    pub end_date_text: String,
    /// Floor of minted / max supply as a percentage, capped at 100
    pub minted_percent: Option<u32>,
}

/// Resolve against the live wall clock.
pub fn resolve_status(input: &StatusInput) -> CollectionStatus {
    resolve_status_with(input, &SystemClock)
}

/// Resolve against any clock, sampled once.
pub fn resolve_status_with(input: &StatusInput, clock: &dyn Clock) -> CollectionStatus {
    resolve_status_at(input, clock.now())
}

/// Resolve at a fixed instant. Never fails: bad dates count as missing and
/// bad counts fail every comparison.
pub fn resolve_status_at(input: &StatusInput, now: DateTime<Utc>) -> CollectionStatus {
    let start = input.start_date();
    let end = input.end_date();
    let minted = parse_count(&input.total_minted);
    let max_supply = parse_count(&input.max_supply);

    let below_supply = matches!((minted, max_supply), (Some(m), Some(max)) if m < max);
    let is_sold_out = matches!((minted, max_supply), (Some(m), Some(max)) if m >= max);

    let is_upcoming = start.is_some_and(|s| s > now);
    let in_window = matches!((start, end), (Some(s), Some(e)) if s <= now && now < e);
    let is_live =
        LIVE_ELIGIBLE_HINTS.contains(&input.status.as_str()) && in_window && below_supply;
    let is_ended = end.is_some_and(|e| e <= now);

    let phase = if is_upcoming {
        MintPhase::Upcoming
    } else if is_live {
        MintPhase::Live
    } else if is_sold_out {
        MintPhase::SoldOut
    } else if is_ended {
        MintPhase::Ended
    } else {
        MintPhase::Unavailable
    };

    let status_text = match phase {
        MintPhase::Upcoming => format!("Upcoming - {}", format_date(start)),
        MintPhase::Live => live_text(end, now),
        MintPhase::SoldOut => "Sold out".to_string(),
        MintPhase::Ended => format!("Ended - {}", format_date(end)),
        MintPhase::Unavailable => "Not available".to_string(),
    };

    let status_color = if is_upcoming {
        StatusColor::Yellow
    } else if is_live {
        StatusColor::Green
    } else {
        StatusColor::Red
    };

    let minted_percent = match (minted, max_supply) {
        (Some(m), Some(max)) if max > 0 => {
            let pct = (i128::from(m.max(0)) * 100 / i128::from(max)).min(100);
            u32::try_from(pct).ok()
        }
        _ => None,
    };

    tracing::trace!(
        hint = %input.status,
        ?start,
        ?end,
        ?minted,
        ?max_supply,
        %phase,
        "resolved collection status"
    );

    CollectionStatus {
        is_upcoming,
        is_live,
        is_ended,
        is_sold_out,
        phase,
        status_text,
        status_color,
        start_date_text: format_date(start),
        end_date_text: format_date(end),
        minted_percent,
    }
}

fn live_text(end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match end {
        Some(e) if e - now <= TimeDelta::days(RELATIVE_END_WINDOW_DAYS) => {
            format!("Live - Ends in {}", format_distance(e - now))
        }
        _ => format!("Live - Ends {}", format_date(end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::collection::model::PublicMint;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn rfc(dt: DateTime<Utc>) -> String {
        dt.to_rfc3339()
    }

    fn input(
        status: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        minted: &str,
        max: &str,
    ) -> StatusInput {
        StatusInput {
            status: status.to_string(),
            mint_start_date: start.map(rfc),
            public_mint: Some(PublicMint {
                start_date: None,
                end_date: end.map(rfc),
            }),
            total_minted: minted.to_string(),
            max_supply: max.to_string(),
        }
    }

    #[test]
    fn test_upcoming() {
        let i = input("upcoming", Some(now() + TimeDelta::days(1)), None, "0", "100");
        let s = resolve_status_at(&i, now());

        assert!(s.is_upcoming);
        assert!(!s.is_live);
        assert!(!s.is_ended);
        assert_eq!(s.phase, MintPhase::Upcoming);
        assert!(s.status_text.starts_with("Upcoming - "));
        assert_eq!(s.status_text, "Upcoming - Oct 19, 2026");
        assert_eq!(s.status_color, StatusColor::Yellow);
        assert_eq!(s.end_date_text, "Unknown");
    }

    #[test]
    fn test_live_window() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(1)),
            "5",
            "10",
        );
        let s = resolve_status_at(&i, now());

        assert!(s.is_live);
        assert!(!s.is_sold_out);
        assert!(!s.is_upcoming);
        assert!(!s.is_ended);
        assert_eq!(s.status_text, "Live - Ends in 1 day");
        assert_eq!(s.status_color, StatusColor::Green);
        assert_eq!(s.minted_percent, Some(50));
    }

    #[test]
    fn test_live_with_upcoming_hint() {
        let i = input(
            "upcoming",
            Some(now() - TimeDelta::hours(1)),
            Some(now() + TimeDelta::hours(5)),
            "0",
            "10",
        );
        let s = resolve_status_at(&i, now());
        assert!(s.is_live);
        assert_eq!(s.status_text, "Live - Ends in 5 hours");
    }

    #[test]
    fn test_live_far_end_uses_absolute_date() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(12)),
            "1",
            "10",
        );
        let s = resolve_status_at(&i, now());
        assert!(s.is_live);
        assert_eq!(s.status_text, "Live - Ends Oct 30, 2026");
    }

    #[test]
    fn test_live_exactly_seven_days_is_relative() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(7)),
            "1",
            "10",
        );
        let s = resolve_status_at(&i, now());
        assert_eq!(s.status_text, "Live - Ends in 7 days");
    }

    #[test]
    fn test_live_needs_eligible_hint() {
        let i = input(
            "paused",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(1)),
            "5",
            "10",
        );
        let s = resolve_status_at(&i, now());
        assert!(!s.is_live);
        assert_eq!(s.status_text, "Not available");
        assert_eq!(s.status_color, StatusColor::Red);
    }

    #[test]
    fn test_live_needs_both_dates() {
        let i = input("live", Some(now() - TimeDelta::days(1)), None, "5", "10");
        let s = resolve_status_at(&i, now());
        assert!(!s.is_live);
        assert_eq!(s.phase, MintPhase::Unavailable);
    }

    #[test]
    fn test_sold_out_suppresses_live() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(1)),
            "10",
            "10",
        );
        let s = resolve_status_at(&i, now());

        assert!(!s.is_live);
        assert!(s.is_sold_out);
        assert_eq!(s.status_text, "Sold out");
        assert_eq!(s.status_color, StatusColor::Red);
        assert_eq!(s.minted_percent, Some(100));
    }

    #[test]
    fn test_ended() {
        let end = now() - TimeDelta::days(3);
        let i = input("live", Some(now() - TimeDelta::days(10)), Some(end), "3", "10");
        let s = resolve_status_at(&i, now());

        assert!(s.is_ended);
        assert!(!s.is_live);
        assert_eq!(s.status_text, "Ended - Oct 15, 2026");
        assert_eq!(s.status_color, StatusColor::Red);
        assert_eq!(s.start_date_text, "Oct 8, 2026");
    }

    #[test]
    fn test_end_boundary_is_ended_not_live() {
        let i = input("live", Some(now() - TimeDelta::days(1)), Some(now()), "1", "10");
        let s = resolve_status_at(&i, now());
        assert!(s.is_ended);
        assert!(!s.is_live);
    }

    #[test]
    fn test_start_boundary_is_live() {
        let i = input("live", Some(now()), Some(now() + TimeDelta::hours(1)), "1", "10");
        let s = resolve_status_at(&i, now());
        assert!(!s.is_upcoming);
        assert!(s.is_live);
    }

    #[test]
    fn test_sold_out_and_ended_overlap() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(5)),
            Some(now() - TimeDelta::days(1)),
            "10",
            "10",
        );
        let s = resolve_status_at(&i, now());

        assert!(s.is_sold_out);
        assert!(s.is_ended);
        // Sold out wins the text
        assert_eq!(s.status_text, "Sold out");
    }

    #[test]
    fn test_huge_minted_count_is_sold_out() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(1)),
            "99999999999999999999",
            "10",
        );
        let s = resolve_status_at(&i, now());

        assert!(s.is_sold_out);
        assert!(!s.is_live);
        assert_eq!(s.status_text, "Sold out");
        assert_eq!(s.minted_percent, Some(100));
    }

    #[test]
    fn test_upcoming_and_sold_out_overlap() {
        let i = input("upcoming", Some(now() + TimeDelta::days(2)), None, "50", "50");
        let s = resolve_status_at(&i, now());

        assert!(s.is_upcoming);
        assert!(s.is_sold_out);
        assert!(!s.is_live);
        // Upcoming wins the text and the badge
        assert_eq!(s.phase, MintPhase::Upcoming);
        assert_eq!(s.status_text, "Upcoming - Oct 20, 2026");
        assert_eq!(s.status_color, StatusColor::Yellow);
    }

    #[test]
    fn test_live_clock_wide_window_is_live() {
        let i = StatusInput {
            status: "live".to_string(),
            mint_start_date: Some("2016-01-01T00:00:00Z".to_string()),
            public_mint: Some(PublicMint {
                start_date: None,
                end_date: Some("2099-01-01T00:00:00Z".to_string()),
            }),
            total_minted: "1".to_string(),
            max_supply: "10".to_string(),
        };
        let s = resolve_status(&i);

        assert!(s.is_live);
        assert!(!s.is_upcoming);
        assert!(!s.is_ended);
        assert_eq!(s.status_color, StatusColor::Green);
        assert_eq!(s.status_text, "Live - Ends Jan 1, 2099");
    }

    #[test]
    fn test_live_clock_far_future_is_upcoming() {
        let i = StatusInput {
            status: "upcoming".to_string(),
            mint_start_date: Some("2100-06-01T00:00:00Z".to_string()),
            public_mint: None,
            total_minted: "0".to_string(),
            max_supply: "10".to_string(),
        };
        let s = resolve_status(&i);

        assert!(s.is_upcoming);
        assert!(!s.is_live);
        assert_eq!(s.status_text, "Upcoming - Jun 1, 2100");
        assert_eq!(s.end_date_text, "Unknown");
    }

    #[test]
    fn test_non_numeric_supply_not_sold_out() {
        let i = input(
            "live",
            Some(now() - TimeDelta::days(1)),
            Some(now() + TimeDelta::days(1)),
            "10",
            "abc",
        );
        let s = resolve_status_at(&i, now());

        assert!(!s.is_sold_out);
        assert!(!s.is_live);
        assert_eq!(s.minted_percent, None);
    }

    #[test]
    fn test_malformed_everything_degrades() {
        let i = StatusInput {
            status: String::new(),
            mint_start_date: Some("garbage".to_string()),
            public_mint: Some(PublicMint {
                start_date: Some("also garbage".to_string()),
                end_date: Some("2026-99-99".to_string()),
            }),
            total_minted: "lots".to_string(),
            max_supply: "".to_string(),
        };
        let s = resolve_status_at(&i, now());

        assert!(!s.is_upcoming);
        assert!(!s.is_live);
        assert!(!s.is_ended);
        assert!(!s.is_sold_out);
        assert_eq!(s.status_text, "Not available");
        assert_eq!(s.start_date_text, "Unknown");
        assert_eq!(s.end_date_text, "Unknown");
        assert_eq!(s.status_color, StatusColor::Red);
    }

    #[test]
    fn test_public_mint_start_fallback() {
        let i = StatusInput {
            status: "upcoming".to_string(),
            mint_start_date: None,
            public_mint: Some(PublicMint {
                start_date: Some("2026-10-25".to_string()),
                end_date: Some("2026-11-01".to_string()),
            }),
            total_minted: "0".to_string(),
            max_supply: "500".to_string(),
        };
        let s = resolve_status_at(&i, now());

        assert!(s.is_upcoming);
        assert_eq!(s.status_text, "Upcoming - Oct 25, 2026");
        assert_eq!(s.end_date_text, "Nov 1, 2026");
        assert_eq!(s.minted_percent, Some(0));
    }

    #[test]
    fn test_clock_drives_transitions() {
        let clock = FixedClock::new(now());
        let i = input(
            "upcoming",
            Some(now() + TimeDelta::hours(1)),
            Some(now() + TimeDelta::hours(3)),
            "0",
            "10",
        );

        assert_eq!(resolve_status_with(&i, &clock).phase, MintPhase::Upcoming);

        clock.advance(TimeDelta::hours(2));
        let s = resolve_status_with(&i, &clock);
        assert_eq!(s.phase, MintPhase::Live);
        assert_eq!(s.status_text, "Live - Ends in 1 hour");

        clock.advance(TimeDelta::hours(2));
        assert_eq!(resolve_status_with(&i, &clock).phase, MintPhase::Ended);
    }

    #[test]
    fn test_zero_supply_percent() {
        let i = input("live", None, None, "0", "0");
        let s = resolve_status_at(&i, now());
        // 0 >= 0
        assert!(s.is_sold_out);
        assert_eq!(s.minted_percent, None);
    }

    #[test]
    fn test_serialized_shape() {
        let i = input("upcoming", Some(now() + TimeDelta::days(1)), None, "0", "100");
        let json = serde_json::to_value(resolve_status_at(&i, now())).unwrap();

        assert_eq!(json["isUpcoming"], true);
        assert_eq!(json["statusColor"], "yellow");
        assert_eq!(json["phase"], "upcoming");
    }
}
