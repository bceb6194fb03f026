use std::collections::HashMap;

use crate::clock::Clock;
use crate::collection::{resolve_status_at, Collection, MintPhase};

/// A collection moved from one mint phase to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseChange {
    pub collection_id: String,
    /// `None` on the first observation
    pub from: Option<MintPhase>,
    pub to: MintPhase,
}

/// Remembers the last phase of each collection and reports transitions.
#[derive(Debug, Default)]
pub struct StatusWatcher {
    phases: HashMap<String, MintPhase>,
}

impl StatusWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every collection at one clock sample and return the ones
    /// whose phase changed since the previous call.
    pub fn observe(&mut self, collections: &[Collection], clock: &dyn Clock) -> Vec<PhaseChange> {
        let now = clock.now();
        let mut changes = Vec::new();

        for collection in collections {
            let phase = resolve_status_at(&collection.mint, now).phase;
            let previous = self.phases.insert(collection.id.clone(), phase);
            if previous != Some(phase) {
                changes.push(PhaseChange {
                    collection_id: collection.id.clone(),
                    from: previous,
                    to: phase,
                });
            }
        }

        if !changes.is_empty() {
            tracing::debug!(changed = changes.len(), at = %now, "mint phases changed");
        }
        changes
    }

    /// Last seen phase for a collection.
    pub fn phase(&self, collection_id: &str) -> Option<MintPhase> {
        self.phases.get(collection_id).copied()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::collection::{PublicMint, StatusInput};
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn collection(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Collection {
        Collection {
            id: id.to_string(),
            name: "Test".to_string(),
            creator: "0xcreator".to_string(),
            mint_price: "0.05".to_string(),
            mint: StatusInput {
                status: "upcoming".to_string(),
                mint_start_date: Some(start.to_rfc3339()),
                public_mint: Some(PublicMint {
                    start_date: None,
                    end_date: Some(end.to_rfc3339()),
                }),
                total_minted: "0".to_string(),
                max_supply: "10".to_string(),
            },
        }
    }

    #[test]
    fn test_first_observation_reports_all() {
        let clock = FixedClock::new(now());
        let collections = vec![
            collection("a", now() + TimeDelta::hours(1), now() + TimeDelta::hours(2)),
            collection("b", now() - TimeDelta::hours(1), now() + TimeDelta::hours(2)),
        ];
        let mut watcher = StatusWatcher::new();

        let changes = watcher.observe(&collections, &clock);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.from.is_none()));
        assert_eq!(watcher.phase("a"), Some(MintPhase::Upcoming));
        assert_eq!(watcher.phase("b"), Some(MintPhase::Live));
        assert_eq!(watcher.len(), 2);
    }

    #[test]
    fn test_only_transitions_reported() {
        let clock = FixedClock::new(now());
        let collections = vec![
            collection("a", now() + TimeDelta::hours(1), now() + TimeDelta::hours(3)),
            collection("b", now() - TimeDelta::hours(1), now() + TimeDelta::hours(10)),
        ];
        let mut watcher = StatusWatcher::new();
        watcher.observe(&collections, &clock);

        // Nothing moved
        assert!(watcher.observe(&collections, &clock).is_empty());

        clock.advance(TimeDelta::hours(2));
        let changes = watcher.observe(&collections, &clock);
        assert_eq!(
            changes,
            vec![PhaseChange {
                collection_id: "a".to_string(),
                from: Some(MintPhase::Upcoming),
                to: MintPhase::Live,
            }]
        );

        clock.advance(TimeDelta::hours(2));
        let changes = watcher.observe(&collections, &clock);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].to, MintPhase::Ended);
    }

    #[test]
    fn test_empty_watcher() {
        let watcher = StatusWatcher::new();
        assert!(watcher.is_empty());
        assert_eq!(watcher.phase("missing"), None);
    }
}
