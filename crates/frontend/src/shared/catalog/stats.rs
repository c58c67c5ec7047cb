use contracts::domain::common::EntityStatus;

/// Page size of the unfiltered fetch backing the stat cards. The backend has
/// no aggregate-count endpoint, so the page pulls everything and counts
/// client-side; the ceiling keeps the request bounded.
pub const STATS_FETCH_CEILING: usize = 1000;

/// Derived counts shown in the list-page stat cards. Recomputed on every
/// reload, never cached across navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl CatalogStats {
    pub fn tally(statuses: impl IntoIterator<Item = EntityStatus>) -> Self {
        let mut stats = CatalogStats::default();
        for status in statuses {
            stats.total += 1;
            if status.is_active() {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_by_status() {
        let statuses = [EntityStatus::Active; 6]
            .into_iter()
            .chain([EntityStatus::Inactive; 4]);
        let stats = CatalogStats::tally(statuses);
        assert_eq!(
            stats,
            CatalogStats {
                total: 10,
                active: 6,
                inactive: 4,
            }
        );
    }

    #[test]
    fn empty_catalog() {
        assert_eq!(CatalogStats::tally([]), CatalogStats::default());
    }
}
