use leptos::prelude::*;

use contracts::domain::car_type::aggregate::CarType;

use crate::shared::catalog::{total_pages, CatalogStats, SearchQuery};

#[derive(Debug, Clone)]
pub struct CarTypeListState {
    pub query: SearchQuery,
    pub items: Vec<CarType>,
    pub total_count: usize,
    pub total_pages: usize,
    pub stats: Option<CatalogStats>,
    pub loading: bool,
    pub is_loaded: bool,
}

impl Default for CarTypeListState {
    fn default() -> Self {
        Self {
            query: SearchQuery::default(),
            items: Vec::new(),
            total_count: 0,
            total_pages: 1,
            stats: None,
            loading: false,
            is_loaded: false,
        }
    }
}

impl CarTypeListState {
    /// Replace the visible page and recompute pagination bounds. If the
    /// current page fell beyond the new bounds (rows deleted elsewhere), it
    /// is pulled back to the last page and `true` is returned: the rows just
    /// applied belong to the stale page, so the caller must fetch again.
    pub fn apply_page(&mut self, items: Vec<CarType>, total: usize) -> bool {
        self.total_count = total;
        self.total_pages = total_pages(total, self.query.page_size);
        let page_moved = self.query.page > self.total_pages;
        if page_moved {
            self.query.page = self.total_pages;
        }
        self.items = items;
        self.loading = false;
        self.is_loaded = true;
        page_moved
    }

    /// Page to request after deleting one row from the current page: when
    /// the row was the last one visible, step back a page rather than
    /// reloading an empty one.
    pub fn page_after_removal(&self) -> usize {
        if self.items.len() <= 1 && self.query.page > 1 {
            self.query.page - 1
        } else {
            self.query.page
        }
    }
}

pub fn create_state() -> RwSignal<CarTypeListState> {
    RwSignal::new(CarTypeListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::car_type::aggregate::CarTypeId;
    use contracts::domain::common::EntityStatus;

    fn entity(id: i64) -> CarType {
        CarType {
            id: CarTypeId(id),
            code: "SUV".to_string(),
            name: format!("Xe {} chỗ", id),
            description: None,
            status: EntityStatus::Active,
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn apply_page_recomputes_bounds() {
        let mut state = CarTypeListState::default();
        state.query.set_page_size(10);
        assert!(!state.apply_page(vec![entity(1), entity(2)], 42));
        assert_eq!(state.total_count, 42);
        assert_eq!(state.total_pages, 5);
        assert!(state.is_loaded);
        assert!(!state.loading);
    }

    #[test]
    fn apply_page_pulls_page_back_into_bounds() {
        let mut state = CarTypeListState::default();
        state.query.page = 9;
        assert!(state.apply_page(Vec::new(), 15));
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.query.page, 2);
    }

    #[test]
    fn empty_result_keeps_one_page() {
        let mut state = CarTypeListState::default();
        assert!(!state.apply_page(Vec::new(), 0));
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn shrunken_total_forces_a_follow_up_fetch() {
        let mut state = CarTypeListState::default();
        state.query.page = 4;
        state.items = vec![entity(31), entity(32)];

        // the data shrank under us; page 4 comes back empty
        assert!(state.apply_page(Vec::new(), 12));
        assert_eq!(state.query.page, 2);

        // the follow-up fetch for the corrected page settles
        assert!(!state.apply_page(vec![entity(11), entity(12)], 12));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.query.page, 2);
    }

    #[test]
    fn deleting_last_visible_row_steps_back_a_page() {
        let mut state = CarTypeListState::default();
        state.query.page = 3;
        state.items = vec![entity(1)];
        assert_eq!(state.page_after_removal(), 2);

        state.items = vec![entity(1), entity(2)];
        assert_eq!(state.page_after_removal(), 3);

        // first page never steps back
        state.query.page = 1;
        state.items = vec![entity(1)];
        assert_eq!(state.page_after_removal(), 1);
    }
}
