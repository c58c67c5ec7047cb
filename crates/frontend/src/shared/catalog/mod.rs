//! Shared controller state for catalog management screens.
//!
//! Every staff catalog page (car types today, tours and the rest follow the
//! same shape) is a search/paginate/create/update/delete flow over the REST
//! contract in `shared::api`. The state transitions live here as plain
//! structs so they stay testable off-wasm; pages wire them to signals.

mod delete_flow;
mod query;
mod reload;
mod stats;

pub use delete_flow::DeleteFlow;
pub use query::{total_pages, SearchQuery, StatusFilter, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use reload::ReloadToken;
pub use stats::{CatalogStats, STATS_FETCH_CEILING};

/// Catalog behavior switches.
#[derive(Debug, Clone, Copy)]
pub struct CatalogOptions {
    /// Whether the unique entity code may be changed after creation. The
    /// backend contract never states this explicitly; the observed update
    /// payload omits the code, so the default is write-once.
    pub code_editable: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            code_editable: false,
        }
    }
}
