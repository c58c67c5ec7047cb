use contracts::domain::car_type::aggregate::{CarType, CarTypeDto, CarTypeId};
use contracts::shared::api::PagedResponse;

use crate::shared::api::{ApiError, EntityClient};
use crate::shared::catalog::{SearchQuery, STATS_FETCH_CEILING};

const CLIENT: EntityClient = EntityClient::new("/api/car-types");

/// One page of the catalog for the current filters.
pub async fn search(query: &SearchQuery) -> Result<PagedResponse<CarType>, ApiError> {
    CLIENT
        .search(
            query.wire_page(),
            query.page_size,
            query.keyword_param(),
            query.status.as_param(),
        )
        .await
}

/// Unfiltered fetch backing the stat cards. Pulls up to
/// [`STATS_FETCH_CEILING`] records in one request.
pub async fn fetch_all() -> Result<Vec<CarType>, ApiError> {
    let page = CLIENT
        .search::<CarType>(0, STATS_FETCH_CEILING, None, None)
        .await?;
    Ok(page.items)
}

pub async fn create(dto: &CarTypeDto) -> Result<CarType, ApiError> {
    CLIENT.create(dto).await
}

pub async fn update(id: CarTypeId, dto: &CarTypeDto) -> Result<CarType, ApiError> {
    CLIENT.update(id.value(), dto).await
}

pub async fn delete(id: CarTypeId) -> Result<(), ApiError> {
    CLIENT.delete(id.value()).await
}
