//! Thin REST client for catalog resources.
//!
//! One `EntityClient` per resource path; every catalog screen consumes the
//! same paged-search/create/update/delete contract. Requests are never
//! retried, and failures come back as [`ApiError`].

pub mod error;

pub use error::{user_message, ApiError, ConflictField, ErrorRules};

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use contracts::shared::api::PagedResponse;

use crate::shared::api_utils::api_base;

pub struct EntityClient {
    resource: &'static str,
}

impl EntityClient {
    /// `resource` is the collection path, e.g. `"/api/car-types"`.
    pub const fn new(resource: &'static str) -> Self {
        Self { resource }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", api_base(), self.resource)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}/{}", api_base(), self.resource, id)
    }

    /// Paged search. `page` is 0-indexed on the wire; `keyword` and `status`
    /// are left out of the query string when absent.
    pub async fn search<T: DeserializeOwned>(
        &self,
        page: usize,
        size: usize,
        keyword: Option<&str>,
        status: Option<u8>,
    ) -> Result<PagedResponse<T>, ApiError> {
        let mut url = format!("{}?page={}&size={}", self.collection_url(), page, size);
        if let Some(keyword) = keyword {
            url.push_str(&format!("&keyword={}", urlencoding::encode(keyword)));
        }
        if let Some(status) = status {
            url.push_str(&format!("&status={}", status));
        }

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;
        Self::parse_json(response).await
    }

    pub async fn create<T: DeserializeOwned, P: Serialize>(
        &self,
        payload: &P,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.collection_url())
            .header("Accept", "application/json")
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        Self::parse_json(response).await
    }

    pub async fn update<T: DeserializeOwned, P: Serialize>(
        &self,
        id: i64,
        payload: &P,
    ) -> Result<T, ApiError> {
        let response = Request::put(&self.item_url(id))
            .header("Accept", "application/json")
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        Self::parse_json(response).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error::classify_delete(status, &body));
        }
        Ok(())
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to parse response: {}", e)))
    }

    async fn classify_failure(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error::classify(status, &body)
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}
