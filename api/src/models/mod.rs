// API request/response models

pub mod asset;
pub mod block;
pub mod transaction;

pub use asset::{AssetDescriptionResponse, AssetResponse};
pub use block::{
    BlockOperation, BlockResponse, BurnDto, MintDto, NoteDto, SpendDto, TransactionDto,
    UpsertBlockDto, UpsertBlocksRequest,
};
pub use transaction::TransactionResponse;

use serde::{Deserialize, Deserializer, Serialize};

/// Largest page a client may request
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Highest page number; keeps the row offset within a Postgres bigint
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_LIMIT;

fn deserialize_page<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    let page = s.parse::<u64>().map_err(serde::de::Error::custom)?;
    Ok(page.clamp(1, MAX_PAGE))
}

fn deserialize_limit<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    let limit = s.parse::<u64>().map_err(serde::de::Error::custom)?;
    Ok(limit.clamp(1, MAX_PAGE_LIMIT))
}

/// Common pagination parameters for API endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    pub page: u64,
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    /// Rows to skip for the requested page (pages start at 1)
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Pagination metadata for responses
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(total: u64, pagination: &PaginationParams) -> Self {
        Self {
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: total.div_ceil(pagination.limit.max(1)),
        }
    }
}

/// Response structure with pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: T,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: T, total: u64, pagination: &PaginationParams) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(total, pagination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> PaginationParams {
        let uri: http::Uri = format!("http://localhost/assets?{}", query).parse().unwrap();
        axum::extract::Query::<PaginationParams>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn defaults_to_first_page_of_twenty() {
        let params = parse("");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn clamps_limit_and_page() {
        let params = parse("page=0&limit=5000");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, MAX_PAGE_LIMIT);

        let params = parse("page=3&limit=0");
        assert_eq!(params.limit, 1);
        assert_eq!(params.offset(), 2);
    }

    #[test]
    fn huge_page_numbers_are_capped() {
        let params = parse(&format!("page={}&limit=100", u64::MAX));
        assert_eq!(params.page, MAX_PAGE);
        assert!(params.offset() <= i64::MAX as u64);

        let params = PaginationParams {
            page: u64::MAX,
            limit: MAX_PAGE_LIMIT,
        };
        assert_eq!(params.offset(), u64::MAX);
    }

    #[test]
    fn computes_total_pages() {
        let params = PaginationParams { page: 2, limit: 20 };
        assert_eq!(PaginationMeta::new(0, &params).total_pages, 0);
        assert_eq!(PaginationMeta::new(20, &params).total_pages, 1);
        assert_eq!(PaginationMeta::new(41, &params).total_pages, 3);
        assert_eq!(params.offset(), 20);
    }
}
