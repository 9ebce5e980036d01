use serde::{Deserialize, Serialize};

/// One page of a list result. Page numbers are 0-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Current page number (0-based).
    #[schema(example = 0)]
    pub number: u64,
    /// Requested page size.
    #[schema(example = 10)]
    pub size: u64,
    /// Number of elements reported for the result. Computed from the
    /// returned page after name filtering, not from the whole table.
    #[schema(example = 1)]
    pub total_elements: u64,
    #[schema(example = 1)]
    pub total_pages: u64,
    /// Number of elements in `content`.
    #[schema(example = 1)]
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Builds a page whose total equals the length of `content`.
    pub fn from_filtered(content: Vec<T>, number: u64, size: u64) -> Self {
        let total_elements = content.len() as u64;
        let total_pages = if size == 0 {
            1
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            number,
            size,
            total_elements,
            total_pages,
            number_of_elements: total_elements,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
            empty: content.is_empty(),
            content,
        }
    }
}

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Pet type is created")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
