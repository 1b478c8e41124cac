use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of the last page; `0` when `page_size` is zero or nothing matched.
pub fn last_page_number(page_size: u64, total_count: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Position of a page inside a result set, as reported by the data-access layer.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
}

impl PageDescriptor {
    pub fn new(page: u64, page_size: u64, total_count: u64) -> Self {
        Self {
            page,
            page_size,
            total_count,
        }
    }

    pub fn total_pages(&self) -> u64 {
        last_page_number(self.page_size, self.total_count)
    }
}

/// Validated `page` / `pageSize` request parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Resolve raw query parameters.
    ///
    /// Missing values fall back to page 1 and `default_size`; a page size above
    /// `max_size` is clamped down to it. Zero is rejected for both.
    pub fn resolve(
        page: Option<u64>,
        page_size: Option<u64>,
        default_size: u64,
        max_size: u64,
    ) -> Result<Self, Error> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(Error::InvalidPage);
        }
        let page_size = page_size.unwrap_or(default_size);
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        Ok(Self {
            page,
            page_size: page_size.min(max_size.max(1)),
        })
    }

    /// Number of items preceding this page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn describe(&self, total_count: u64) -> PageDescriptor {
        PageDescriptor::new(self.page, self.page_size, total_count)
    }
}

/// A page of items together with its descriptor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub descriptor: PageDescriptor,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, descriptor: PageDescriptor) -> Self {
        Self { items, descriptor }
    }

    /// Map items while preserving the descriptor (Domain->DTO mapping convenience)
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            descriptor: self.descriptor,
        }
    }
}
