use serde::{Deserialize, Serialize};

/// Raw markup of one fetched listing page
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// URL the page was requested from
    pub url: String,

    /// HTTP status code of the response
    pub status: u16,

    /// Response body
    pub body: String,
}

/// One harvested listing item
///
/// Serialized with exactly the keys `title`, `price` and `img_href`, in that
/// order. Absent attributes serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Value of the title node's title attribute
    pub title: Option<String>,

    /// Inner text of the price node, as displayed (not parsed)
    pub price: String,

    /// Image URL from the lazy-load anchor
    pub img_href: Option<String>,
}

/// Everything extracted from a single listing page
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Records in document order
    pub records: Vec<Record>,

    /// Total page count, only read from the first page
    pub page_count: Option<u32>,
}

/// Records collected across every page of a category
#[derive(Debug, Clone, Default)]
pub struct HarvestedListing {
    /// Number of listing pages fetched
    pub pages_fetched: u32,

    /// Records in page order, then in-page order
    pub records: Vec<Record>,
}

/// Summary of a completed harvest run
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// Category URL that was harvested
    pub url: String,

    /// Number of listing pages fetched
    pub pages: u32,

    /// Number of records written
    pub records: usize,
}
