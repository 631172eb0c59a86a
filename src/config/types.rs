use serde::Deserialize;

/// Default category root on the listing site
pub const DEFAULT_BASE_URL: &str = "https://www.osta.ee/kategooria/";

/// Main configuration structure for the harvester
///
/// Every section is optional; an empty file yields the stock site layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub pagination: PaginationConfig,
    pub selectors: SelectorConfig,
    pub http: HttpConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL that category paths are appended to
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Pagination behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Appended to the category URL before the page number
    #[serde(rename = "page-suffix")]
    pub page_suffix: String,

    /// Items the site lists per page (only used for the size estimate)
    #[serde(rename = "items-per-page")]
    pub items_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_suffix: "/page-".to_string(),
            items_per_page: 60,
        }
    }
}

/// CSS selectors and attribute names describing the listing markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Containers holding listing items
    pub list: String,

    /// Which `list` match (0-based, document order) holds the real listing
    #[serde(rename = "list-index")]
    pub list_index: usize,

    /// One listing item inside the container
    pub item: String,

    /// Node carrying the item title
    pub title: String,

    /// Attribute of the title node holding the title text
    #[serde(rename = "title-attr")]
    pub title_attr: String,

    /// Node whose inner text is the price
    pub price: String,

    /// Node wrapping the item image
    #[serde(rename = "image-container")]
    pub image_container: String,

    /// Anchor inside the image container
    #[serde(rename = "image-anchor")]
    pub image_anchor: String,

    /// Attribute of the image anchor holding the image URL
    #[serde(rename = "image-attr")]
    pub image_attr: String,

    /// Node whose inner text is the total page count
    #[serde(rename = "page-count")]
    pub page_count: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            list: "ul.js-main-offers-list".to_string(),
            list_index: 1,
            item: "figure.offer-thumb".to_string(),
            title: "p.offer-thumb__title".to_string(),
            title_attr: "title".to_string(),
            price: "span.price-cp".to_string(),
            image_container: "figure.offer-thumb__image".to_string(),
            image_anchor: "a.lazy".to_string(),
            image_attr: "data-original".to_string(),
            page_count: "span.page-count".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds; no timeout when absent
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}
