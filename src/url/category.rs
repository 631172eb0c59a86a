use crate::HarvestError;
use url::Url;

/// Strips leading slashes from a category path
///
/// Returns `None` when nothing is left, which means no category was given.
///
/// # Examples
///
/// ```
/// use listing_harvester::url::normalize_category;
///
/// assert_eq!(normalize_category("/arvutid/sulearvutid"), Some("arvutid/sulearvutid".to_string()));
/// assert_eq!(normalize_category("/"), None);
/// ```
pub fn normalize_category(raw: &str) -> Option<String> {
    let category = raw.trim_start_matches('/');
    if category.is_empty() {
        None
    } else {
        Some(category.to_string())
    }
}

/// Builds the URL of a category's first listing page
///
/// # Arguments
///
/// * `base_url` - The configured site base URL
/// * `category` - A normalized category path
///
/// # Returns
///
/// * `Ok(String)` - The concatenated URL
/// * `Err(HarvestError::UrlParse)` - The result is not a valid absolute URL
pub fn category_url(base_url: &str, category: &str) -> Result<String, HarvestError> {
    let full = format!("{}{}", base_url, category);
    Url::parse(&full)?;
    Ok(full)
}

/// Builds the URL of listing page `index` (2 or greater) of a category
pub fn page_url(category_url: &str, suffix: &str, index: u32) -> String {
    format!("{}{}{}", category_url, suffix, index)
}
