use crate::config::types::{Config, HttpConfig, PaginationConfig, SelectorConfig, SiteConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_pagination_config(&config.pagination)?;
    validate_selector_config(&config.selectors)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates the site base URL
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    Ok(())
}

fn validate_pagination_config(config: &PaginationConfig) -> Result<(), ConfigError> {
    if config.page_suffix.is_empty() {
        return Err(ConfigError::Validation(
            "page-suffix cannot be empty".to_string(),
        ));
    }

    if config.items_per_page < 1 {
        return Err(ConfigError::Validation(format!(
            "items-per-page must be >= 1, got {}",
            config.items_per_page
        )));
    }

    Ok(())
}

/// Validates that every selector parses and every attribute name is set
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for selector in [
        &config.list,
        &config.item,
        &config.title,
        &config.price,
        &config.image_container,
        &config.image_anchor,
        &config.page_count,
    ] {
        validate_selector(selector)?;
    }

    for (name, attr) in [
        ("title-attr", &config.title_attr),
        ("image-attr", &config.image_attr),
    ] {
        if attr.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1 when set".to_string(),
        ));
    }
    Ok(())
}

/// Parses a CSS selector, mapping failures to a config error
pub(crate) fn validate_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
