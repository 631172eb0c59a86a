//! In-memory transport for unit tests

use crate::harvester::transport::{HttpResponse, Transport};
use crate::HarvestError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned responses by exact URL and records every request
///
/// URLs without a canned response fail like a refused connection.
#[derive(Default)]
pub struct ScriptedTransport {
    pages: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), (status, body.into()));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, HarvestError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.pages.get(url) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(HarvestError::Fetch {
                url: url.to_string(),
                message: "Connection refused".to_string(),
            }),
        }
    }
}

/// Renders a listing page in the stock site layout
///
/// The first offers list is a decoy (featured items); the real listing is
/// the second one.
pub fn listing_html(page: u32, items: usize, page_count: Option<u32>) -> String {
    let mut offers = String::new();
    for i in 0..items {
        offers.push_str(&format!(
            r#"<li><figure class="offer-thumb">
                <figure class="offer-thumb__image"><a class="lazy" href="/item/{page}-{i}" data-original="https://img.test/{page}-{i}.jpg"><img src="/blank.gif"></a></figure>
                <p class="offer-thumb__title" title="Item {page}-{i}">Item {page}-{i}...</p>
                <span class="price-cp">{price},00 €</span>
            </figure></li>"#,
            page = page,
            i = i,
            price = 10 + i
        ));
    }

    let counter = page_count
        .map(|count| format!(r#"<span class="page-count">{}</span>"#, count))
        .unwrap_or_default();

    format!(
        r#"<html><body>
        <ul class="js-main-offers-list"><li><figure class="offer-thumb featured">
            <figure class="offer-thumb__image"><a class="lazy" data-original="https://img.test/featured.jpg"></a></figure>
            <p class="offer-thumb__title" title="Featured">Featured</p>
            <span class="price-cp">1,00 €</span>
        </figure></li></ul>
        <ul class="js-main-offers-list">{offers}</ul>
        <div class="pagination">{counter}</div>
        </body></html>"#,
        offers = offers,
        counter = counter
    )
}
