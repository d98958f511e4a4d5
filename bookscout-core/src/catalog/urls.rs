//! Request target construction

use crate::config::CatalogConfig;
use crate::types::{Isbn, SearchQuery};

/// `<search_url>?<title|author>=<percent-encoded text>`
pub fn search_url(config: &CatalogConfig, query: &SearchQuery) -> String {
    format!(
        "{}?{}={}",
        config.search_url,
        query.mode().as_param(),
        urlencoding::encode(query.text())
    )
}

/// `<books_url>?bibkeys=ISBN:<isbn>&format=json&jscmd=data`
pub fn detail_url(config: &CatalogConfig, isbn: &Isbn) -> String {
    format!(
        "{}?bibkeys=ISBN:{}&format=json&jscmd=data",
        config.books_url,
        urlencoding::encode(isbn.as_str())
    )
}
