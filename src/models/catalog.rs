//! Wire-shape models for the catalog service's JSON responses. Converted to
//! the domain models in [`crate::models::game`] by [`crate::catalog::conv`].


use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogGame {
    pub id: u64,
    pub name: String,
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

/// The list endpoint wraps its rows in a `results` envelope alongside paging
/// fields we don't consume.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogPage {
    pub results: Vec<CatalogGame>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogGameDetail {
    pub id: u64,
    pub name: String,
    pub background_image: Option<String>,
    #[serde(default)]
    pub description: String,
}
