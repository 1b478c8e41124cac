use std::collections::BTreeMap;

use query_core::{compile_sort, SortSpec};
use serde::{Deserialize, Serialize};

/// Configuration for the movies module (`modules.movies` in the app config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviesConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// Sort expression applied when a request has none, e.g. `year:desc`.
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// JSON array of movie documents loaded at startup. Relative paths
    /// resolve against the server home directory.
    #[serde(default)]
    pub fixtures_path: Option<String>,
    /// Prefix for generated links, e.g. `https://catalog.example.com`.
    /// Empty keeps links relative to the request path.
    #[serde(default)]
    pub public_url: String,
    #[serde(default)]
    pub links: LinksConfig,
}

/// Extra hypermedia relations. Templates may use `{collection}` and `{resource}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    /// Parent path segments that get a `collection` link on fetch-by-id.
    #[serde(default = "default_known_collections")]
    pub known_collections: Vec<String>,
    #[serde(default)]
    pub collection: BTreeMap<String, String>,
    #[serde(default)]
    pub resource: BTreeMap<String, String>,
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            default_sort: default_sort(),
            fixtures_path: None,
            public_url: String::new(),
            links: LinksConfig::default(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            known_collections: default_known_collections(),
            collection: BTreeMap::new(),
            resource: BTreeMap::new(),
        }
    }
}

impl MoviesConfig {
    pub fn default_sort_spec(&self) -> SortSpec {
        compile_sort(Some(self.default_sort.as_str()), &SortSpec::empty())
    }
}

fn default_page_size() -> u64 {
    20
}

fn default_max_page_size() -> u64 {
    100
}

fn default_sort() -> String {
    "year:desc".to_string()
}

fn default_known_collections() -> Vec<String> {
    vec!["movies".to_string()]
}
