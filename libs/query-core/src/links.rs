//! Hypermedia links for paginated collections and single resources.
//!
//! Everything here is a pure function of its inputs; no cursor state is kept
//! between requests.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::{ParseError, Url};

use crate::page::{last_page_number, Page};

pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "pageSize";

pub const COLLECTION_PLACEHOLDER: &str = "{collection}";
pub const RESOURCE_PLACEHOLDER: &str = "{resource}";

pub const REL_SELF: &str = "self";
pub const REL_FIRST: &str = "first";
pub const REL_LAST: &str = "last";
pub const REL_PREV: &str = "prev";
pub const REL_NEXT: &str = "next";
pub const REL_COLLECTION: &str = "collection";

/// Relation name → URL, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkSet(Vec<(String, String)>);

impl LinkSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a relation, replacing the URL of an existing one in place.
    pub fn insert(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        let rel = rel.into();
        let href = href.into();
        match self.0.iter_mut().find(|(r, _)| *r == rel) {
            Some(existing) => existing.1 = href,
            None => self.0.push((rel, href)),
        }
    }

    /// Insert only if the relation is not present yet.
    pub fn insert_absent(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        let rel = rel.into();
        if !self.contains(&rel) {
            self.0.push((rel, href.into()));
        }
    }

    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(r, _)| r == rel)
            .map(|(_, href)| href.as_str())
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.0.iter().any(|(r, _)| r == rel)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(r, h)| (r.as_str(), h.as_str()))
    }
}

impl Serialize for LinkSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, href) in &self.0 {
            map.serialize_entry(rel, href)?;
        }
        map.end()
    }
}

/// Anything that can be addressed as `<collection>/<id>`.
pub trait Identified {
    fn resource_id(&self) -> String;
}

/// A single item with its links, serialized as the item's own fields plus `_links`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct HalResource<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(rename = "_links")]
    pub links: LinkSet,
}

/// Collection envelope for one page of items.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalCollection<T> {
    pub items: Vec<HalResource<T>>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    #[serde(rename = "_links")]
    pub links: LinkSet,
}

// Resolves request paths that carry no scheme or host; never rendered.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// A request URL without query or fragment.
///
/// Absolute URLs render in full; bare request paths render as a path only.
struct RequestUrl {
    url: Url,
    relative: bool,
}

impl RequestUrl {
    fn parse(raw: &str) -> Option<Self> {
        let (mut url, relative) = match Url::parse(raw) {
            Ok(url) => (url, false),
            Err(ParseError::RelativeUrlWithoutBase) => {
                (Url::parse(RELATIVE_BASE).ok()?.join(raw).ok()?, true)
            }
            Err(_) => return None,
        };
        url.set_query(None);
        url.set_fragment(None);
        Some(Self { url, relative })
    }

    fn render(&self) -> String {
        if self.relative {
            self.url.path().to_string()
        } else {
            self.url.to_string()
        }
    }

    /// Non-empty path segments, still percent-encoded.
    fn segments(&self) -> Vec<String> {
        self.url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn with_segments(&self, segments: &[String]) -> Self {
        let mut url = self.url.clone();
        url.set_path(&segments.join("/"));
        Self {
            url,
            relative: self.relative,
        }
    }
}

/// Drop the query string (and fragment) from a request URL.
///
/// A URL that cannot be parsed is returned unchanged.
pub fn strip_query(url: &str) -> String {
    RequestUrl::parse(url)
        .map(|u| u.render())
        .unwrap_or_else(|| url.to_string())
}

/// Substitute `{collection}` and `{resource}` placeholders.
pub fn expand_template(template: &str, collection: &str, resource: &str) -> String {
    template
        .replace(COLLECTION_PLACEHOLDER, collection)
        .replace(RESOURCE_PLACEHOLDER, resource)
}

fn page_link(base_url: &str, page: u64, page_size: u64) -> String {
    format!("{base_url}?{PAGE_PARAM}={page}&{PAGE_SIZE_PARAM}={page_size}")
}

pub fn first_page_link(page_size: u64, base_url: &str) -> String {
    page_link(base_url, 1, page_size)
}

pub fn last_page_link(page_size: u64, total_count: u64, base_url: &str) -> String {
    page_link(base_url, last_page_number(page_size, total_count), page_size)
}

pub fn previous_page_link(page: u64, page_size: u64, base_url: &str) -> Option<String> {
    if page <= 1 {
        return None;
    }
    Some(page_link(base_url, page - 1, page_size))
}

/// `None` once this page reaches the end, including an exact fit, or when
/// the page number cannot advance.
pub fn next_page_link(
    page: u64,
    page_size: u64,
    total_count: u64,
    base_url: &str,
) -> Option<String> {
    if page.saturating_mul(page_size) >= total_count {
        return None;
    }
    let next = page.checked_add(1)?;
    Some(page_link(base_url, next, page_size))
}

/// Collection-level links for a page.
///
/// `self` keeps the caller's full URL including its query string; the page
/// links are built on the stripped base. `prev`/`next` are omitted when not
/// applicable. Extra links may use `{collection}` and never override the
/// navigation relations.
pub fn collection_links(
    page: u64,
    page_size: u64,
    total_count: u64,
    full_url: &str,
    extra_links: &BTreeMap<String, String>,
) -> LinkSet {
    let base_url = strip_query(full_url);

    let mut links = LinkSet::new();
    links.insert(REL_SELF, full_url);
    links.insert(REL_FIRST, first_page_link(page_size, &base_url));
    links.insert(REL_LAST, last_page_link(page_size, total_count, &base_url));
    if let Some(prev) = previous_page_link(page, page_size, &base_url) {
        links.insert(REL_PREV, prev);
    }
    if let Some(next) = next_page_link(page, page_size, total_count, &base_url) {
        links.insert(REL_NEXT, next);
    }
    for (rel, template) in extra_links {
        links.insert_absent(rel.as_str(), expand_template(template, &base_url, ""));
    }
    links
}

/// Links attached to one item of a collection.
pub fn item_links(
    collection_url: &str,
    resource_id: &str,
    templates: &BTreeMap<String, String>,
) -> LinkSet {
    let mut links = LinkSet::new();
    links.insert(REL_SELF, format!("{collection_url}/{resource_id}"));
    links.insert(REL_COLLECTION, collection_url);
    for (rel, template) in templates {
        links.insert_absent(
            rel.as_str(),
            expand_template(template, collection_url, resource_id),
        );
    }
    links
}

/// Wrap a page of items into a collection envelope with item and page links.
pub fn build_collection_links<T: Identified>(
    page: Page<T>,
    full_url: &str,
    extra_collection_links: &BTreeMap<String, String>,
    resource_templates: &BTreeMap<String, String>,
) -> HalCollection<T> {
    let d = page.descriptor;
    let base_url = strip_query(full_url);

    let items = page
        .items
        .into_iter()
        .map(|data| {
            let links = item_links(&base_url, &data.resource_id(), resource_templates);
            HalResource { data, links }
        })
        .collect();

    HalCollection {
        items,
        page: d.page,
        page_size: d.page_size,
        total_count: d.total_count,
        total_pages: d.total_pages(),
        links: collection_links(
            d.page,
            d.page_size,
            d.total_count,
            full_url,
            extra_collection_links,
        ),
    }
}

/// Links for a fetch-by-id response.
///
/// `collection` is added only when the parent path segment is one of
/// `known_collections`.
pub fn build_resource_links<K: AsRef<str>>(
    full_url: &str,
    known_collections: &[K],
    extra_links: &BTreeMap<String, String>,
) -> LinkSet {
    let mut links = LinkSet::new();
    let Some(request) = RequestUrl::parse(full_url) else {
        links.insert(REL_SELF, full_url);
        return links;
    };
    links.insert(REL_SELF, request.render());

    let mut segments = request.segments();
    let resource_id = segments.pop().unwrap_or_default();
    let parent = request.with_segments(&segments).render();
    let known_parent = segments.last().is_some_and(|name| {
        known_collections
            .iter()
            .any(|c| c.as_ref() == name.as_str())
    });
    if known_parent {
        links.insert(REL_COLLECTION, parent.as_str());
    }

    for (rel, template) in extra_links {
        links.insert_absent(
            rel.as_str(),
            expand_template(template, &parent, &resource_id),
        );
    }
    links
}

pub fn wrap_resource<T>(data: T, links: LinkSet) -> HalResource<T> {
    HalResource { data, links }
}
