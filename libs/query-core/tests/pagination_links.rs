use std::collections::BTreeMap;

use query_core::{
    build_collection_links, build_resource_links, first_page_link, last_page_link, next_page_link,
    previous_page_link, strip_query, Identified, Page, PageDescriptor,
};
use serde::Serialize;

const URL: &str = "http://localhost:3000/movies";

#[derive(Clone, Debug, Serialize)]
struct Item {
    id: u32,
    title: &'static str,
}

impl Identified for Item {
    fn resource_id(&self) -> String {
        self.id.to_string()
    }
}

fn items(ids: &[u32]) -> Vec<Item> {
    ids.iter().map(|&id| Item { id, title: "t" }).collect()
}

#[test]
fn previous_page_link_is_absent_on_first_page() {
    assert_eq!(previous_page_link(1, 100, URL), None);
    assert_eq!(
        previous_page_link(2, 100, URL).as_deref(),
        Some("http://localhost:3000/movies?page=1&pageSize=100")
    );
}

#[test]
fn next_page_link_is_absent_on_last_page() {
    assert_eq!(
        next_page_link(1, 100, 200, URL).as_deref(),
        Some("http://localhost:3000/movies?page=2&pageSize=100")
    );
    // exact fit is the last page
    assert_eq!(next_page_link(2, 100, 200, URL), None);
    assert_eq!(next_page_link(3, 100, 200, URL), None);
    assert_eq!(next_page_link(1, 100, 0, URL), None);
}

#[test]
fn first_and_last_page_links() {
    assert_eq!(
        first_page_link(100, URL),
        "http://localhost:3000/movies?page=1&pageSize=100"
    );
    assert_eq!(
        last_page_link(100, 200, URL),
        "http://localhost:3000/movies?page=2&pageSize=100"
    );
    assert_eq!(
        last_page_link(100, 201, URL),
        "http://localhost:3000/movies?page=3&pageSize=100"
    );
}

#[test]
fn zero_page_size_does_not_divide() {
    assert_eq!(
        last_page_link(0, 50, URL),
        "http://localhost:3000/movies?page=0&pageSize=0"
    );
    assert_eq!(PageDescriptor::new(1, 0, 50).total_pages(), 0);
}

#[test]
fn zero_page_size_never_overflows_next_page() {
    assert_eq!(
        next_page_link(1, 0, 5, URL).as_deref(),
        Some("http://localhost:3000/movies?page=2&pageSize=0")
    );
    assert_eq!(next_page_link(u64::MAX, 0, 5, URL), None);
    assert_eq!(next_page_link(1, 0, 0, URL), None);
    assert_eq!(
        previous_page_link(u64::MAX, 0, URL).as_deref(),
        Some("http://localhost:3000/movies?page=18446744073709551614&pageSize=0")
    );
}

#[test]
fn strip_query_removes_query_and_fragment() {
    assert_eq!(strip_query("/movies?page=2&pageSize=5"), "/movies");
    assert_eq!(strip_query("/movies#top"), "/movies");
    assert_eq!(strip_query("/movies"), "/movies");
    assert_eq!(
        strip_query("http://api.test/movies?sort=year:desc#list"),
        "http://api.test/movies"
    );
    assert_eq!(strip_query("movies/42?x=1"), "/movies/42");
}

#[test]
fn collection_envelope_omits_prev_on_first_page() {
    let page = Page::new(items(&[1, 2]), PageDescriptor::new(1, 2, 5));
    let full_url = "/movies?filter=title:alien&page=1&pageSize=2";

    let envelope = build_collection_links(page, full_url, &BTreeMap::new(), &BTreeMap::new());

    assert_eq!(envelope.links.get("self"), Some(full_url));
    assert_eq!(envelope.links.get("first"), Some("/movies?page=1&pageSize=2"));
    assert_eq!(envelope.links.get("last"), Some("/movies?page=3&pageSize=2"));
    assert_eq!(envelope.links.get("next"), Some("/movies?page=2&pageSize=2"));
    assert!(!envelope.links.contains("prev"));
    assert_eq!(envelope.total_pages, 3);

    let json = serde_json::to_value(&envelope).unwrap();
    let links = json["_links"].as_object().unwrap();
    assert!(!links.contains_key("prev"), "prev must be absent, not null");
    assert_eq!(json["pageSize"], 2);
    assert_eq!(json["totalCount"], 5);
}

#[test]
fn collection_envelope_omits_next_on_exact_last_page() {
    let page = Page::new(items(&[3, 4]), PageDescriptor::new(2, 2, 4));
    let envelope = build_collection_links(
        page,
        "/movies?page=2&pageSize=2",
        &BTreeMap::new(),
        &BTreeMap::new(),
    );

    assert_eq!(envelope.links.get("prev"), Some("/movies?page=1&pageSize=2"));
    assert!(!envelope.links.contains("next"));

    let json = serde_json::to_value(&envelope).unwrap();
    assert!(json["_links"].get("next").is_none());
}

#[test]
fn items_get_self_collection_and_expanded_templates() {
    let mut templates = BTreeMap::new();
    templates.insert(
        "comments".to_string(),
        "{collection}/{resource}/comments".to_string(),
    );
    let mut extra = BTreeMap::new();
    extra.insert("search".to_string(), "{collection}/search".to_string());
    // reserved relations are never overridden
    extra.insert("self".to_string(), "/elsewhere".to_string());

    let page = Page::new(items(&[7]), PageDescriptor::new(1, 10, 1));
    let envelope = build_collection_links(
        page,
        "http://api.test/movies?sort=year:desc",
        &extra,
        &templates,
    );

    let item = &envelope.items[0];
    assert_eq!(item.links.get("self"), Some("http://api.test/movies/7"));
    assert_eq!(item.links.get("collection"), Some("http://api.test/movies"));
    assert_eq!(
        item.links.get("comments"),
        Some("http://api.test/movies/7/comments")
    );
    assert_eq!(
        envelope.links.get("search"),
        Some("http://api.test/movies/search")
    );
    assert_eq!(
        envelope.links.get("self"),
        Some("http://api.test/movies?sort=year:desc")
    );

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["items"][0]["id"], 7);
    assert_eq!(json["items"][0]["title"], "t");
    assert_eq!(json["items"][0]["_links"]["self"], "http://api.test/movies/7");
}

#[test]
fn resource_links_point_at_known_parent_collection() {
    let links = build_resource_links("/movies/42?fields=title", &["movies"], &BTreeMap::new());
    assert_eq!(links.get("self"), Some("/movies/42"));
    assert_eq!(links.get("collection"), Some("/movies"));

    let links = build_resource_links("http://api.test/movies/42/", &["movies"], &BTreeMap::new());
    assert_eq!(links.get("collection"), Some("http://api.test/movies"));
}

#[test]
fn resource_links_skip_unknown_parent() {
    let links = build_resource_links("/theaters/42", &["movies"], &BTreeMap::new());
    assert_eq!(links.get("self"), Some("/theaters/42"));
    assert!(!links.contains("collection"));

    let links = build_resource_links("/42", &["movies"], &BTreeMap::new());
    assert!(!links.contains("collection"));

    // the parent segment, not any earlier one, must name the collection
    let links = build_resource_links("/movies/42/cast", &["movies"], &BTreeMap::new());
    assert!(!links.contains("collection"));
}

#[test]
fn resource_links_keep_encoded_segments() {
    let mut extra = BTreeMap::new();
    extra.insert(
        "reviews".to_string(),
        "{collection}/{resource}/reviews".to_string(),
    );

    let links = build_resource_links(
        "http://api.test/movies/the%20matrix#cast",
        &["movies"],
        &extra,
    );
    assert_eq!(links.get("self"), Some("http://api.test/movies/the%20matrix"));
    assert_eq!(links.get("collection"), Some("http://api.test/movies"));
    assert_eq!(
        links.get("reviews"),
        Some("http://api.test/movies/the%20matrix/reviews")
    );
}

#[test]
fn resource_links_expand_extra_templates() {
    let mut extra = BTreeMap::new();
    extra.insert("poster".to_string(), "/posters/{resource}.jpg".to_string());
    let links = build_resource_links("/movies/42", &["movies"], &extra);
    assert_eq!(links.get("poster"), Some("/posters/42.jpg"));
    let rels: Vec<_> = links.iter().map(|(rel, _)| rel).collect();
    assert_eq!(rels, vec!["self", "collection", "poster"]);
}
