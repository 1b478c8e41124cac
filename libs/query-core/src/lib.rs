//! Query core for catalog collections.
//!
//! Two independent pieces:
//! - a compiler that turns the `filter` / `sort` query-string grammar into a
//!   schema-validated [`Predicate`] and [`SortSpec`];
//! - a link generator that turns a [`PageDescriptor`] and request URL into
//!   hypermedia [`LinkSet`]s.
//!
//! Neither knows how requests arrive or how documents are stored.

pub mod error;
pub mod filter;
pub mod links;
pub mod page;
pub mod predicate;
pub mod schema;
pub mod sort;

pub use error::{Error, UnknownTypeTag};
pub use filter::compile_filter;
pub use links::{
    build_collection_links, build_resource_links, first_page_link, last_page_link, next_page_link,
    previous_page_link, strip_query, HalCollection, HalResource, Identified, LinkSet,
};
pub use page::{Page, PageDescriptor, PageRequest};
pub use predicate::{Condition, Pattern, Predicate, Value};
pub use schema::{ElementType, EntitySchema, FieldType};
pub use sort::{compile_sort, SortDir, SortKey, SortSpec};

#[cfg(test)]
mod tests;
