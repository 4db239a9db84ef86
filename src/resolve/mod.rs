//! URL-to-file resolution and link rewriting
//!
//! Turns crawled URLs into stable flat-file identifiers and rewrites
//! Markdown content so internal links point at those identifiers.

mod naming;
mod registry;
mod rewrite;

pub use naming::{path_to_identifier, NamingConvention};
pub use registry::Resolver;
pub use rewrite::RewrittenDocument;
