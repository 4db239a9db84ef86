//! Crawl machinery: rate limiting, fetching, link discovery, and the
//! breadth-first engine that ties them together

mod engine;
mod fetcher;
mod limiter;
mod links;

pub use engine::{CancelToken, CrawlEngine, CrawlReport, FetchedPage};
pub use fetcher::{FetchOutcome, Fetcher};
pub use limiter::RateLimiter;
pub use links::extract_links;
