//! Application layer: the URL resolution strategies.
//!
//! Every strategy implements [`strategies::UrlStrategy`], so the HTTP layer and
//! the seeding tool work against whichever one configuration selects.
//!
//! - [`strategies::FullScanStrategy`] - uniqueness and lookup by scanning the whole table
//! - [`strategies::IndexedStrategy`] - relies on the store's unique index
//! - [`strategies::AppCacheStrategy`] - in-process LRU over the indexed strategy
//! - [`strategies::RedisStrategy`] - Redis with negative caching over the indexed strategy

pub mod strategies;
