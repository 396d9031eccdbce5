//! Cache domain - Key-value caching abstraction

mod repository;

pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock;
