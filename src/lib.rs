pub mod catalog;
pub mod cli;
pub mod normalization;
pub mod tracing;

pub mod util {
    pub mod env;
}

pub use catalog::{
    build_vocabulary, filter, platform_counts, CatalogClient, CatalogConfig, CatalogError,
    FilterState, MovieRecord, Pagination, PlatformSelection,
};
pub use normalization::platform::{normalize, tokenize};
