//! Movie release catalog: records, platform vocabulary, filtering and paging.
pub mod config;
pub mod filter;
pub mod index;
pub mod pagination;
pub mod record;
pub mod source;

pub use config::CatalogConfig;
pub use filter::FilterState;
pub use index::{build_vocabulary, filter, platform_counts, PlatformCount, PlatformSelection, ALL_PLATFORMS};
pub use pagination::{PageSlot, Pagination};
pub use record::MovieRecord;
pub use source::{decode_records, load_snapshot_file, CatalogClient, CatalogError};
