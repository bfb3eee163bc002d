//! Field normalization for scraped catalog records.
//!
//! Turns untyped [`RawRecord`]s into typed [`ReviewRecord`]s and
//! [`StoreRecord`]s. Every function here is pure and total: a field that
//! cannot be parsed becomes `None` instead of failing the batch.
//!
//! # Example
//!
//! ```
//! use gamelink_model::{RawRecord, Source};
//! use gamelink_normalize::normalize;
//!
//! let raw = vec![
//!     RawRecord::new()
//!         .with("title", "12. Outer Wilds")
//!         .with("release_date", "May 28, 2019"),
//! ];
//! let batch = normalize(Source::Metacritic, &raw);
//! assert_eq!(batch.len(), 1);
//! ```

mod datetime;
mod dedupe;
mod numeric;
mod records;
mod text;

pub use datetime::{release_year, standardize_date};
pub use dedupe::dedupe_by_key;
pub use numeric::{
    parse_count, parse_decimal, parse_discount, parse_metascore, parse_price,
    review_summary_score,
};
pub use records::{NormalizedBatch, normalize, normalize_reviews, normalize_store_pages};
pub use text::{clean_title, is_missing, text_field};
