//! Route identifier taxonomy.
//!
//! Route codes look like `I.40`, `US.20A`, `US.19.TN2` or `I.35.E`:
//!
//! ```text
//! SYS . NUM[SUF1] [. STATE[INDEX]] [. SUF2]
//!  │     │   │        │      │        └─ standalone letter (E/W/N/S, Bus, ...)
//!  │     │   │        │      └─ trailing digits after the state code
//!  │     │   │        └─ two-letter state qualifier
//!  │     │   └─ letters glued to the number (20A)
//!  │     └─ route number
//!  └─ system (I, US, ...)
//! ```
//!
//! - `identifier.rs`: [`RouteId::parse`], which never fails.
//! - `classify.rs`: class buckets (`I-main`, `US-spur`, ...) and the total
//!   order used everywhere routes are listed.
//! - `buckets.rs`: the fixed range-bucket catalog and the grouper feeding
//!   two-stage route pickers.
//!
//! This subsystem is independent of the roster pipeline.

#[path = "routes/buckets.rs"]
mod buckets;
#[path = "routes/classify.rs"]
mod classify;
#[path = "routes/identifier.rs"]
mod identifier;

pub use buckets::{BUCKET_CATALOG, BucketGroup, RangeBucket, RouteGrouping, group_routes};
pub use classify::{ClassKey, classify, compare};
pub use identifier::RouteId;
