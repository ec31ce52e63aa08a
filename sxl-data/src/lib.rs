//! SpaceX launch records loaded from CSV into an immutable in-memory dataset.
//!
//! The dataset is read once at startup (from a file path in native builds,
//! or from a CSV string embedded with `include_str!` in WASM builds) and
//! never mutated afterwards. Derived scalars used by the dashboard controls
//! (payload bounds and the launch site list) are computed at load time.
//!
//! # Usage
//!
//! ```rust
//! use sxl_data::{Dataset, ALL_SITES};
//!
//! let csv = "\
//! Launch Site,class,Payload Mass (kg),Booster Version Category
//! CCAFS LC-40,0,525.0,v1.0
//! KSC LC-39A,1,2490.0,FT
//! ";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//! let summary = dataset.summary();
//! assert_eq!(summary.min_payload, 525.0);
//! assert_eq!(summary.max_payload, 2490.0);
//! assert_eq!(summary.site_options.last().map(String::as_str), Some(ALL_SITES));
//! ```

pub mod dataset;
pub mod error;
mod loader;
pub mod record;

pub use dataset::{Dataset, DatasetSummary};
pub use error::LoadError;
pub use record::LaunchRecord;

/// Site selector value meaning "do not filter by launch site".
pub const ALL_SITES: &str = "All sites";

/// Default file name of the launch dataset.
pub const DEFAULT_DATASET_FILE: &str = "spacex_launch_dash.csv";
