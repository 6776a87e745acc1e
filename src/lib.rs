//! Leakage-safe cross-validation splitters for time-ordered data.
//!
//! Two engines share one data model: a combinatorial purged splitter
//! (CPCV) that removes train rows whose label horizon overlaps the test
//! period, and a rolling-horizon splitter that slides fixed train/test
//! windows chronologically. Both yield integer position sets; the caller
//! projects them back onto feature/label rows.

pub mod config;
pub mod data;
pub mod error;
pub mod splitters;

pub use config::{ConfigManager, CpcvConfig, RollingConfig, SplitConfig};
pub use data::LabelInterval;
pub use error::{CvGuardError, Result};
pub use splitters::{CpcvSplitter, DataSplitter, IndexSplit, RollingHorizonSplitter};
