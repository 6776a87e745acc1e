pub mod base;
pub mod blocks;
pub mod combinations;
pub mod cpcv;
pub mod embargo;
pub mod purge;
pub mod rolling;
pub mod types;

pub use base::DataSplitter;
pub use blocks::partition_blocks;
pub use combinations::{binomial, Combinations};
pub use cpcv::{CpcvFolds, CpcvSplitter};
pub use embargo::apply_embargo;
pub use purge::{apply_purge, PurgeStrategy};
pub use rolling::{RollingFolds, RollingHorizonSplitter};
pub use types::IndexSplit;
