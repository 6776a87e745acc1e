use super::types::IndexSplit;
use crate::error::CvGuardError;
use polars::prelude::*;

pub trait DataSplitter: Send + Sync {
    /// Split data into multiple folds
    fn split(&self, data: &DataFrame) -> Result<Vec<IndexSplit>, CvGuardError>;
}
