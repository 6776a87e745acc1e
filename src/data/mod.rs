pub mod barrier;

pub use barrier::{has_barrier_columns, intervals_from_dataframe, LabelInterval};
