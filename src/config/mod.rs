pub mod cpcv;
pub mod manager;
pub mod rolling;
pub mod traits;

pub use cpcv::CpcvConfig;
pub use manager::{ConfigManager, SplitConfig};
pub use rolling::RollingConfig;
pub use traits::ConfigSection;
