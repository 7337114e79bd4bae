pub mod dashboard;
pub mod filter_values;
pub mod health;
pub mod outliers;
pub mod queries;
pub mod trends;

pub use dashboard::*;
pub use filter_values::*;
pub use health::*;
pub use outliers::*;
pub use queries::*;
pub use trends::*;
