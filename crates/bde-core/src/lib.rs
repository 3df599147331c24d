//! BDE Core - Fundamental value types for Boolean delay equation models
//!
//! This crate defines the types shared by the solver and its adapters:
//! - Tolerant timestamp comparison (Tolerance)
//! - Boolean time series and their algebra (BooleanSeries)
//! - Thresholding of sampled numeric signals into Boolean series
//! - The shared error enum (BdeError)

pub mod error;
pub mod series;
pub mod threshold;
pub mod tolerance;

pub use error::*;
pub use series::*;
pub use threshold::*;
pub use tolerance::*;
