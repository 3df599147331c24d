//! BDE Plot - Adapters from Boolean series to external presentation
//!
//! Pure transformations only: edge-stepped point arrays any line-plotting
//! library can render, and a tabular text dump for eyeballing a solution.
//! No plotting library is linked here.

pub mod step;
pub mod tabular;

pub use step::*;
pub use tabular::*;
