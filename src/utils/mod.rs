//! Helpful utilities

mod likelihood;
pub use likelihood::*;
