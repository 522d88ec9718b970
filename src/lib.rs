/*
    Top-level
*/

mod bits;
mod error;

pub mod ieee754;

pub use bits::*;
pub use error::*;
