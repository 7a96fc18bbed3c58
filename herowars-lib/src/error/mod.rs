//! Error types

mod field;
mod load;
mod table;

pub use field::*;
pub use load::*;
pub use table::*;
