//! Terminal output helpers

mod table;
mod verbosity;

pub use table::truncate;
pub use verbosity::Verbosity;
