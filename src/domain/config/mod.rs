mod assignment;
mod mapping;

pub use assignment::parse_assignments;
pub use mapping::{ConfigMapping, Lookup, scalar_text};
