mod load_config;
mod resolve;

pub use load_config::load_config;
pub use resolve::{build_context, resolve_config};
