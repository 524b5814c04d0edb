mod default_config;
mod deserialize_config;
mod get_override_options;
mod resolve_config;
mod resolve_options;
mod types;

pub use default_config::*;
pub use deserialize_config::*;
pub use get_override_options::*;
pub use resolve_config::*;
pub use resolve_options::*;
pub use types::*;
