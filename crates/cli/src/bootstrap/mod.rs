mod config;
mod logging;
mod root_server;

pub use config::load_config;
pub use logging::init_logging;
pub use root_server::resolve_root_server;
