pub mod config;
pub mod link;

pub use config::{full_client_config, single_outbound, DEFAULT_SOCKS_PORT};
pub use link::build_vless_link;
