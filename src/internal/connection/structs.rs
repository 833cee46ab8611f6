pub mod connection;
pub mod connection_config;

pub use connection::Connection;
pub use connection_config::ConnectionConfig;
