pub mod auth;
pub mod connection;
pub mod error;
pub mod operations;
pub mod query;
pub mod request;
pub mod transfer;
