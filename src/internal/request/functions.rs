pub mod build_request;

pub use build_request::build_request;
