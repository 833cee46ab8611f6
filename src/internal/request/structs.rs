pub mod request_descriptor;

pub use request_descriptor::RequestDescriptor;
