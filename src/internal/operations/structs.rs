pub mod upload_source;

pub use upload_source::UploadSource;
