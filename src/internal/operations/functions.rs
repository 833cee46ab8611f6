pub mod delete;
pub mod download;
pub mod store;

pub(crate) use delete::delete_resource;
pub(crate) use download::spawn_download;
pub(crate) use store::{send_reader, store_source};
