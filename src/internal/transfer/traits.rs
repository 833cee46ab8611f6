pub mod transfer_listener;

pub use transfer_listener::TransferListener;
