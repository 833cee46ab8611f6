/// 内部导出的模块
mod internal;


/// 导出核心入口：连接与错误类型
pub use internal::connection::structs::{Connection, ConnectionConfig};
pub use internal::error::{ConfigurationError, ExistError};

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::credentials::{GUEST_PASSWORD, GUEST_USERNAME};
    pub use internal::auth::structs::Credentials;
}

pub mod config {
    use crate::internal;
    pub use internal::connection::enums::{Scheme, StatusPolicy};
    pub use internal::connection::structs::connection_config::*;
}

/// 请求构造能力单独导出，方便自行发请求或核对最终地址
pub mod request {
    use crate::internal;
    pub use internal::request::enums::*;
    pub use internal::request::functions::build_request;
    pub use internal::request::structs::RequestDescriptor;
}

pub mod transfer {
    use crate::internal;
    pub use internal::transfer::structs::{
        TransferEvent, TransferListeners, TransferState, TransferStream,
    };
    pub use internal::transfer::traits::TransferListener;
}

pub mod upload {
    use crate::internal;
    pub use internal::operations::structs::UploadSource;
}

pub mod query {
    use crate::internal;
    pub use internal::query::structs::{Query, QueryOptions, QueryResult};
}
