use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::internal::error::{ConfigurationError, ExistError};

/// 上传源：本地文件路径或内存数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// 按块读取后上传
    File(PathBuf),
    /// 一次性写入请求体
    Buffer(Bytes),
}

impl UploadSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        UploadSource::File(path.as_ref().to_path_buf())
    }

    pub fn buffer(data: impl Into<Bytes>) -> Self {
        UploadSource::Buffer(data.into())
    }

    /// 确定目标文档名：显式指定优先，其次取文件名；内存数据未指定名字时报错
    pub fn resolve_target_name(
        &self,
        target_name: Option<&str>,
    ) -> Result<String, ExistError> {
        if let Some(name) = target_name {
            return Ok(name.to_string());
        }

        match self {
            UploadSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| ConfigurationError::UnsupportedSource(path.clone()).into()),
            UploadSource::Buffer(_) => Err(ConfigurationError::MissingTargetName.into()),
        }
    }
}

impl From<PathBuf> for UploadSource {
    fn from(path: PathBuf) -> Self {
        UploadSource::File(path)
    }
}

impl From<&Path> for UploadSource {
    fn from(path: &Path) -> Self {
        UploadSource::File(path.to_path_buf())
    }
}

impl From<Bytes> for UploadSource {
    fn from(data: Bytes) -> Self {
        UploadSource::Buffer(data)
    }
}

impl From<Vec<u8>> for UploadSource {
    fn from(data: Vec<u8>) -> Self {
        UploadSource::Buffer(Bytes::from(data))
    }
}

impl From<&'static [u8]> for UploadSource {
    fn from(data: &'static [u8]) -> Self {
        UploadSource::Buffer(Bytes::from_static(data))
    }
}
