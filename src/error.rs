// error.rs - 编辑器错误类型
//! 所有用户可见的失败都映射为 EditorError，并带有提示级别

use crate::store::StoreError;

/// 提示级别，对应 GUI 中的信息 / 警告 / 错误弹窗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// 编辑器错误类型
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("No version selected")]
    NoVersionSelected,

    #[error("Version number cannot be empty")]
    EmptyVersion,

    #[error("Version {0} already exists")]
    DuplicateVersion(String),

    #[error("Version {0} does not exist")]
    UnknownVersion(String),

    #[error("Key cannot be empty")]
    EmptyFileKey,

    #[error("No file selected")]
    NoFileSelected,

    #[error("No destination chosen for index.json")]
    NoSavePath,

    #[error("Failed to load index.json:\n{0}")]
    LoadIndex(#[source] StoreError),

    #[error("Failed to load meta.json:\n{0}")]
    LoadMeta(#[source] StoreError),

    #[error("Failed to save index.json:\n{0}")]
    Save(#[source] StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    /// 前置条件不满足是警告，IO / 解析失败是错误
    pub fn severity(&self) -> Severity {
        match self {
            EditorError::LoadIndex(_)
            | EditorError::LoadMeta(_)
            | EditorError::Save(_)
            | EditorError::Store(_) => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(EditorError::NoVersionSelected.severity(), Severity::Warning);
        assert_eq!(EditorError::DuplicateVersion("1.0".into()).severity(), Severity::Warning);
        assert_eq!(
            EditorError::Save(StoreError::NotAnObject("null")).severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            EditorError::DuplicateVersion("1.2.0".into()).to_string(),
            "Version 1.2.0 already exists"
        );
        assert!(
            EditorError::LoadIndex(StoreError::NotAnObject("an array"))
                .to_string()
                .starts_with("Failed to load index.json:\n")
        );
    }
}
