// schema/fields.rs - 字段名常量定义
//! 统一管理 release record 的 JSON 键名，避免魔法字符串

/// 显示名称
pub const FIELD_TITLE: &str = "title";
/// VCS commit
pub const FIELD_COMMIT: &str = "commit";
/// 发布类型 (stable / beta / alpha / rc)
pub const FIELD_TYPE: &str = "type";
/// GitHub Release 链接
pub const FIELD_GH_RELEASE: &str = "gh_release";
/// GitHub 变更对比链接
pub const FIELD_GH_CHANGES: &str = "gh_changes";
/// VSCode 扩展发布链接（可选）
pub const FIELD_VSCODE_RELEASE: &str = "vscode_release";
/// Visual Studio 扩展发布链接（可选）
pub const FIELD_VS_RELEASE: &str = "vs_release";
/// 源码 .tar.gz（可选）
pub const FIELD_SRC: &str = "src";
/// 源码 .zip（可选）
pub const FIELD_ZIP: &str = "zip";
/// 特性列表
pub const FIELD_FEATURES: &str = "features";
/// 下载文件表
pub const FIELD_FILES: &str = "files";

/// 文件条目中的链接
pub const FILE_URL: &str = "url";
/// 文件条目中的 SHA256
pub const FILE_HASH: &str = "hash";

/// 可选的单行文本字段，为空时整个键被省略
pub const OPTIONAL_TEXT_FIELDS: [&str; 4] = [
    FIELD_VSCODE_RELEASE,
    FIELD_VS_RELEASE,
    FIELD_SRC,
    FIELD_ZIP,
];
