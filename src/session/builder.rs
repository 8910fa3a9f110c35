// session/builder.rs - 编辑会话构建器
//! 使用 Builder 模式构建 EditorSession

use std::path::PathBuf;

use crate::config::{AppConfig, EditorConfig};
use crate::error::EditorResult;

use super::core::EditorSession;

/// 编辑会话构建器
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<EditorConfig>,
    index_path: Option<PathBuf>,
    meta_path: Option<PathBuf>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从应用配置读取编辑器设置和启动时要加载的文件
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            config: Some(config.editor.clone()),
            index_path: config.paths.index_path(),
            meta_path: config.paths.meta_path(),
        }
    }

    /// 设置编辑器配置
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 启动时加载的 index.json
    pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_path = Some(path.into());
        self
    }

    /// 启动时加载的 meta.json
    pub fn with_meta_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.meta_path = Some(path.into());
        self
    }

    /// 构建会话；任一文件加载失败则返回错误
    pub fn build(self) -> EditorResult<EditorSession> {
        let mut session = EditorSession::new(self.config.unwrap_or_default());

        if let Some(path) = self.index_path {
            let count = session.load_index(&path)?;
            println!(" [Index] 已加载 {:?} ({} 个版本)", path, count);
        }
        if let Some(path) = self.meta_path {
            let count = session.load_meta(&path)?;
            println!(" [Meta] 已加载 {:?} ({} 个文件 key)", path, count);
        }

        Ok(session)
    }
}
