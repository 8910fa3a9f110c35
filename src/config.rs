// 配置模块 - 支持外部配置文件
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件路径
const CONFIG_FILE: &str = "./config.toml";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============== 配置结构体 ==============

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// 启动时自动加载的 index.json，空字符串表示不加载
    pub index_path: String,
    /// 启动时自动加载的 meta.json
    pub meta_path: String,
}

/// 编辑器行为配置，由 EditorSession 持有
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// type 字段候选值（仅提示）
    pub release_types: Vec<String>,
    /// 新版本模板的 type
    pub default_type: String,
    /// 保存时的缩进空格数
    pub indent: usize,
    /// 删除版本 / 文件前是否确认
    pub confirm_destructive: bool,
}

// ============== 默认配置 ==============

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            release_types: vec![
                "stable".to_string(),
                "beta".to_string(),
                "alpha".to_string(),
                "rc".to_string(),
            ],
            default_type: "beta".to_string(),
            indent: 4,
            confirm_destructive: true,
        }
    }
}

impl PathsConfig {
    fn non_empty(s: &str) -> Option<PathBuf> {
        if s.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(s))
        }
    }

    pub fn index_path(&self) -> Option<PathBuf> {
        Self::non_empty(&self.index_path)
    }

    pub fn meta_path(&self) -> Option<PathBuf> {
        Self::non_empty(&self.meta_path)
    }
}

// ============== 配置加载 ==============

impl AppConfig {
    /// 从配置文件加载，失败则使用默认配置
    pub fn load() -> Self {
        if !Path::new(CONFIG_FILE).exists() {
            return Self::default();
        }
        Self::load_from_file(CONFIG_FILE).unwrap_or_else(|e| {
            eprintln!(" [Config] 无法加载配置文件 '{}': {}", CONFIG_FILE, e);
            eprintln!(" [Config] 使用默认配置");
            Self::default()
        })
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 生成默认配置文件
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
        let default_content = include_str!("../config.toml");
        fs::write(path, default_content)?;
        Ok(())
    }
}

// ============== 全局配置实例 ==============

/// 全局配置实例 (懒加载)，只给二进制入口使用
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::load();
    println!(" [Config] 配置已加载 (缩进 {} 空格)", config.editor.indent);
    config
});

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        AppConfig::generate_default_config(&path).unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.editor, EditorConfig::default());
        assert!(config.paths.index_path().is_none());
        assert!(config.paths.meta_path().is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_toml_str("[editor]\nindent = 2\n").unwrap();
        assert_eq!(config.editor.indent, 2);
        assert_eq!(config.editor.default_type, "beta");
        assert_eq!(config.editor.release_types.len(), 4);
    }

    #[test]
    fn test_paths_config() {
        let config = AppConfig::from_toml_str("[paths]\nindex_path = \"data/index.json\"\n").unwrap();
        assert_eq!(config.paths.index_path(), Some(PathBuf::from("data/index.json")));
        assert!(config.paths.meta_path().is_none());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AppConfig::from_toml_str("[editor]\nindent = \"four\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
