// store/json_file.rs - JSON 文件读写
//! 读取顶层为对象的 JSON 文件，按固定缩进写回

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// 顶层 JSON 对象（preserve_order 下保持文件中的键顺序）
pub type JsonObject = Map<String, Value>;

/// 存储层错误类型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 解析 JSON 文本，要求顶层是对象
pub fn parse_object(text: &str) -> StoreResult<JsonObject> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::NotAnObject(kind_of(&other))),
    }
}

/// 读取 JSON 文件（UTF-8）
pub fn read_object(path: &Path) -> StoreResult<JsonObject> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_object(&text)
}

/// 序列化为带缩进的 JSON，非 ASCII 字符原样输出
pub fn to_pretty_bytes(object: &JsonObject, indent: usize) -> StoreResult<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    object.serialize(&mut serializer)?;
    Ok(buf)
}

/// 整体写入 JSON 文件
pub fn write_object(path: &Path, object: &JsonObject, indent: usize) -> StoreResult<()> {
    let bytes = to_pretty_bytes(object, indent)?;
    fs::write(path, bytes).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
