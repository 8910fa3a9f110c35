// schema/record.rs - Release record 结构定义
//! index.json 中单个版本对应的记录，以及它的文件表

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::fields::*;

/// 单个下载文件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    pub url: String,
    pub hash: String,
}

impl FileEntry {
    pub fn new(url: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            hash: hash.into(),
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            url: text_of(value.get(FILE_URL)),
            hash: text_of(value.get(FILE_HASH)),
        }
    }
}

/// 文件表：key -> FileEntry
///
/// 序列化为 JSON 对象。重复插入同一个 key 时覆盖旧值并保留原位置，
/// 与普通 map 的覆盖语义一致。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTable {
    entries: Vec<(String, FileEntry)>,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入条目，返回被覆盖的旧值
    pub fn insert(&mut self, key: impl Into<String>, entry: FileEntry) -> Option<FileEntry> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push((key, entry));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FileEntry)> for FileTable {
    fn from_iter<I: IntoIterator<Item = (String, FileEntry)>>(iter: I) -> Self {
        let mut table = FileTable::new();
        for (key, entry) in iter {
            table.insert(key, entry);
        }
        table
    }
}

impl Serialize for FileTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

struct FileTableVisitor;

impl<'de> Visitor<'de> for FileTableVisitor {
    type Value = FileTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of file keys to {url, hash}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FileTable, A::Error> {
        let mut table = FileTable::new();
        while let Some((key, entry)) = access.next_entry::<String, FileEntry>()? {
            table.insert(key, entry);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for FileTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FileTableVisitor)
    }
}

/// 单个版本的发布记录
///
/// 字段声明顺序即写回 JSON 时的键顺序。可选字段要么非空要么不存在，
/// 永远不会以空字符串的形式出现。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseRecord {
    pub title: String,
    pub commit: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub gh_release: String,
    pub gh_changes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vscode_release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_release: Option<String>,
    pub features: Vec<String>,
    pub files: FileTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl ReleaseRecord {
    /// 新版本模板：只有 type 有值，其余为空
    pub fn template(default_type: &str) -> Self {
        Self {
            release_type: default_type.to_string(),
            ..Default::default()
        }
    }

    /// 从 index 中的原始 JSON 宽松地读取记录
    ///
    /// 缺失的字段当作空值，非字符串的标量按 JSON 文本显示，
    /// 非对象的值得到空记录。
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        let features = match value.get(FIELD_FEATURES) {
            Some(Value::Array(items)) => items.iter().map(|v| text_of(Some(v))).collect(),
            _ => Vec::new(),
        };

        let files = match value.get(FIELD_FILES) {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), FileEntry::from_value(v)))
                .collect(),
            _ => FileTable::new(),
        };

        Self {
            title: text_of(value.get(FIELD_TITLE)),
            commit: text_of(value.get(FIELD_COMMIT)),
            release_type: text_of(value.get(FIELD_TYPE)),
            gh_release: text_of(value.get(FIELD_GH_RELEASE)),
            gh_changes: text_of(value.get(FIELD_GH_CHANGES)),
            vscode_release: optional_of(value.get(FIELD_VSCODE_RELEASE)),
            vs_release: optional_of(value.get(FIELD_VS_RELEASE)),
            features,
            files,
            src: optional_of(value.get(FIELD_SRC)),
            zip: optional_of(value.get(FIELD_ZIP)),
        }
    }

    /// 转换为写入 index 的 JSON 值
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn optional_of(value: Option<&Value>) -> Option<String> {
    Some(text_of(value)).filter(|s| !s.is_empty())
}
