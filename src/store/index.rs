// store/index.rs - 版本索引
//! index.json 的内存副本：version -> release record

use std::path::Path;

use serde_json::Value;

use crate::schema::ReleaseRecord;
use crate::version::sort_versions_desc;

use super::json_file::{self, JsonObject, StoreResult};

/// 内存中的 index 存储
///
/// 记录以原始 JSON 值保存，未经编辑的版本在保存时原样写回。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexStore {
    entries: JsonObject,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(entries: JsonObject) -> Self {
        Self { entries }
    }

    /// 从文件加载
    pub fn load(path: &Path) -> StoreResult<Self> {
        json_file::read_object(path).map(Self::from_object)
    }

    /// 整体写入文件
    pub fn save(&self, path: &Path, indent: usize) -> StoreResult<()> {
        json_file::write_object(path, &self.entries, indent)
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains_key(version)
    }

    pub fn get(&self, version: &str) -> Option<&Value> {
        self.entries.get(version)
    }

    /// 读取记录；版本不存在时返回空记录
    pub fn record(&self, version: &str) -> ReleaseRecord {
        self.entries
            .get(version)
            .map(ReleaseRecord::from_value)
            .unwrap_or_default()
    }

    /// 整体替换（或新增）某个版本的记录
    pub fn put(&mut self, version: &str, record: &ReleaseRecord) -> StoreResult<()> {
        let value = record.to_value()?;
        self.entries.insert(version.to_string(), value);
        Ok(())
    }

    /// 删除版本，返回原始值
    pub fn remove(&mut self, version: &str) -> Option<Value> {
        // shift_remove 保持其余键的相对顺序
        self.entries.shift_remove(version)
    }

    /// 按版本降序排列的版本列表
    pub fn versions(&self) -> Vec<String> {
        sort_versions_desc(self.entries.keys().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::json_file::parse_object;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "1.9.0": {"title": "1.9", "commit": "aaa", "type": "stable", "gh_release": "r", "gh_changes": "c",
                  "features": ["x"], "files": {}, "extra": {"kept": true, "build": 123456789012345678901234567890}},
        "2.0.0": {"title": "2.0", "commit": "bbb", "type": "beta", "gh_release": "r", "gh_changes": "c",
                  "vs_release": "https://vs", "features": [], "files": {"linux-x64": {"url": "u", "hash": "h"}}}
    }"#;

    #[test]
    fn test_round_trip_without_edits() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("index.json");
        let original = IndexStore::from_object(parse_object(SAMPLE).unwrap());

        original.save(&path, 4).unwrap();
        let reloaded = IndexStore::load(&path).unwrap();

        assert_eq!(reloaded, original);
        assert_eq!(reloaded.get("1.9.0").unwrap()["extra"]["kept"], true);

        // 大整数不能变成浮点数
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"build\": 123456789012345678901234567890"));
        assert_eq!(
            reloaded.get("1.9.0").unwrap()["extra"]["build"].to_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_versions_sorted_desc() {
        let store = IndexStore::from_object(parse_object(SAMPLE).unwrap());
        assert_eq!(store.versions(), vec!["2.0.0", "1.9.0"]);
    }

    #[test]
    fn test_record_and_put() {
        let mut store = IndexStore::from_object(parse_object(SAMPLE).unwrap());

        let mut record = store.record("2.0.0");
        assert_eq!(record.vs_release.as_deref(), Some("https://vs"));
        record.vs_release = None;
        store.put("2.0.0", &record).unwrap();

        assert!(store.get("2.0.0").unwrap().get("vs_release").is_none());
        assert_eq!(store.record("missing"), ReleaseRecord::default());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store = IndexStore::from_object(parse_object(r#"{"a": {}, "b": {}, "c": {}}"#).unwrap());
        assert!(store.remove("b").is_some());
        assert!(store.remove("b").is_none());
        let keys: Vec<&String> = store.as_object().keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
