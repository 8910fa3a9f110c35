// store/meta.rs - meta.json 参考数据
//! 只读：顶层键作为添加文件时的 key 候选，值的结构不做检查

use std::path::Path;

use super::json_file::{self, JsonObject, StoreResult};

/// meta.json 的内存副本，永远不会写回
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaStore {
    keys: Vec<String>,
}

impl MetaStore {
    pub fn from_object(object: &JsonObject) -> Self {
        Self {
            keys: object.keys().cloned().collect(),
        }
    }

    pub fn load(path: &Path) -> StoreResult<Self> {
        json_file::read_object(path).map(|object| Self::from_object(&object))
    }

    /// 全部候选 key，按文件中的顺序
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// 以 prefix 开头的候选 key
    pub fn suggest<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(move |k| k.starts_with(prefix))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::json_file::parse_object;

    #[test]
    fn test_suggestions() {
        let object = parse_object(
            r#"{"linux-x64": {"os": "linux"}, "linux-arm64": 1, "win-x64": null, "macos-arm64": []}"#,
        )
        .unwrap();
        let meta = MetaStore::from_object(&object);

        assert_eq!(meta.keys().len(), 4);
        let linux: Vec<&str> = meta.suggest("linux").collect();
        assert_eq!(linux, vec!["linux-x64", "linux-arm64"]);
        assert_eq!(meta.suggest("").count(), 4);
        assert_eq!(meta.suggest("bsd").count(), 0);
    }
}
