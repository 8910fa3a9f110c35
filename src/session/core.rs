// session/core.rs - 编辑会话核心
//! 持有已加载的 index / meta、当前选中的版本和表单草稿。
//!
//! 修改流程：draft（表单）→ apply（写回内存中的 index）→ save（写入磁盘）。
//! 所有方法都是同步的；任何失败都不会留下部分修改。

use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::form::ReleaseForm;
use crate::schema::ReleaseRecord;
use crate::store::{IndexStore, MetaStore};

/// 编辑会话
#[derive(Debug, Default)]
pub struct EditorSession {
    pub(crate) config: EditorConfig,
    pub(crate) index: IndexStore,
    pub(crate) meta: MetaStore,
    /// 已绑定的 index.json 路径，后续保存都写到这里
    pub(crate) index_path: Option<PathBuf>,
    pub(crate) meta_path: Option<PathBuf>,
    pub(crate) selected: Option<String>,
    pub(crate) draft: ReleaseForm,
    /// 内存中的 index 是否与上次加载 / 保存时不同
    pub(crate) dirty: bool,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn index(&self) -> &IndexStore {
        &self.index
    }

    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    pub fn index_path(&self) -> Option<&Path> {
        self.index_path.as_deref()
    }

    pub fn meta_path(&self) -> Option<&Path> {
        self.meta_path.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn draft(&self) -> &ReleaseForm {
        &self.draft
    }

    /// 表单随时可编辑；没有选中版本时 apply 会失败
    pub fn draft_mut(&mut self) -> &mut ReleaseForm {
        &mut self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ============== 加载 ==============

    /// 加载 index.json，失败时保留原有状态
    pub fn load_index(&mut self, path: &Path) -> EditorResult<usize> {
        let index = IndexStore::load(path).map_err(EditorError::LoadIndex)?;
        let count = index.len();

        self.index = index;
        self.index_path = Some(path.to_path_buf());
        self.selected = None;
        self.draft = ReleaseForm::default();
        self.dirty = false;
        Ok(count)
    }

    /// 加载 meta.json，只用于文件 key 提示
    pub fn load_meta(&mut self, path: &Path) -> EditorResult<usize> {
        let meta = MetaStore::load(path).map_err(EditorError::LoadMeta)?;
        let count = meta.keys().len();

        self.meta = meta;
        self.meta_path = Some(path.to_path_buf());
        Ok(count)
    }

    // ============== 版本列表 ==============

    /// 按版本降序排列的版本列表
    pub fn versions(&self) -> Vec<String> {
        self.index.versions()
    }

    /// 选中版本并用其记录填充表单
    pub fn select(&mut self, version: &str) -> EditorResult<()> {
        if !self.index.contains(version) {
            return Err(EditorError::UnknownVersion(version.to_string()));
        }
        self.draft = ReleaseForm::populate(&self.index.record(version));
        self.selected = Some(version.to_string());
        Ok(())
    }

    /// 新建版本（模板记录）并选中它。key 不做任何规范化
    pub fn create_version(&mut self, version: &str) -> EditorResult<()> {
        if version.is_empty() {
            return Err(EditorError::EmptyVersion);
        }
        if self.index.contains(version) {
            return Err(EditorError::DuplicateVersion(version.to_string()));
        }

        let record = ReleaseRecord::template(&self.config.default_type);
        self.index.put(version, &record)?;
        self.dirty = true;
        self.select(version)
    }

    /// 删除当前选中的版本，清空选择和表单。确认由调用方负责
    pub fn delete_selected(&mut self) -> EditorResult<String> {
        let version = self.selected.take().ok_or(EditorError::NoVersionSelected)?;
        self.index.remove(&version);
        self.draft = ReleaseForm::default();
        self.dirty = true;
        Ok(version)
    }

    // ============== 提交与保存 ==============

    /// 把表单整体写回当前版本的内存记录（不合并旧记录）
    pub fn apply(&mut self) -> EditorResult<String> {
        let version = self.selected.clone().ok_or(EditorError::NoVersionSelected)?;
        let record = self.draft.to_record();
        self.index.put(&version, &record)?;
        self.dirty = true;
        Ok(version)
    }

    /// 写入已绑定的路径
    pub fn save(&mut self) -> EditorResult<PathBuf> {
        let path = self.index_path.clone().ok_or(EditorError::NoSavePath)?;
        self.save_as(&path)
    }

    /// 写入指定路径，成功后绑定该路径；失败时路径绑定不变
    pub fn save_as(&mut self, path: &Path) -> EditorResult<PathBuf> {
        self.index
            .save(path, self.config.indent)
            .map_err(EditorError::Save)?;
        self.index_path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(path.to_path_buf())
    }

    // ============== 提示 ==============

    /// 以 prefix 开头的文件 key 候选
    pub fn suggest_file_keys(&self, prefix: &str) -> Vec<String> {
        self.meta.suggest(prefix).map(str::to_string).collect()
    }

    pub fn release_types(&self) -> &[String] {
        &self.config.release_types
    }
}
