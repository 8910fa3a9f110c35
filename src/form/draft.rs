// form/draft.rs - 表单草稿
//! 当前选中版本在表单中的编辑状态。
//!
//! 草稿只在 apply 时整体写回内存中的 index，切换版本会丢弃草稿。

use crate::error::{EditorError, EditorResult};
use crate::schema::{FileEntry, ReleaseRecord};

use super::field::TextField;

/// 文件表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    /// 创建后不可修改
    pub key: String,
    pub url: String,
    pub hash: String,
}

impl FileRow {
    pub fn new(key: impl Into<String>, url: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            hash: hash.into(),
        }
    }
}

/// 表单状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseForm {
    title: String,
    commit: String,
    release_type: String,
    gh_release: String,
    gh_changes: String,
    vscode_release: String,
    vs_release: String,
    src: String,
    zip: String,
    /// 特性，每行一个
    features_text: String,
    rows: Vec<FileRow>,
}

impl ReleaseForm {
    /// 用记录填充表单
    pub fn populate(record: &ReleaseRecord) -> Self {
        Self {
            title: record.title.clone(),
            commit: record.commit.clone(),
            release_type: record.release_type.clone(),
            gh_release: record.gh_release.clone(),
            gh_changes: record.gh_changes.clone(),
            vscode_release: record.vscode_release.clone().unwrap_or_default(),
            vs_release: record.vs_release.clone().unwrap_or_default(),
            src: record.src.clone().unwrap_or_default(),
            zip: record.zip.clone().unwrap_or_default(),
            features_text: record.features.join("\n"),
            rows: record
                .files
                .iter()
                .map(|(key, entry)| FileRow::new(key, &entry.url, &entry.hash))
                .collect(),
        }
    }

    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::Commit => &self.commit,
            TextField::Type => &self.release_type,
            TextField::GhRelease => &self.gh_release,
            TextField::GhChanges => &self.gh_changes,
            TextField::VscodeRelease => &self.vscode_release,
            TextField::VsRelease => &self.vs_release,
            TextField::Src => &self.src,
            TextField::Zip => &self.zip,
        }
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Title => &mut self.title,
            TextField::Commit => &mut self.commit,
            TextField::Type => &mut self.release_type,
            TextField::GhRelease => &mut self.gh_release,
            TextField::GhChanges => &mut self.gh_changes,
            TextField::VscodeRelease => &mut self.vscode_release,
            TextField::VsRelease => &mut self.vs_release,
            TextField::Src => &mut self.src,
            TextField::Zip => &mut self.zip,
        };
        *slot = value.into();
    }

    pub fn features_text(&self) -> &str {
        &self.features_text
    }

    pub fn set_features_text(&mut self, text: impl Into<String>) {
        self.features_text = text.into();
    }

    pub fn rows(&self) -> &[FileRow] {
        &self.rows
    }

    /// 添加文件行，返回行号。不检查重复 key，重复项在 apply 时后者覆盖前者
    pub fn add_file(&mut self, key: &str, url: &str, hash: &str) -> EditorResult<usize> {
        let key = key.trim();
        if key.is_empty() {
            return Err(EditorError::EmptyFileKey);
        }
        self.rows.push(FileRow::new(key, url.trim(), hash.trim()));
        Ok(self.rows.len() - 1)
    }

    /// 修改文件行的 url / hash，key 保持不变
    pub fn edit_file(&mut self, index: usize, url: &str, hash: &str) -> EditorResult<&FileRow> {
        let row = self.rows.get_mut(index).ok_or(EditorError::NoFileSelected)?;
        row.url = url.trim().to_string();
        row.hash = hash.trim().to_string();
        Ok(row)
    }

    pub fn remove_file(&mut self, index: usize) -> EditorResult<FileRow> {
        if index >= self.rows.len() {
            return Err(EditorError::NoFileSelected);
        }
        Ok(self.rows.remove(index))
    }

    /// 从表单状态构建一条全新的记录
    pub fn to_record(&self) -> ReleaseRecord {
        ReleaseRecord {
            title: self.title.clone(),
            commit: self.commit.clone(),
            release_type: self.release_type.clone(),
            gh_release: self.gh_release.clone(),
            gh_changes: self.gh_changes.clone(),
            vscode_release: non_blank(&self.vscode_release),
            vs_release: non_blank(&self.vs_release),
            features: parse_features(&self.features_text),
            files: self
                .rows
                .iter()
                .map(|row| (row.key.clone(), FileEntry::new(&row.url, &row.hash)))
                .collect(),
            src: non_blank(&self.src),
            zip: non_blank(&self.zip),
        }
    }
}

/// 可选字段：去掉空白后为空则省略，否则原样保留
fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 每行一个特性，去掉首尾空白，丢弃空行
pub fn parse_features(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ReleaseRecord {
        let mut record = ReleaseRecord::template("stable");
        record.title = "Phasor 1.2.0".to_string();
        record.vs_release = Some("https://vs/1.2.0".to_string());
        record.features = vec!["Faster startup".to_string(), "Dark theme".to_string()];
        record.files.insert("linux-x64", FileEntry::new("https://x/l.tar.gz", "aa"));
        record.files.insert("win-x64", FileEntry::new("https://x/w.zip", "bb"));
        record
    }

    #[test]
    fn test_parse_features() {
        assert_eq!(parse_features("a\n\nb \n  \nc"), vec!["a", "b", "c"]);
        assert_eq!(parse_features("  one\r\ntwo\n"), vec!["one", "two"]);
        assert!(parse_features("\n \n").is_empty());
    }

    #[test]
    fn test_populate_renders_record() {
        let form = ReleaseForm::populate(&sample_record());
        assert_eq!(form.field(TextField::Title), "Phasor 1.2.0");
        assert_eq!(form.field(TextField::VscodeRelease), "");
        assert_eq!(form.features_text(), "Faster startup\nDark theme");
        assert_eq!(form.rows()[1], FileRow::new("win-x64", "https://x/w.zip", "bb"));
    }

    #[test]
    fn test_populate_then_build_is_identity() {
        let record = sample_record();
        assert_eq!(ReleaseForm::populate(&record).to_record(), record);
    }

    #[test]
    fn test_cleared_optional_field_is_dropped() {
        let mut form = ReleaseForm::populate(&sample_record());
        form.set_field(TextField::VsRelease, "   ");
        form.set_field(TextField::Zip, " https://x/src.zip ");

        let record = form.to_record();
        assert_eq!(record.vs_release, None);
        assert_eq!(record.zip.as_deref(), Some(" https://x/src.zip "));
    }

    #[test]
    fn test_required_fields_copied_verbatim() {
        let mut form = ReleaseForm::default();
        form.set_field(TextField::Title, "  padded  ");
        form.set_field(TextField::Type, "nightly");

        let record = form.to_record();
        assert_eq!(record.title, "  padded  ");
        assert_eq!(record.release_type, "nightly");
        assert_eq!(record.commit, "");
    }

    #[test]
    fn test_duplicate_rows_last_wins() {
        let mut form = ReleaseForm::default();
        form.add_file("linux-x64", "https://old", "111").unwrap();
        form.add_file("win-x64", "https://win", "222").unwrap();
        form.add_file("linux-x64", "https://new", "333").unwrap();
        assert_eq!(form.rows().len(), 3);

        let record = form.to_record();
        assert_eq!(record.files.len(), 2);
        assert_eq!(record.files.get("linux-x64"), Some(&FileEntry::new("https://new", "333")));
    }

    #[test]
    fn test_file_row_editing() {
        let mut form = ReleaseForm::default();
        assert!(matches!(form.add_file("  ", "u", "h"), Err(EditorError::EmptyFileKey)));

        let index = form.add_file(" src ", " https://u ", " h ").unwrap();
        assert_eq!(form.rows()[index], FileRow::new("src", "https://u", "h"));

        let row = form.edit_file(index, "https://v", "h2").unwrap();
        assert_eq!(row.key, "src");
        assert_eq!(row.url, "https://v");

        assert!(matches!(form.edit_file(5, "", ""), Err(EditorError::NoFileSelected)));
        assert!(matches!(form.remove_file(5), Err(EditorError::NoFileSelected)));
        assert_eq!(form.remove_file(index).unwrap().key, "src");
        assert!(form.rows().is_empty());
    }
}
