// app/controller.rs - 编辑器控制器
//! 单线程事件循环：读取命令 → 调用会话 → 报告结果。
//! 任何失败都只影响当前这一条命令，会话保持可用。

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use crate::error::{EditorError, EditorResult, Severity};
use crate::form::{ReleaseForm, TextField};
use crate::session::EditorSession;

use super::command::{Command, HELP};
use super::prompt::Prompter;

/// 命令执行后是否继续
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 编辑器控制器，持有会话和交互接口
pub struct EditorApp<P> {
    session: EditorSession,
    prompter: P,
    /// 状态栏文本
    status: String,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 按表单布局渲染当前草稿
pub fn render_form(version: Option<&str>, form: &ReleaseForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {}", "Version:", version.unwrap_or(""));
    for field in TextField::ALL {
        let _ = writeln!(out, "{:<18} {}", format!("{}:", field.label()), form.field(field));
    }

    let _ = writeln!(out, "Features:");
    for line in form.features_text().lines() {
        let _ = writeln!(out, "  - {}", line);
    }

    let _ = write!(out, "Files:");
    for (i, row) in form.rows().iter().enumerate() {
        let _ = write!(out, "\n  {:>2}. {}  {}  {}", i + 1, row.key, row.url, row.hash);
    }
    out
}

impl<P: Prompter> EditorApp<P> {
    pub fn new(session: EditorSession, prompter: P) -> Self {
        Self {
            session,
            prompter,
            status: "Ready".to_string(),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn into_parts(self) -> (EditorSession, P) {
        (self.session, self.prompter)
    }

    /// 主循环，直到 quit 或输入结束
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompter.read_line("> ")? else {
                if self.session.is_dirty() {
                    self.prompter
                        .notify(Severity::Warning, "Input closed, unsaved changes discarded");
                }
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if self.dispatch(command) == Flow::Quit {
                        break;
                    }
                }
                Err(e) => self.prompter.notify(Severity::Warning, &e.to_string()),
            }
        }
        Ok(())
    }

    /// 执行一条命令并报告失败
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match self.execute(command) {
            Ok(flow) => flow,
            Err(e) => {
                self.prompter.notify(e.severity(), &e.to_string());
                Flow::Continue
            }
        }
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    fn confirm_destructive(&mut self, question: &str) -> bool {
        !self.session.config().confirm_destructive || self.prompter.confirm(question)
    }

    fn show_form(&mut self) {
        let text = render_form(self.session.selected(), self.session.draft());
        self.prompter.show(&text);
    }

    fn show_versions(&mut self) {
        let versions = self.session.versions();
        if versions.is_empty() {
            self.prompter.show("(no versions)");
            return;
        }
        let selected = self.session.selected();
        let text = versions
            .iter()
            .map(|v| {
                let marker = if Some(v.as_str()) == selected { "*" } else { " " };
                format!("{} {}", marker, v)
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.prompter.show(&text);
    }

    fn execute(&mut self, command: Command) -> EditorResult<Flow> {
        match command {
            Command::Help => self.prompter.show(HELP),

            Command::LoadIndex(path) => {
                let count = self.session.load_index(&path)?;
                self.set_status(format!("Loaded: {}", display_name(&path)));
                self.prompter
                    .notify(Severity::Info, &format!("{} ({} versions)", self.status, count));
                self.show_versions();
            }

            Command::LoadMeta(path) => {
                let count = self.session.load_meta(&path)?;
                self.set_status(format!("Loaded meta: {}", display_name(&path)));
                self.prompter
                    .notify(Severity::Info, &format!("{} ({} file keys)", self.status, count));
            }

            Command::List => self.show_versions(),

            Command::Select(version) => {
                self.session.select(&version)?;
                self.show_form();
            }

            Command::Show => self.show_form(),

            Command::New(version) => {
                self.session.create_version(&version)?;
                self.set_status(format!("Created version {}", version));
                self.show_form();
            }

            Command::Delete => {
                let version = self
                    .session
                    .selected()
                    .ok_or(EditorError::NoVersionSelected)?
                    .to_string();
                let question = format!("Are you sure you want to delete version {}?", version);
                if self.confirm_destructive(&question) {
                    self.session.delete_selected()?;
                    self.set_status(format!("Deleted version {}", version));
                    self.prompter.notify(Severity::Info, &self.status);
                }
            }

            Command::Set { field, value } => {
                if field == TextField::Type && !value.is_empty() {
                    let types = self.session.release_types();
                    if !types.iter().any(|t| *t == value) {
                        let hint = format!("'{}' is not one of: {}", value, types.join(", "));
                        self.prompter.notify(Severity::Info, &hint);
                    }
                }
                self.session.draft_mut().set_field(field, value);
            }

            Command::Features => {
                if let Some(text) = self.prompter.ask_lines("Features") {
                    self.session.draft_mut().set_features_text(text);
                }
            }

            Command::AddFile { key, url, hash } => {
                let row = self.session.draft_mut().add_file(&key, &url, &hash)?;
                self.set_status(format!("Added file row {}", row + 1));
            }

            Command::EditFile { row, url, hash } => {
                self.session.draft_mut().edit_file(row, &url, &hash)?;
                self.set_status(format!("Edited file row {}", row + 1));
            }

            Command::RemoveFile(row) => {
                if row >= self.session.draft().rows().len() {
                    return Err(EditorError::NoFileSelected);
                }
                if self.confirm_destructive("Delete selected file?") {
                    let removed = self.session.draft_mut().remove_file(row)?;
                    self.set_status(format!("Removed file {}", removed.key));
                }
            }

            Command::Keys(prefix) => {
                if self.session.meta().is_empty() {
                    self.prompter.notify(Severity::Info, "No file keys (load meta.json first)");
                } else {
                    let keys = self.session.suggest_file_keys(&prefix);
                    self.prompter.show(&keys.join("\n"));
                }
            }

            Command::Types => {
                let types = self.session.release_types().join(", ");
                self.prompter.show(&types);
            }

            Command::Apply => {
                let version = self.session.apply()?;
                self.set_status(format!("Changes saved to {}", version));
                let message = format!(
                    "Changes to {} saved in memory.\nUse 'save' to write to disk.",
                    version
                );
                self.prompter.notify(Severity::Info, &message);
            }

            Command::Save => self.save()?,

            Command::Status => {
                let mut text = format!("Status: {}", self.status);
                let index = self
                    .session
                    .index_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not bound)".to_string());
                let _ = write!(text, "\nIndex: {} ({} versions)", index, self.session.index().len());
                let _ = write!(text, "\nSelected: {}", self.session.selected().unwrap_or("(none)"));
                if self.session.is_dirty() {
                    text.push_str("\nUnsaved changes");
                }
                self.prompter.show(&text);
            }

            Command::Quit => {
                if self.session.is_dirty()
                    && !self.prompter.confirm("There are unsaved changes. Quit anyway?")
                {
                    return Ok(Flow::Continue);
                }
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// 保存：未绑定路径时先询问
    fn save(&mut self) -> EditorResult<()> {
        let path = if self.session.index_path().is_some() {
            self.session.save()?
        } else {
            // 取消选择路径时什么都不做
            let Some(path) = self.prompter.ask_path("Save index.json as") else {
                return Ok(());
            };
            self.session.save_as(&path)?
        };
        self.set_status(format!("Saved: {}", display_name(&path)));
        self.prompter.notify(Severity::Info, "index.json saved successfully!");
        Ok(())
    }
}
