// app/prompt.rs - 用户交互接口
//! 代替 GUI 中的弹窗：提示信息、确认框、保存路径选择和多行文本输入

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::Severity;

/// 与用户交互的接口，控制器只通过它读写
pub trait Prompter {
    /// 读取一行命令，EOF 返回 None
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// 普通输出（列表、表单）
    fn show(&mut self, text: &str);

    /// 信息 / 警告 / 错误提示
    fn notify(&mut self, severity: Severity, message: &str);

    /// 是 / 否确认，默认否
    fn confirm(&mut self, question: &str) -> bool;

    /// 询问保存路径，取消返回 None
    fn ask_path(&mut self, title: &str) -> Option<PathBuf>;

    /// 多行输入，取消返回 None
    fn ask_lines(&mut self, title: &str) -> Option<String>;
}

/// 基于 BufRead / Write 的终端实现
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

/// 多行输入的结束标记
const END_OF_LINES: &str = ".";

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_raw(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        // 只去掉换行符，保留行内空白
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.read_raw(prompt)
    }

    // 终端写入失败时没有别的渠道可报告，show / notify 忽略写入错误；
    // 读取失败仍由 read_line 返回给主循环
    fn show(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn notify(&mut self, severity: Severity, message: &str) {
        let tag = match severity {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        let _ = writeln!(self.output, " [{}] {}", tag, message);
    }

    fn confirm(&mut self, question: &str) -> bool {
        match self.read_raw(&format!("{} [y/N] ", question)) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    fn ask_path(&mut self, title: &str) -> Option<PathBuf> {
        match self.read_raw(&format!("{}: ", title)) {
            Ok(Some(answer)) if !answer.trim().is_empty() => Some(PathBuf::from(answer.trim())),
            _ => None,
        }
    }

    fn ask_lines(&mut self, title: &str) -> Option<String> {
        self.show(&format!("{} (one per line, '{}' to finish)", title, END_OF_LINES));

        let mut lines = Vec::new();
        loop {
            match self.read_raw("| ") {
                Ok(Some(line)) if line.trim() == END_OF_LINES => break,
                Ok(Some(line)) => lines.push(line),
                // 输入中断视为取消
                _ => return None,
            }
        }
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_read_line_strips_newline_only() {
        let mut prompter = console("new 1.0 \r\n");
        assert_eq!(prompter.read_line("> ").unwrap(), Some("new 1.0 ".to_string()));
        assert_eq!(prompter.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut prompter = console("y\nno\n\nYES\n");
        assert!(prompter.confirm("Delete?"));
        assert!(!prompter.confirm("Delete?"));
        assert!(!prompter.confirm("Delete?"));
        assert!(prompter.confirm("Delete?"));
        // EOF 默认否
        assert!(!prompter.confirm("Delete?"));
        assert!(output(prompter).contains("Delete? [y/N] "));
    }

    #[test]
    fn test_ask_path() {
        let mut prompter = console("  out/index.json \n\n");
        assert_eq!(prompter.ask_path("Save as"), Some(PathBuf::from("out/index.json")));
        assert_eq!(prompter.ask_path("Save as"), None);
    }

    #[test]
    fn test_ask_lines() {
        let mut prompter = console("first\n\n  second \n.\n");
        assert_eq!(prompter.ask_lines("Features"), Some("first\n\n  second ".to_string()));

        let mut interrupted = console("only\n");
        assert_eq!(interrupted.ask_lines("Features"), None);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_output_errors() {
        let mut prompter = ConsolePrompter::new(Cursor::new(b"list\n".to_vec()), BrokenPipe);
        // 输出失败不会中断 show / notify
        prompter.show("(no versions)");
        prompter.notify(Severity::Error, "Failed");
        // 提示符写不出去时 read_line 报错
        let err = prompter.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_notify_tags() {
        let mut prompter = console("");
        prompter.notify(Severity::Warning, "No version selected");
        prompter.notify(Severity::Error, "Failed");
        let text = output(prompter);
        assert!(text.contains(" [Warning] No version selected\n"));
        assert!(text.contains(" [Error] Failed\n"));
    }
}
