// app/command.rs - 命令解析
//! 把用户输入的一行解析为编辑命令
//!
//! 支持的命令：
//! - `load <path>` / `meta <path>`
//! - `list` / `select <version>` / `show` / `new <version>` / `delete`
//! - `set <field> [value]` / `features`
//! - `file add <key> [url] [hash]` / `file edit <n> [url] [hash]` / `file rm <n>`
//! - `keys [prefix]` / `types` / `apply` / `save` / `status` / `help` / `quit`

use std::path::PathBuf;

use crate::form::{TextField, UnknownField};

/// 编辑命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    LoadIndex(PathBuf),
    LoadMeta(PathBuf),
    List,
    Select(String),
    Show,
    New(String),
    Delete,
    Set { field: TextField, value: String },
    Features,
    AddFile { key: String, url: String, hash: String },
    /// 行号从 0 开始
    EditFile { row: usize, url: String, hash: String },
    RemoveFile(usize),
    Keys(String),
    Types,
    Apply,
    Save,
    Status,
    Quit,
}

/// 命令解析错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help' for a list of commands)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid file row: {0}")]
    InvalidRow(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// 拆出第一个空白分隔的词，剩余部分去掉前导空白但保留其它内容
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim_start()),
        None => (input, ""),
    }
}

/// 拆出命令名，只去掉紧跟其后的一个分隔符，参数原样返回
fn split_verbatim(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((pos, sep)) => (&input[..pos], &input[pos + sep.len_utf8()..]),
        None => (input, ""),
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(value)
    }
}

/// 解析 1 开始的行号
fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::InvalidRow(raw.to_string())),
    }
}

/// 解析 `<url> <hash>` 两个可选参数
fn url_and_hash(rest: &str) -> (String, String) {
    let (url, rest) = split_word(rest);
    let (hash, _) = split_word(rest);
    (url.to_string(), hash.to_string())
}

impl Command {
    /// 解析一行输入（不含换行符）
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let (name, raw) = split_verbatim(line);
        let rest = raw.trim_start();

        let command = match name {
            "help" | "?" => Command::Help,
            "load" => Command::LoadIndex(PathBuf::from(required(rest.trim_end(), "path")?)),
            "meta" => Command::LoadMeta(PathBuf::from(required(rest.trim_end(), "path")?)),
            "list" | "ls" => Command::List,
            // 版本号原样保留，不做 trim
            "select" => Command::Select(required(raw, "version")?.to_string()),
            "show" => Command::Show,
            "new" => Command::New(raw.to_string()),
            "delete" => Command::Delete,
            "set" => {
                let (field, value) = split_word(rest);
                let field: TextField = required(field, "field")?.parse()?;
                Command::Set { field, value: value.to_string() }
            }
            "features" => Command::Features,
            "file" => Self::parse_file(rest)?,
            "keys" => Command::Keys(rest.trim().to_string()),
            "types" => Command::Types,
            "apply" => Command::Apply,
            "save" => Command::Save,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    fn parse_file(rest: &str) -> Result<Command, CommandError> {
        let (action, rest) = split_word(rest);
        match action {
            "add" => {
                let (key, rest) = split_word(rest);
                let (url, hash) = url_and_hash(rest);
                Ok(Command::AddFile { key: key.to_string(), url, hash })
            }
            "edit" => {
                let (row, rest) = split_word(rest);
                let row = parse_row(required(row, "row")?)?;
                let (url, hash) = url_and_hash(rest);
                Ok(Command::EditFile { row, url, hash })
            }
            "rm" | "remove" => {
                let (row, _) = split_word(rest);
                Ok(Command::RemoveFile(parse_row(required(row, "row")?)?))
            }
            "" => Err(CommandError::MissingArgument("add | edit | rm")),
            other => Err(CommandError::Unknown(format!("file {}", other))),
        }
    }
}

/// help 命令输出
pub const HELP: &str = "\
Commands:
  load <path>                  load index.json
  meta <path>                  load meta.json (file key suggestions)
  list                         list versions (newest first)
  select <version>             select a version and fill the form
  show                         show the form
  new <version>                create a version from the template
  delete                       delete the selected version
  set <field> [value]          set a form field (empty value clears it)
  features                     edit features, one per line, '.' to finish
  file add <key> [url] [hash]  add a file row
  file edit <n> [url] [hash]   change url / hash of file row n
  file rm <n>                  delete file row n
  keys [prefix]                list file keys from meta.json
  types                        list suggested release types
  apply                        write the form into the selected version (in memory)
  save                         write index.json to disk
  status                       show session status
  quit                         exit";
