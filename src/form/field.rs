// form/field.rs - 表单中的单行文本字段
use std::fmt;
use std::str::FromStr;

use crate::schema::fields::*;

/// 表单里的单行输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Commit,
    Type,
    GhRelease,
    GhChanges,
    VscodeRelease,
    VsRelease,
    Src,
    Zip,
}

impl TextField {
    /// 表单中的显示顺序
    pub const ALL: [TextField; 9] = [
        TextField::Title,
        TextField::Commit,
        TextField::Type,
        TextField::GhRelease,
        TextField::GhChanges,
        TextField::VscodeRelease,
        TextField::VsRelease,
        TextField::Src,
        TextField::Zip,
    ];

    /// 对应的 JSON 键名
    pub fn key(self) -> &'static str {
        match self {
            TextField::Title => FIELD_TITLE,
            TextField::Commit => FIELD_COMMIT,
            TextField::Type => FIELD_TYPE,
            TextField::GhRelease => FIELD_GH_RELEASE,
            TextField::GhChanges => FIELD_GH_CHANGES,
            TextField::VscodeRelease => FIELD_VSCODE_RELEASE,
            TextField::VsRelease => FIELD_VS_RELEASE,
            TextField::Src => FIELD_SRC,
            TextField::Zip => FIELD_ZIP,
        }
    }

    /// 输入框标签
    pub fn label(self) -> &'static str {
        match self {
            TextField::Title => "Title",
            TextField::Commit => "Commit",
            TextField::Type => "Type",
            TextField::GhRelease => "GitHub Release",
            TextField::GhChanges => "GitHub Changes",
            TextField::VscodeRelease => "VSCode Release",
            TextField::VsRelease => "VS Release",
            TextField::Src => "Source (.tar.gz)",
            TextField::Zip => "Source (.zip)",
        }
    }

    pub fn is_optional(self) -> bool {
        OPTIONAL_TEXT_FIELDS.contains(&self.key())
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for TextField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!("gh_release".parse::<TextField>(), Ok(TextField::GhRelease));
        assert_eq!("type".parse::<TextField>(), Ok(TextField::Type));
        assert!("features".parse::<TextField>().is_err());
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<TextField> = TextField::ALL.into_iter().filter(|f| f.is_optional()).collect();
        assert_eq!(
            optional,
            vec![TextField::VscodeRelease, TextField::VsRelease, TextField::Src, TextField::Zip]
        );
    }
}
