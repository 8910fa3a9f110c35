// version.rs - 版本号排序
//! 版本列表的显示顺序（降序），只用于显示，不会写回文件

use std::cmp::Ordering;

/// 版本号中以 `.` 分隔的一段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// 纯数字段，保存去掉前导零后的数字串，避免溢出
    Numeric(String),
    /// 其它文本
    Text(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            let digits = raw.trim_start_matches('0');
            Segment::Numeric(if digits.is_empty() { "0".to_string() } else { digits.to_string() })
        } else {
            Segment::Text(raw.to_string())
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Segment::Numeric(_))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // 无前导零时，位数多的数更大；位数相同按字典序
            (Segment::Numeric(a), Segment::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            (Segment::Numeric(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 可比较的版本键
///
/// 比较规则：
/// 1. 全数字的版本（如 `1.10.0`）排在含文本段的版本（如 `1.10.0-beta`）之上
/// 2. 同一类内逐段比较，数字段按整数比较，文本段按字符串比较
/// 3. 共同前缀相同时，段数少的更小
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKey {
    segments: Vec<Segment>,
}

impl VersionKey {
    pub fn parse(version: &str) -> Self {
        Self {
            segments: version.split('.').map(Segment::parse).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 是否每一段都是数字
    pub fn is_release(&self) -> bool {
        self.segments.iter().all(Segment::is_numeric)
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.is_release()
            .cmp(&other.is_release())
            .then_with(|| self.segments.cmp(&other.segments))
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 比较两个版本字符串（升序）
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    VersionKey::parse(a).cmp(&VersionKey::parse(b))
}

/// 返回按版本降序排列的列表
pub fn sort_versions_desc<'a, I>(versions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keyed: Vec<(VersionKey, String)> = versions
        .into_iter()
        .map(|v| (VersionKey::parse(v), v.to_string()))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, v)| v).collect()
}
