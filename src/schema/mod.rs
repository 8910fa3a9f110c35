// schema/mod.rs - 数据结构定义模块
//! 定义 index.json 中 release record 的结构和字段名

mod record;
pub mod fields;

pub use record::*;
pub use fields::*;
