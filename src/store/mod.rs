// store/mod.rs - 存储模块
//! index.json / meta.json 的加载与保存

pub mod json_file;
mod index;
mod meta;

pub use json_file::{JsonObject, StoreError, StoreResult};
pub use index::*;
pub use meta::*;
