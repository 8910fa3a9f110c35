// form/mod.rs - 表单模块
//! 记录与表单之间的双向映射

mod draft;
pub mod field;

pub use draft::*;
pub use field::*;
