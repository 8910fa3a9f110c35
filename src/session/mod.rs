// session/mod.rs - 编辑会话
//! 提供显式的会话对象，没有全局可变状态

mod core;
mod builder;

pub use self::core::*;
pub use self::builder::*;
