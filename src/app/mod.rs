// app/mod.rs - 交互层
//! 命令解析、用户交互接口和控制器

pub mod command;
pub mod controller;
pub mod prompt;

pub use command::*;
pub use controller::*;
pub use prompt::*;
