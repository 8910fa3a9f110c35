// src/lib.rs
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod schema;
pub mod session;
pub mod store;
pub mod version;

pub use config::*;
pub use error::*;
pub use form::*;
pub use schema::*;
pub use session::*;
pub use store::*;
pub use version::*;
