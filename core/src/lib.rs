pub mod action;
pub mod config;
pub mod interactive;
pub mod storage;
pub mod style;
pub mod template;
pub mod testing;

pub use crate::config::Config;
pub use crate::template::{TemplateConfig, TemplateStore};
