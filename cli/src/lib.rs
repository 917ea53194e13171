pub mod cmd;
pub mod config;
pub mod logger;
pub mod session;
pub mod util;
