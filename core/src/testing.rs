pub mod command;
pub mod fixture;
pub mod process;
pub mod result;
pub mod runner;

pub use command::*;
pub use fixture::*;
pub use process::*;
pub use result::*;
pub use runner::*;
