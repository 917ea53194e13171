pub mod error;
pub mod problem;
pub mod samples;
pub mod workspace;

pub use error::{Error, FixtureFileKind, Result};
pub use problem::*;
pub use samples::*;
pub use workspace::*;
