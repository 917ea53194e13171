use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FixtureFileKind {
    #[strum(serialize = "input")]
    Input,
    #[strum(serialize = "output")]
    Output,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Problem id must not be empty")]
    EmptyProblemId,

    #[error("Invalid problem id '{0}': it must be usable as a single directory name")]
    InvalidProblemId(String),

    #[error("Missing {kind} file of sample {} ({path:?}): sample files must be numbered contiguously from 0", .index + 1)]
    MissingFixtureFile {
        kind: FixtureFileKind,
        index: usize,
        path: PathBuf,
    },

    #[error(transparent)]
    Fs(#[from] fsutil::Error),
}
