use std::path::{Component, Path, PathBuf};

use super::{error::*, ProblemDir};

/// Root under which every problem gets `<rank>/<problem id>/`.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Grouping prefix of a problem: its first character.
    ///
    /// ```
    /// use pz_core::storage::Workspace;
    ///
    /// assert_eq!(Workspace::rank("B042"), Some('B'));
    /// assert_eq!(Workspace::rank("Ｓ001"), Some('Ｓ'));
    /// assert_eq!(Workspace::rank(""), None);
    /// ```
    pub fn rank(problem_id: &str) -> Option<char> {
        problem_id.chars().next()
    }

    pub fn problem_dir(&self, problem_id: &str) -> Result<ProblemDir> {
        let rank = Self::rank(problem_id).ok_or(Error::EmptyProblemId)?;
        let mut components = Path::new(problem_id).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(Error::InvalidProblemId(problem_id.to_owned()));
        }
        let dir = self
            .root
            .join(rank.to_string())
            .join(problem_id);
        Ok(ProblemDir::new(problem_id, dir))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn problem_dir_is_grouped_by_rank() {
        let ws = Workspace::new("/q");
        let p = ws.problem_dir("A001").unwrap();
        assert_eq!(p.dir(), Path::new("/q/A/A001"));
        assert_eq!(p.id(), "A001");
        assert_eq!(p.tests_dir(), Path::new("/q/A/A001/tests"));
    }

    #[test]
    fn empty_problem_id_should_fail() {
        let ws = Workspace::new("/q");
        assert!(matches!(ws.problem_dir(""), Err(Error::EmptyProblemId)));
    }

    #[test]
    fn problem_id_must_stay_inside_workspace() {
        let ws = Workspace::new("/q");
        for id in ["/tmp/evil", "../../x", "..", ".", "A/../B", "B/042"] {
            let res = ws.problem_dir(id);
            assert!(
                matches!(&res, Err(Error::InvalidProblemId(s)) if s == id),
                "{:?} -> {:?}",
                id,
                res
            );
        }
    }
}
