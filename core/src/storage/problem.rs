use std::path::{Path, PathBuf};

use lazy_regex::regex_captures;

use super::error::*;
use crate::template::TemplateConfig;
use crate::testing::{Fixture, FixtureSource};

/// Directory owning one problem's solution file and its sample fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDir {
    id: String,
    dir: PathBuf,
}

impl ProblemDir {
    const TESTS_DIR_NAME: &str = "tests";

    pub fn new(id: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            dir: dir.into(),
        }
    }

    /// Returns tuple (input_filename, output_filename).
    ///
    /// ```
    /// use pz_core::storage::ProblemDir;
    ///
    /// let (infile, outfile) = ProblemDir::fixture_filename(0);
    /// assert_eq!(infile, "input_0.txt");
    /// assert_eq!(outfile, "output_0.txt");
    /// ```
    pub fn fixture_filename(index: usize) -> (String, String) {
        (format!("input_{}.txt", index), format!("output_{}.txt", index))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.dir.join(Self::TESTS_DIR_NAME)
    }

    /// The problem's copy of the template source file.
    pub fn program_file(&self, tmpl: &TemplateConfig) -> PathBuf {
        self.dir.join(&tmpl.file)
    }

    fn fixture_paths(&self, index: usize) -> (PathBuf, PathBuf) {
        let dir = self.tests_dir();
        let (infile, outfile) = Self::fixture_filename(index);
        (dir.join(infile), dir.join(outfile))
    }

    /// Number of fixtures N: one more than the largest `input_<i>.txt` index.
    ///
    /// A problem without a `tests` dir has no fixtures. Every index below N must have
    /// both its input and output file.
    pub fn count_fixtures(&self) -> Result<usize> {
        let tests_dir = self.tests_dir();
        if !tests_dir.is_dir() {
            log::debug!("{:?} does not exist", tests_dir);
            return Ok(0);
        }

        let mut n = 0;
        for entry in fsutil::read_dir(&tests_dir)?.filter_map(std::result::Result::ok) {
            let filename = entry.file_name();
            let Some(filename) = filename.to_str() else {
                continue
            };
            let Some((_, index)) = regex_captures!(r"^input_(0|[1-9][0-9]*)\.txt$", filename) else {
                continue
            };
            match index.parse::<usize>().map(|i| i.checked_add(1)) {
                Ok(Some(count)) => n = n.max(count),
                Ok(None) => log::warn!("Ignoring {:?}: index is too large", entry.path()),
                Err(e) => log::warn!("Ignoring {:?}: {}", entry.path(), e),
            }
        }

        for index in 0..n {
            let (infile, outfile) = self.fixture_paths(index);
            for (kind, path) in [
                (FixtureFileKind::Input, infile),
                (FixtureFileKind::Output, outfile),
            ] {
                if !path.is_file() {
                    return Err(Error::MissingFixtureFile { kind, index, path });
                }
            }
        }

        log::debug!("Found {} samples in {:?}", n, tests_dir);
        Ok(n)
    }

    pub fn read_fixture(&self, index: usize) -> Result<Fixture> {
        let (infile, outfile) = self.fixture_paths(index);
        let input = fsutil::read_to_string(infile)?;
        let output = fsutil::read_to_string(outfile)?;
        Ok(Fixture::new(index, input, output))
    }

    /// Writes samples as fixtures `0..`. Files that already exist are kept as they are.
    /// Returns the number of newly written files.
    pub fn save_samples<S>(&self, inputs: &[S], outputs: &[S]) -> Result<usize>
    where
        S: AsRef<str>,
    {
        if inputs.len() != outputs.len() {
            log::warn!(
                "Problem {} has {} input samples but {} output samples",
                self.id,
                inputs.len(),
                outputs.len()
            );
        }

        fsutil::mkdir_all(self.tests_dir())?;

        let mut written = 0;
        for (i, s) in inputs.iter().enumerate() {
            let (infile, _) = self.fixture_paths(i);
            written += fsutil::write_if_absent(infile, s.as_ref())? as usize;
        }
        for (i, s) in outputs.iter().enumerate() {
            let (_, outfile) = self.fixture_paths(i);
            written += fsutil::write_if_absent(outfile, s.as_ref())? as usize;
        }
        Ok(written)
    }

    /// Copies the template source into this problem dir unless a copy is already there.
    /// Returns true if the file was copied.
    pub fn install_program_file(&self, template_source: impl AsRef<Path>, tmpl: &TemplateConfig) -> Result<bool> {
        let dst = self.program_file(tmpl);
        if dst.exists() {
            return Ok(false);
        }
        fsutil::mkdir_all(&self.dir)?;
        fsutil::copy_file(template_source, &dst)?;
        Ok(true)
    }
}

impl FixtureSource for ProblemDir {
    fn fixture_count(&self) -> anyhow::Result<usize> {
        Ok(self.count_fixtures()?)
    }

    fn load_fixture(&self, index: usize) -> anyhow::Result<Fixture> {
        Ok(self.read_fixture(index)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn problem(root: &Path) -> ProblemDir {
        ProblemDir::new("A001", root.join("A/A001"))
    }

    #[test]
    fn no_tests_dir_means_no_fixture() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(problem(dir.path()).count_fixtures().unwrap(), 0);
    }

    #[test]
    fn save_then_count_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());

        let written = p.save_samples(&["1 2", "5 5"], &["3", "10"]).unwrap();
        assert_eq!(written, 4);
        assert_eq!(p.count_fixtures().unwrap(), 2);
        assert_eq!(p.read_fixture(1).unwrap(), Fixture::new(1, "5 5", "10"));
        assert!(p.tests_dir().join("input_0.txt").is_file());
        assert!(p.tests_dir().join("output_1.txt").is_file());
    }

    #[test]
    fn save_never_overwrites_existing_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());

        p.save_samples(&["1 2"], &["3"]).unwrap();
        let written = p.save_samples(&["9 9", "5 5"], &["18", "10"]).unwrap();

        assert_eq!(written, 2);
        assert_eq!(p.read_fixture(0).unwrap(), Fixture::new(0, "1 2", "3"));
        assert_eq!(p.read_fixture(1).unwrap(), Fixture::new(1, "5 5", "10"));
    }

    #[test]
    fn unrelated_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());
        p.save_samples(&["x"], &["x"]).unwrap();
        for name in ["input_a.txt", "input_01.txt", "memo.txt", "input_3.txt.bak"] {
            fsutil::write(p.tests_dir().join(name), "").unwrap();
        }

        assert_eq!(p.count_fixtures().unwrap(), 1);
    }

    #[test]
    fn huge_index_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());
        p.save_samples(&["1"], &["1"]).unwrap();
        let (infile, outfile) = ProblemDir::fixture_filename(usize::MAX);
        fsutil::write(p.tests_dir().join(infile), "").unwrap();
        fsutil::write(p.tests_dir().join(outfile), "").unwrap();

        assert_eq!(p.count_fixtures().unwrap(), 1);
    }

    #[test]
    fn gap_in_indices_should_fail() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());
        p.save_samples(&["a"], &["a"]).unwrap();
        fsutil::write(p.tests_dir().join("input_2.txt"), "c").unwrap();
        fsutil::write(p.tests_dir().join("output_2.txt"), "c").unwrap();

        let err = p.count_fixtures().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingFixtureFile {
                kind: FixtureFileKind::Input,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn missing_output_should_fail() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());
        p.save_samples(&["a", "b"], &["a"]).unwrap();

        let err = p.count_fixtures().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingFixtureFile {
                kind: FixtureFileKind::Output,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn install_program_file_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let p = problem(dir.path());
        let src = dir.path().join("template/main.py");
        fsutil::write_with_mkdir(&src, "print(1)").unwrap();
        let tmpl = TemplateConfig {
            file: "main.py".to_owned(),
            ..Default::default()
        };

        assert!(p.install_program_file(&src, &tmpl).unwrap());
        fsutil::write(p.program_file(&tmpl), "print(2)").unwrap();
        assert!(!p.install_program_file(&src, &tmpl).unwrap());
        assert_eq!(fsutil::read_to_string(p.program_file(&tmpl)).unwrap(), "print(2)");
    }
}
