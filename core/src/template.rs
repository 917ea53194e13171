use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context as _};
use serde::{Deserialize, Serialize};

/// How a solution written in one language is located and executed.
///
/// `run` contains `file` literally; when the solution runs, that token is replaced
/// by the absolute path of the problem's copy of `file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default, rename = "language")]
    pub lang: String,
    pub file: String,
    #[serde(default)]
    pub run: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTemplateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Templates live in `<config dir>/<name>/` next to the global `config.toml`.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub const CONFIG_FILENAME: &str = "template.toml";
    pub const DEFAULT_SOURCE_FILENAME: &str = "main.xx";

    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: config_dir.into(),
        }
    }

    pub fn template_dir(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn load(&self, name: &str) -> anyhow::Result<TemplateConfig> {
        ensure!(!name.is_empty(), "No template selected");

        let dir = self.template_dir(name);
        if !dir.is_dir() {
            bail!("Template '{}' is not found (looked up {:?})", name, dir);
        }

        let cfg: TemplateConfig = fsutil::read_toml_with_deserialize(dir.join(Self::CONFIG_FILENAME))
            .with_context(|| format!("Invalid template '{}'", name))?;
        ensure!(
            !cfg.file.is_empty(),
            "Template '{}' does not set `file` in {}",
            name,
            Self::CONFIG_FILENAME
        );
        Ok(cfg)
    }

    /// Path of the template's own source file, which is copied into each problem dir.
    pub fn source_path(&self, name: &str, cfg: &TemplateConfig) -> PathBuf {
        self.template_dir(name).join(&cfg.file)
    }

    /// Creates `<name>/` with an empty source file and a `template.toml` to fill in.
    /// An existing template is never touched.
    pub fn add(&self, name: &str) -> anyhow::Result<AddTemplateOutcome> {
        ensure!(!name.is_empty(), "Template name must not be empty");
        ensure!(
            Path::new(name).components().count() == 1,
            "Invalid template name '{}'",
            name
        );

        let dir = self.template_dir(name);
        if dir.is_dir() {
            return Ok(AddTemplateOutcome::AlreadyExists(dir));
        }
        fsutil::mkdir_all(&dir)?;

        let cfg = TemplateConfig {
            file: Self::DEFAULT_SOURCE_FILENAME.to_owned(),
            ..Default::default()
        };
        fsutil::write_if_absent(dir.join(&cfg.file), "")?;
        if !dir.join(Self::CONFIG_FILENAME).exists() {
            fsutil::write_toml_with_mkdir(dir.join(Self::CONFIG_FILENAME), &cfg)?;
        }
        Ok(AddTemplateOutcome::Created(dir))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn write_template(store: &TemplateStore, name: &str, toml: &str) {
        fsutil::write_with_mkdir(
            store.template_dir(name).join(TemplateStore::CONFIG_FILENAME),
            toml,
        )
        .unwrap();
    }

    #[test]
    fn load_template_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        write_template(
            &store,
            "python",
            "language = \"Python3\"\nfile = \"main.py\"\nrun = \"python3 main.py\"\n",
        );

        let cfg = store.load("python").unwrap();
        assert_eq!(
            cfg,
            TemplateConfig {
                lang: "Python3".to_owned(),
                file: "main.py".to_owned(),
                run: "python3 main.py".to_owned(),
            }
        );
        assert_eq!(
            store.source_path("python", &cfg),
            dir.path().join("python/main.py")
        );
    }

    #[test]
    fn load_without_name_should_fail() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateStore::new(dir.path()).load("").unwrap_err();
        assert!(err.to_string().contains("No template selected"));
    }

    #[test]
    fn load_unknown_template_should_fail() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateStore::new(dir.path()).load("cobol").unwrap_err();
        assert!(err.to_string().contains("'cobol' is not found"));
    }

    #[test]
    fn add_creates_skeleton_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        let created = store.add("rust").unwrap();
        assert_eq!(created, AddTemplateOutcome::Created(dir.path().join("rust")));
        assert!(dir.path().join("rust/main.xx").is_file());

        let cfg = store.load("rust").unwrap();
        assert_eq!(cfg.file, "main.xx");
        assert_eq!(cfg.run, "");

        write_template(&store, "rust", "file = \"main.rs\"\nrun = \"cargo run\"\n");
        let again = store.add("rust").unwrap();
        assert_eq!(again, AddTemplateOutcome::AlreadyExists(dir.path().join("rust")));
        assert_eq!(store.load("rust").unwrap().file, "main.rs");
    }

    #[test]
    fn add_rejects_nested_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TemplateStore::new(dir.path()).add("a/b").is_err());
    }
}
