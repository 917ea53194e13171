use std::path::PathBuf;

use anyhow::Context as _;
use pz_core::{storage::Workspace, Config, TemplateStore};

use crate::{cmd::GlobalArgs, util};

pub const APP_NAME: &str = "pz";

/// Locations resolved from the command line, falling back to per-user defaults.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub config_dir: PathBuf,
    pub workspace_root: PathBuf,
}

impl GlobalConfig {
    pub fn default_config_dir() -> anyhow::Result<PathBuf> {
        let dir = dirs::config_dir().context("Failed to get user's config dir path")?;
        Ok(dir.join(APP_NAME))
    }

    pub fn from_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        let GlobalArgs {
            subcmd: _,
            config_dir,
            workspace,
            verbose: _,
        } = args;

        let config_dir = match config_dir {
            Some(d) => util::absolute(d),
            None => Self::default_config_dir()?,
        };
        let workspace_root = workspace
            .as_ref()
            .map(util::absolute)
            .unwrap_or_else(util::current_dir);

        log::debug!(
            "config dir: {:?}, workspace: {:?}",
            util::replace_homedir_to_tilde(&config_dir),
            util::replace_homedir_to_tilde(&workspace_root)
        );
        Ok(Self {
            config_dir,
            workspace_root,
        })
    }

    pub fn load_settings(&self) -> anyhow::Result<Config> {
        Config::load(&self.config_dir)
    }

    pub fn templates(&self) -> TemplateStore {
        TemplateStore::new(&self.config_dir)
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(&self.workspace_root)
    }

    /// The template named on the command line, or `defaultTemplate` from the settings.
    pub fn template_name(&self, arg: Option<&str>) -> anyhow::Result<String> {
        if let Some(name) = arg {
            return Ok(name.to_owned());
        }
        Ok(self.load_settings()?.setting.default_template)
    }
}
