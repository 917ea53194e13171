use anyhow::Context as _;
use pz_core::{config::ConfigKey, interactive, print_success};

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Action {
    /// Set `email`, `password` or `defaultTemplate`. Prompts for the value when omitted.
    Set {
        key: String,
        value: Option<String>,
    },
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_args(global_args)?;
    let mut settings = cfg.load_settings()?;

    let Some(Action::Set { key, value }) = &args.action else {
        print!("{}", settings.masked().to_toml()?);
        return Ok(());
    };

    let value = match value {
        Some(v) => v.clone(),
        None if key == &ConfigKey::Password.to_string() => {
            interactive::ask_password(key).context("Failed to read password")?
        }
        None => interactive::ask_line(key).context("Failed to read value")?,
    };

    settings.set(key, value)?;
    settings.save(&cfg.config_dir)?;
    print_success!("Saved '{}'", key);
    Ok(())
}
