use pz_core::{action, print_success, template::AddTemplateOutcome};

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the template to create, e.g. `python`
    #[arg()] // positional argument
    pub name: String,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_args(global_args)?;

    match action::add_template(&cfg.templates(), &args.name)? {
        AddTemplateOutcome::Created(dir) => {
            print_success!(
                "Created template '{}' at {:?}",
                args.name,
                util::replace_homedir_to_tilde(dir)
            );
        }
        AddTemplateOutcome::AlreadyExists(dir) => println!(
            "Template '{}' already exists at {:?}",
            args.name,
            util::replace_homedir_to_tilde(dir)
        ),
    }
    Ok(())
}
