use colored::Colorize as _;
use pz_core::action;

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg()] // positional argument
    pub problem_id: String,

    #[arg(short, long)]
    pub template: Option<String>,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_args(global_args)?;
    let template = cfg.template_name(args.template.as_deref())?;
    show_submission(&cfg, &template, &args.problem_id)
}

/// Writes the language and path to stderr and the source code itself to stdout,
/// so that `pz submit B042 | <clipboard tool>` copies only the code.
pub fn show_submission(cfg: &GlobalConfig, template: &str, problem_id: &str) -> SubcmdResult {
    let problem = cfg.workspace().problem_dir(problem_id)?;
    let sub = action::prepare_submission(&cfg.templates(), template, &problem)?;

    eprintln!(
        "{} {} ({})",
        "Submit:".bold(),
        sub.lang.cyan(),
        util::replace_homedir_to_tilde(&sub.program_file).display()
    );
    println!("{}", sub.source_code);
    Ok(())
}
