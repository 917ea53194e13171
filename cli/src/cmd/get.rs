use std::path::{Path, PathBuf};

use anyhow::Context as _;
use pz_core::{action, print_success, storage::ProblemSamples};

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON file holding `problem_id`, `inputs` and `outputs`
    #[arg()] // positional argument
    pub samples_file: PathBuf,

    /// Template whose source file is copied into the problem dir
    #[arg(short, long)]
    pub template: Option<String>,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_args(global_args)?;
    let template = cfg.template_name(args.template.as_deref())?;
    let problem_id = import_samples(&cfg, &template, &args.samples_file)?;
    log::info!("Saved samples of {}", problem_id);
    Ok(())
}

/// Returns the id of the imported problem.
pub fn import_samples(
    cfg: &GlobalConfig,
    template: &str,
    samples_file: &Path,
) -> anyhow::Result<String> {
    let samples = ProblemSamples::from_json_file(samples_file)
        .with_context(|| format!("Failed to read samples from {:?}", samples_file))?;

    let problem = action::save_problem_samples(&samples, &cfg.workspace(), &cfg.templates(), template)?;
    print_success!(
        "Saved to {:?}",
        util::replace_homedir_to_tilde(problem.dir())
    );
    Ok(problem.id().to_owned())
}
