use pz_core::action;

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg()] // positional argument
    pub problem_id: String,

    /// 1-based sample number
    #[arg()]
    pub case_no: usize,

    #[arg(short, long)]
    pub template: Option<String>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_args(global_args)?;
    let template = cfg.template_name(args.template.as_deref())?;
    run_debug(&cfg, &template, &args.problem_id, args.case_no).await
}

pub async fn run_debug(
    cfg: &GlobalConfig,
    template: &str,
    problem_id: &str,
    case_no: usize,
) -> SubcmdResult {
    let problem = cfg.workspace().problem_dir(problem_id)?;
    let runner = action::prepare_runner(&cfg.templates(), template, &problem)?;
    let _ = action::do_debug(&runner, &problem, case_no).await?;
    Ok(())
}
