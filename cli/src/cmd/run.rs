use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, session::Session};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Template used for the session [default: `defaultTemplate` setting]
    #[arg()] // positional argument
    pub template: Option<String>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_args(global_args)?;
    let template = cfg.template_name(args.template.as_deref())?;
    if template.is_empty() {
        log::warn!("No template selected; `test`, `debug` and `submit` will fail");
    }
    Session::new(cfg, template).run().await
}
