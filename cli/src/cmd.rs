pub mod add;
pub mod config;
pub mod debug;
pub mod get;
pub mod run;
pub mod submit;

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Directory holding config.toml and templates [default: <user config dir>/pz]
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Root of the per-problem directories [default: current dir]
    #[arg(short = 'w', long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Add(add::Args),
    Config(config::Args),

    #[command(alias("g"))]
    Get(get::Args),

    #[command(alias("t"))]
    Test(test::Args),

    #[command(alias("d"))]
    Debug(debug::Args),

    #[command(alias("s"))]
    Submit(submit::Args),

    Run(run::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Add(args) => add::exec(args, self),
            Config(args) => config::exec(args, self),
            Get(args) => get::exec(args, self),
            Test(args) => test::exec(args, self).await,
            Debug(args) => debug::exec(args, self).await,
            Submit(args) => submit::exec(args, self),
            Run(args) => run::exec(args, self).await,
        }
    }
}

// `test` is the subcommand module above
#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn parse_aliases_and_global_flags() {
        let app = GlobalArgs::try_parse_from(["pz", "t", "B042", "-t", "python", "-vv"]).unwrap();
        assert_eq!(app.verbose, 2);
        let Subcommand::Test(args) = app.subcmd else {
            panic!("expected test subcommand");
        };
        assert_eq!(args.problem_id, "B042");
        assert_eq!(args.template.as_deref(), Some("python"));
    }

    #[test]
    fn debug_case_number_must_be_numeric() {
        assert!(GlobalArgs::try_parse_from(["pz", "d", "B042", "x"]).is_err());

        let app = GlobalArgs::try_parse_from(["pz", "debug", "B042", "2"]).unwrap();
        let Subcommand::Debug(args) = app.subcmd else {
            panic!("expected debug subcommand");
        };
        assert_eq!(args.case_no, 2);
    }

    #[test]
    fn workspace_flag_after_subcommand() {
        let app =
            GlobalArgs::try_parse_from(["pz", "get", "s.json", "--workspace", "/q"]).unwrap();
        assert_eq!(app.workspace, Some(PathBuf::from("/q")));
    }
}
