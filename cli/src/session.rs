use std::{io::Write as _, path::PathBuf, str::FromStr};

use anyhow::Context as _;
use colored::Colorize as _;
use tokio::io::{AsyncBufReadExt as _, BufReader};

use crate::{
    cmd::{self, SubcmdResult},
    config::GlobalConfig,
};

/// One line typed at the `pz run` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Select(String),
    Get(PathBuf),
    Test,
    Debug(usize),
    Submit,
    Exit,
    Nop,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid sample number '{0}'")]
    InvalidCaseNo(String),
}

impl FromStr for SessionCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        use SessionCommand::*;

        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Nop);
        };
        let arg = words.next();

        match (head, arg) {
            ("id", Some(id)) => Ok(Select(id.to_owned())),
            ("id", None) => Err(ParseError::Usage("id <problem id>")),
            ("get" | "g", Some(path)) => Ok(Get(PathBuf::from(path))),
            ("get" | "g", None) => Err(ParseError::Usage("get <samples.json>")),
            ("test" | "t", _) => Ok(Test),
            ("debug" | "d", Some(n)) => n
                .parse()
                .map(Debug)
                .map_err(|_| ParseError::InvalidCaseNo(n.to_owned())),
            ("debug" | "d", None) => Err(ParseError::Usage("debug <sample number>")),
            ("submit" | "s", _) => Ok(Submit),
            ("exit" | "e", _) => Ok(Exit),
            (other, _) => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}

pub struct Session {
    cfg: GlobalConfig,
    template: String,
    problem_id: Option<String>,
}

impl Session {
    const PROMPT: &str = "> ";

    pub fn new(cfg: GlobalConfig, template: String) -> Self {
        Self {
            cfg,
            template,
            problem_id: None,
        }
    }

    pub fn problem_id(&self) -> Option<&str> {
        self.problem_id.as_deref()
    }

    /// Reads commands from stdin until `exit` or EOF. A failing command is reported
    /// and the session goes on.
    pub async fn run(&mut self) -> SubcmdResult {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            self.print_prompt();
            let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
                println!();
                return Ok(());
            };

            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    continue;
                }
            };
            if command == SessionCommand::Exit {
                return Ok(());
            }
            if let Err(e) = self.dispatch(command).await {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            }
        }
    }

    pub async fn dispatch(&mut self, command: SessionCommand) -> SubcmdResult {
        use SessionCommand::*;
        match command {
            Select(id) => {
                self.cfg.workspace().problem_dir(&id)?;
                self.problem_id = Some(id);
            }
            Get(path) => {
                let id = cmd::get::import_samples(&self.cfg, &self.template, &path)?;
                self.problem_id = Some(id);
            }
            Test => cmd::test::run_tests(&self.cfg, &self.template, self.selected()?).await?,
            Debug(n) => cmd::debug::run_debug(&self.cfg, &self.template, self.selected()?, n).await?,
            Submit => cmd::submit::show_submission(&self.cfg, &self.template, self.selected()?)?,
            Exit | Nop => {}
        }
        Ok(())
    }

    fn selected(&self) -> anyhow::Result<&str> {
        self.problem_id()
            .context("No problem selected (use `id <problem id>` or `get <samples.json>`)")
    }

    fn print_prompt(&self) {
        let id = self.problem_id().unwrap_or("-");
        print!("[{}] {}{}", self.template.cyan(), id.bold(), Self::PROMPT);
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use SessionCommand::*;

    #[test]
    fn parse_commands_and_aliases() {
        let cases = [
            ("", Nop),
            ("   ", Nop),
            ("id B042", Select("B042".to_owned())),
            ("g s.json", Get(PathBuf::from("s.json"))),
            ("get  s.json", Get(PathBuf::from("s.json"))),
            ("t", Test),
            ("test", Test),
            ("d 2", Debug(2)),
            ("debug 10", Debug(10)),
            ("s", Submit),
            ("exit", Exit),
            ("e", Exit),
        ];
        for (line, want) in cases {
            assert_eq!(line.parse::<SessionCommand>(), Ok(want), "{:?}", line);
        }
    }

    #[test]
    fn parse_rejects_bad_lines() {
        assert_eq!(
            "debug x".parse::<SessionCommand>(),
            Err(ParseError::InvalidCaseNo("x".to_owned()))
        );
        assert_eq!(
            "d -1".parse::<SessionCommand>(),
            Err(ParseError::InvalidCaseNo("-1".to_owned()))
        );
        assert!(matches!("d".parse::<SessionCommand>(), Err(ParseError::Usage(_))));
        assert!(matches!("id".parse::<SessionCommand>(), Err(ParseError::Usage(_))));
        assert_eq!(
            "compile".parse::<SessionCommand>(),
            Err(ParseError::Unknown("compile".to_owned()))
        );
    }

    #[tokio::test]
    async fn commands_need_selected_problem() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GlobalConfig {
            config_dir: dir.path().join("config"),
            workspace_root: dir.path().join("work"),
        };
        let mut session = Session::new(cfg, "python".to_owned());

        let err = session.dispatch(Test).await.unwrap_err();
        assert!(err.to_string().contains("No problem selected"));

        session.dispatch(Select("B042".to_owned())).await.unwrap();
        assert_eq!(session.problem_id(), Some("B042"));

        // template dir does not exist
        let err = session.dispatch(Test).await.unwrap_err();
        assert!(err.to_string().contains("not found"), "{}", err);
    }
}
