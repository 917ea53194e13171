use std::{fmt, path::Path};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("No execution command configured (set `run` in template.toml)")]
    EmptyTemplate,
}

/// Program and argument vector ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RunCommand {
    pub fn new<S, I>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a command from a template's run-command.
    ///
    /// The first occurrence of `source_filename` in `template` is replaced by `program_file`,
    /// then the result is split on single spaces. Quotes are not interpreted, so no argument
    /// can contain a space, and consecutive spaces yield empty arguments.
    ///
    /// ```
    /// use pz_core::testing::RunCommand;
    ///
    /// let cmd = RunCommand::from_template("python x.py", "x.py", "/q/A/x.py").unwrap();
    /// assert_eq!(cmd.program, "python");
    /// assert_eq!(cmd.args, vec!["/q/A/x.py"]);
    /// ```
    pub fn from_template(
        template: &str,
        source_filename: &str,
        program_file: impl AsRef<Path>,
    ) -> Result<Self, CommandError> {
        if template.trim().is_empty() {
            return Err(CommandError::EmptyTemplate);
        }

        let program_file = program_file.as_ref().to_string_lossy();
        let cmdline = if source_filename.is_empty() {
            template.to_owned()
        } else {
            template.replacen(source_filename, &program_file, 1)
        };

        let mut tokens = cmdline.split(' ');
        let program = tokens.next().unwrap_or_default();
        Ok(Self::new(program, tokens))
    }

    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for RunCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}
