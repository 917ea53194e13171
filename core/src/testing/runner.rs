use std::{path::Path, time::Instant};

use super::{command::*, fixture::Fixture, process::*, result::*};
use crate::template::TemplateConfig;

/// Compares a program's stdout with the expected output line by line.
///
/// `actual` is trimmed as a whole before splitting, so trailing blank lines and
/// surrounding whitespace printed by the program are tolerated. `expected` is NOT
/// trimmed; only its final line terminator is not counted as an extra empty line.
/// Lines must match byte for byte (no per-line trimming, `\r` is significant).
///
/// ```
/// use pz_core::testing::lines_match;
///
/// assert!(lines_match("abc\n", "abc\n\n"));
/// assert!(!lines_match("1\n2\n", "1\n"));
/// ```
pub fn lines_match(expected: &str, actual: &str) -> bool {
    let expected = expected.split_terminator('\n');
    let actual = actual.trim().split_terminator('\n');
    expected.eq(actual)
}

#[derive(Debug, Clone)]
pub struct TestRunner {
    cmd: RunCommand,
}

impl TestRunner {
    /// Resolves the template's run-command against `program_file`.
    pub fn new(tmpl: &TemplateConfig, program_file: impl AsRef<Path>) -> Result<Self, CommandError> {
        let cmd = RunCommand::from_template(&tmpl.run, &tmpl.file, program_file)?;
        Ok(Self::from_command(cmd))
    }

    pub fn from_command(cmd: RunCommand) -> Self {
        Self { cmd }
    }

    pub fn get_command(&self) -> &RunCommand {
        &self.cmd
    }

    /// Runs the program silently on `fixture` and judges its stdout.
    /// The exit status does not affect the verdict.
    pub async fn run(&self, fixture: &Fixture) -> Result<TestOutcome, ProcessError> {
        let start_at = Instant::now();
        let output = run_process(&self.cmd, &fixture.input, false).await?;
        let execution_time = start_at.elapsed();

        let verdict = Verdict::from_passed(lines_match(&fixture.output, &output.stdout));
        Ok(TestOutcome {
            fixture_index: fixture.index,
            verdict,
            execution_time,
            output,
        })
    }

    /// Runs the program on `fixture` echoing its output live. Nothing is judged.
    pub async fn run_verbose(&self, fixture: &Fixture) -> Result<DebugOutcome, ProcessError> {
        let start_at = Instant::now();
        let output = run_process(&self.cmd, &fixture.input, true).await?;
        let execution_time = start_at.elapsed();

        Ok(DebugOutcome {
            fixture_index: fixture.index,
            execution_time,
            output,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trailing_output_whitespace_is_tolerated() {
        assert!(lines_match("abc\n", "abc\n\n"));
        assert!(lines_match("abc", "abc\n"));
        assert!(lines_match("abc\n", "  abc  \n"));
        assert!(lines_match("1 2\n3 4\n", "1 2\n3 4\n\n\n"));
    }

    #[test]
    fn expected_output_is_not_trimmed() {
        assert!(!lines_match("abc \n", "abc \n"));
        assert!(!lines_match("\nabc\n", "\nabc\n"));
        assert!(!lines_match("abc\n\n", "abc\n"));
    }

    #[test]
    fn line_count_mismatch_always_fails() {
        assert!(!lines_match("1\n2\n", "1\n"));
        assert!(!lines_match("1\n", "1\n2\n"));
        assert!(!lines_match("1\n2\n3\n", "1\n2\n"));
    }

    #[test]
    fn lines_are_compared_exactly() {
        assert!(!lines_match("Yes\n", "yes\n"));
        assert!(!lines_match("a\r\nb\n", "a\nb\n"));
        assert!(lines_match("a\r\nb\n", "a\r\nb\n"));
        assert!(!lines_match("a b\n", "a  b\n"));
    }

    #[test]
    fn empty_outputs() {
        assert!(lines_match("", ""));
        assert!(lines_match("", "\n \n"));
        assert!(!lines_match("\n", ""));
        assert!(!lines_match("0\n", ""));
    }

    struct X {
        input: &'static str,
        expected: &'static str,
        pyscript: &'static str,
        want_verdict: Verdict,
        want_output: ProcessOutput,
    }

    async fn run_test(x: X) {
        let cmd = RunCommand::new("python3", ["-c", x.pyscript]);
        let fixture = Fixture::new(0, x.input, x.expected);
        let r = TestRunner::from_command(cmd);

        let res = dbg!(r.run(&fixture).await).unwrap();
        assert_eq!(res.verdict, x.want_verdict);
        assert_eq!(res.output, x.want_output);
        assert_eq!(res.fixture_index, 0);
    }

    #[tokio::test]
    async fn should_pass() {
        run_test(X {
            input: "123\n",
            expected: "hello_123\n",
            pyscript: r#"print("hello_" + input())"#,
            want_verdict: Verdict::Passed,
            want_output: ProcessOutput {
                status: Some(0),
                stdout: "hello_123\n".into(),
                stderr: "".into(),
            },
        })
        .await;
    }

    #[tokio::test]
    async fn should_pass_even_if_stdin_is_not_read() {
        run_test(X {
            input: "123\n",
            expected: "hello_123\n",
            pyscript: r#"print("hello_123")"#,
            want_verdict: Verdict::Passed,
            want_output: ProcessOutput {
                status: Some(0),
                stdout: "hello_123\n".into(),
                stderr: "".into(),
            },
        })
        .await;
    }

    #[tokio::test]
    async fn should_pass_if_just_missing_newline() {
        run_test(X {
            input: "123\n",
            expected: "hello_123\n",
            pyscript: r#"print("hello_123", end='')"#,
            want_verdict: Verdict::Passed,
            want_output: ProcessOutput {
                status: Some(0),
                stdout: "hello_123".into(),
                stderr: "".into(),
            },
        })
        .await;
    }

    #[tokio::test]
    async fn should_fail_if_answer_is_in_stderr() {
        run_test(X {
            input: "123\n",
            expected: "hello_123\n",
            pyscript: r#"import sys; print("hello_123", file=sys.stderr)"#,
            want_verdict: Verdict::Failed,
            want_output: ProcessOutput {
                status: Some(0),
                stdout: "".into(),
                stderr: "hello_123\n".into(),
            },
        })
        .await;
    }

    #[tokio::test]
    async fn exit_code_does_not_affect_verdict() {
        run_test(X {
            input: "123\n",
            expected: "hello_123\n",
            pyscript: r#"print("hello_123"); exit(42)"#,
            want_verdict: Verdict::Passed,
            want_output: ProcessOutput {
                status: Some(42),
                stdout: "hello_123\n".into(),
                stderr: "".into(),
            },
        })
        .await;
    }

    #[tokio::test]
    async fn new_resolves_template_against_program_file() {
        let tmpl = TemplateConfig {
            lang: "Python3".into(),
            file: "main.py".into(),
            run: "python3 main.py".into(),
        };
        let r = TestRunner::new(&tmpl, "/q/A/A001/main.py").unwrap();
        assert_eq!(r.get_command().argv(), vec!["python3", "/q/A/A001/main.py"]);

        let empty = TemplateConfig {
            run: "".into(),
            ..tmpl
        };
        assert_eq!(
            TestRunner::new(&empty, "/q/A/A001/main.py").unwrap_err(),
            CommandError::EmptyTemplate
        );
    }
}
