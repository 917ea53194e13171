use std::time::Duration;

/// What a finished child process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Verdict {
    #[strum(serialize = "PASS")]
    Passed,
    #[strum(serialize = "FAIL")]
    Failed,
}

impl Verdict {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn is_passed(self) -> bool {
        self == Verdict::Passed
    }
}

#[derive(Debug, Clone)]
pub struct TestOutcome {
    pub fixture_index: usize,
    pub verdict: Verdict,
    pub execution_time: Duration,
    pub output: ProcessOutput,
}

impl TestOutcome {
    pub fn case_no(&self) -> usize {
        self.fixture_index + 1
    }
}

#[derive(Debug, Clone)]
pub struct DebugOutcome {
    pub fixture_index: usize,
    pub execution_time: Duration,
    pub output: ProcessOutput,
}

#[derive(Debug, Clone, Default)]
pub struct TestSummary {
    pub passed: usize,
    pub total: usize,
    pub outcomes: Vec<TestOutcome>,
}

impl TestSummary {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// True for an empty run as well (0/0).
    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }

    #[cfg(test)]
    pub fn verdicts(&self) -> Vec<Verdict> {
        self.outcomes.iter().map(|x| x.verdict).collect()
    }
}
