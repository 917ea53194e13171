pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
use std::path::PathBuf;

use error::*;

use crate::storage::{ProblemDir, ProblemSamples, Workspace};
use crate::style;
use crate::template::{AddTemplateOutcome, TemplateStore};
use crate::testing::{DebugOutcome, FixtureSource, TestRunner, TestSummary};

pub fn add_template(templates: &TemplateStore, name: &str) -> Result<AddTemplateOutcome> {
    templates
        .add(name)
        .with_context(|| format!("Failed to add template '{}'", name))
}

/// Loads `template_name` and resolves its run-command against the problem's copy of
/// the source file.
pub fn prepare_runner(
    templates: &TemplateStore,
    template_name: &str,
    problem: &ProblemDir,
) -> Result<TestRunner> {
    ensure!(!template_name.is_empty(), "No template selected");

    let tmpl = templates.load(template_name)?;
    let program_file = problem.program_file(&tmpl);
    if !program_file.is_file() {
        log::warn!("{:?} does not exist", program_file);
    }

    TestRunner::new(&tmpl, &program_file)
        .with_context(|| format!("Invalid template '{}'", template_name))
}

/// Runs the program on every fixture in order and prints a verdict per case and a summary.
///
/// A wrong answer is a normal outcome recorded in the summary. Failing to read a fixture or
/// to launch the program aborts the whole run without printing the summary.
pub async fn do_test(runner: &TestRunner, fixtures: &impl FixtureSource) -> Result<TestSummary> {
    let total = fixtures
        .fixture_count()
        .context("Failed to find samples")?;

    log::info!("Running: {}", runner.get_command());

    let mut passed = 0;
    let mut outcomes = Vec::with_capacity(total);
    for index in 0..total {
        let fixture = fixtures.load_fixture(index)?;
        let res = runner
            .run(&fixture)
            .await
            .with_context(|| format!("Failed to run sample {}", fixture.case_no()))?;

        if res.verdict.is_passed() {
            passed += 1;
        }
        style::print_case_result(&res);
        outcomes.push(res);
    }

    let summary = TestSummary {
        passed,
        total,
        outcomes,
    };
    style::print_test_summary(&summary);
    Ok(summary)
}

/// Runs the program on the `case_no`-th (1-based) fixture with its output echoed live.
pub async fn do_debug(
    runner: &TestRunner,
    fixtures: &impl FixtureSource,
    case_no: usize,
) -> Result<DebugOutcome> {
    let total = fixtures
        .fixture_count()
        .context("Failed to find samples")?;
    ensure!(
        (1..=total).contains(&case_no),
        "Could not find sample {} ({} samples saved)",
        case_no,
        total
    );

    let fixture = fixtures.load_fixture(case_no - 1)?;

    log::info!("Running: {}", runner.get_command());
    style::print_debug_start(case_no);
    let res = runner
        .run_verbose(&fixture)
        .await
        .with_context(|| format!("Failed to run sample {}", case_no))?;
    style::print_debug_finish(&res);
    Ok(res)
}

/// Saves scraped samples as fixtures and, when a template is selected, puts a copy of its
/// source file into the problem dir. Nothing that already exists is overwritten.
pub fn save_problem_samples(
    samples: &ProblemSamples,
    workspace: &Workspace,
    templates: &TemplateStore,
    template_name: &str,
) -> Result<ProblemDir> {
    let problem = workspace.problem_dir(&samples.problem_id)?;

    match &samples.url {
        Some(url) => println!("  ID: {} ({})", problem.id(), url),
        None => println!("  ID: {}", problem.id()),
    }
    println!(
        "  Get sample: input({}) output({})",
        samples.inputs.len(),
        samples.outputs.len()
    );

    problem
        .save_samples(samples.inputs.as_slice(), samples.outputs.as_slice())
        .context("Failed to save samples")?;

    if !template_name.is_empty() {
        let tmpl = templates.load(template_name)?;
        let copied = problem
            .install_program_file(templates.source_path(template_name, &tmpl), &tmpl)
            .context("Failed to copy template")?;
        if copied {
            println!("  Copy template: {}", tmpl.file);
        }
    }
    Ok(problem)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub lang: String,
    pub program_file: PathBuf,
    pub source_code: String,
}

/// Reads the solution to be submitted, trimmed of surrounding whitespace.
pub fn prepare_submission(
    templates: &TemplateStore,
    template_name: &str,
    problem: &ProblemDir,
) -> Result<Submission> {
    ensure!(!template_name.is_empty(), "No template selected");

    let tmpl = templates.load(template_name)?;
    let program_file = problem.program_file(&tmpl);
    let source_code = fsutil::read_to_string(&program_file)?.trim().to_owned();
    Ok(Submission {
        lang: tmpl.lang,
        program_file,
        source_code,
    })
}
