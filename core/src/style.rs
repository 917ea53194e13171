use std::time::Duration;

use colored::{Color, ColoredString, Colorize};

use crate::testing::{DebugOutcome, StdStream, TestOutcome, TestSummary, Verdict};

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }
}

const ECHO_HEADER: &str = "    >> ";

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for Verdict {
    fn color(&self) -> Color {
        use Verdict::*;
        if !self::is_truecolor_supported() {
            return match self {
                Passed => Color::Green,
                Failed => Color::Red,
            };
        }

        match self {
            Passed => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Failed => Color::TrueColor {
                r: 220,
                g: 42,
                b: 42,
            },
        }
    }
}

impl ColorTheme for StdStream {
    fn color(&self) -> Color {
        match self {
            StdStream::Stderr => Color::Red,
            _ => Color::Green,
        }
    }
}

pub fn verdict_icon(verdict: Verdict) -> ColoredString {
    format!(" {} ", verdict)
        .on_color(verdict.color())
        .bold()
        .color(Color::BrightWhite)
}

pub fn format_seconds(d: Duration) -> String {
    format!("{:.3}s", d.as_secs_f64())
}

pub fn print_echo_line(stream: StdStream, line: &str) {
    println!("{}{}", ECHO_HEADER, line.color(stream.color()));
}

pub fn case_result_line(res: &TestOutcome) -> String {
    let mut line = format!("Case {} ... {}", res.case_no(), self::verdict_icon(res.verdict));
    if res.verdict.is_passed() {
        line += &format!(" [{}]", format_seconds(res.execution_time));
    } else if let Some(code) = res.output.status.filter(|&c| c != 0) {
        line += &format!(" (exit code {})", code).dimmed().to_string();
    }
    line
}

pub fn print_case_result(res: &TestOutcome) {
    println!("  {}", self::case_result_line(res));
}

pub fn summary_line(summary: &TestSummary) -> String {
    let bar = "-".repeat(5);
    let result = format!("Passed {}/{}", summary.passed, summary.total);
    let detail = if summary.is_all_passed() {
        format!("{} ({})", result, "All clear! ✨").green().to_string()
    } else {
        format!("{} ({} failed 💣)", result, summary.failed())
            .bright_red()
            .to_string()
    };
    format!("{} {} {}", bar, detail, bar)
}

pub fn print_test_summary(summary: &TestSummary) {
    println!("{}", self::summary_line(summary));
}

pub fn print_debug_start(case_no: usize) {
    println!("  {} case {}", "Debug:".cyan().bold(), case_no);
}

pub fn print_debug_finish(res: &DebugOutcome) {
    let status = match res.output.status {
        Some(0) => String::new(),
        Some(code) => format!(", exit code {}", code),
        None => ", terminated by signal".to_owned(),
    };
    println!(
        "  {} time: {}{}",
        "Finished.".cyan().bold(),
        format_seconds(res.execution_time),
        status
    );
}
