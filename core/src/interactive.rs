use std::io;

use dialoguer::{theme::ColorfulTheme, Input, Password};

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Reads one line typed by the user. An empty line is allowed.
pub fn ask_line(prompt: &str) -> io::Result<String> {
    Input::<String>::with_theme(&theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}

pub fn ask_password(prompt: &str) -> io::Result<String> {
    Password::with_theme(&theme())
        .with_prompt(prompt)
        .interact()
}
