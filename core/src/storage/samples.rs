use std::path::Path;

use serde::{Deserialize, Serialize};

/// Samples scraped from a problem page, in the order they appear on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSamples {
    pub problem_id: String,
    /// Page location; only shown to the user.
    #[serde(default)]
    pub url: Option<String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl ProblemSamples {
    pub fn from_json_file(filepath: impl AsRef<Path>) -> fsutil::Result<Self> {
        fsutil::read_json_with_deserialize(filepath)
    }
}
