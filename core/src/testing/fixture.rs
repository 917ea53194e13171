/// One recorded sample: what is fed to stdin and what stdout should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Zero-based; users see `index + 1`.
    pub index: usize,
    pub input: String,
    pub output: String,
}

impl Fixture {
    pub fn new(index: usize, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            index,
            input: input.into(),
            output: output.into(),
        }
    }

    /// 1-based number shown to users.
    pub fn case_no(&self) -> usize {
        self.index + 1
    }
}

/// Ordered set of fixtures `0..fixture_count()` for one problem.
pub trait FixtureSource {
    fn fixture_count(&self) -> anyhow::Result<usize>;
    fn load_fixture(&self, index: usize) -> anyhow::Result<Fixture>;
}

/// Fixtures kept in memory.
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnMemoryFixtures {
    fixtures: Vec<Fixture>,
}

#[cfg(test)]
impl OnMemoryFixtures {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let fixtures = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (input, output))| Fixture::new(i, input, output))
            .collect();
        Self { fixtures }
    }
}

#[cfg(test)]
impl FixtureSource for OnMemoryFixtures {
    fn fixture_count(&self) -> anyhow::Result<usize> {
        Ok(self.fixtures.len())
    }

    fn load_fixture(&self, index: usize) -> anyhow::Result<Fixture> {
        self.fixtures
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No sample at index {}", index))
    }
}
