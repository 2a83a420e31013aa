use std::fmt;
use std::str::FromStr;

/// The operation selected with `--tool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Flatten a text file onto one line and summarize it.
    OneLine,
}

impl Tool {
    pub const ALL: &'static [Self] = &[Self::OneLine];

    pub const fn name(self) -> &'static str {
        match self {
            Self::OneLine => "one_line",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| anyhow::anyhow!("The tool type specified could not be handled"))
    }
}
