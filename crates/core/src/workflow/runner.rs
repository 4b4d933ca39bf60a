//! Runner selection for jobs.

use std::fmt;

/// Where a job runs (`runs-on:`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerType {
    /// `ubuntu-latest`
    UbuntuLatest,
    /// `windows-latest`
    WindowsLatest,
    /// `macos-latest`
    MacOsLatest,
    /// Any single runner label, e.g. `self-hosted` or `ubuntu-22.04`
    Label(String),
    /// Multiple labels; the job runs on a runner matching all of them
    Labels(Vec<String>),
}

impl RunnerType {
    /// Convenience constructor for a custom label
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// The labels this runner selects, in declaration order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::UbuntuLatest => vec!["ubuntu-latest"],
            Self::WindowsLatest => vec!["windows-latest"],
            Self::MacOsLatest => vec!["macos-latest"],
            Self::Label(label) => vec![label.as_str()],
            Self::Labels(labels) => labels.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for RunnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(", "))
    }
}
