//! Typed wrapper for `actions/checkout@v3`.

use super::Action;
use crate::args::{CustomArguments, filter_arguments};
use indexmap::IndexMap;

/// How much history to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDepth {
    /// All history for all branches and tags (`0`)
    Infinite,
    /// The given number of commits
    Quantity(u32),
}

impl FetchDepth {
    fn as_argument(self) -> String {
        match self {
            Self::Infinite => "0".to_string(),
            Self::Quantity(depth) => depth.to_string(),
        }
    }
}

/// Check out a repository under `$GITHUB_WORKSPACE`.
///
/// [Action on GitHub](https://github.com/actions/checkout)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutV3 {
    /// Repository name with owner, defaults to the workflow's repository
    pub repository: Option<String>,
    /// Branch, tag or SHA to check out
    pub r#ref: Option<String>,
    /// Personal access token used to fetch the repository
    pub token: Option<String>,
    /// SSH key used to fetch the repository
    pub ssh_key: Option<String>,
    /// Whether to keep the token in the local git config
    pub persist_credentials: Option<bool>,
    /// Relative path under `$GITHUB_WORKSPACE` to place the repository
    pub path: Option<String>,
    /// Whether to run `git clean -ffdx && git reset --hard HEAD` before fetching
    pub clean: Option<bool>,
    /// Number of commits to fetch
    pub fetch_depth: Option<FetchDepth>,
    /// Whether to download Git-LFS files
    pub lfs: Option<bool>,
    /// Whether to check out submodules
    pub submodules: Option<bool>,
    /// Inputs the wrapper doesn't model yet
    pub custom_inputs: CustomArguments,
    /// Overrides the pinned `v3`
    pub custom_version: Option<String>,
}

impl CheckoutV3 {
    /// Check out with every input left at the action's default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch depth
    #[must_use]
    pub fn with_fetch_depth(mut self, depth: FetchDepth) -> Self {
        self.fetch_depth = Some(depth);
        self
    }

    /// Set the ref to check out
    #[must_use]
    pub fn with_ref(mut self, r#ref: impl Into<String>) -> Self {
        self.r#ref = Some(r#ref.into());
        self
    }
}

impl Action for CheckoutV3 {
    fn uses_string(&self) -> String {
        format!(
            "actions/checkout@{}",
            self.custom_version.as_deref().unwrap_or("v3")
        )
    }

    fn to_yaml_arguments(&self) -> IndexMap<String, String> {
        filter_arguments(
            [
                ("repository", self.repository.clone()),
                ("ref", self.r#ref.clone()),
                ("token", self.token.clone()),
                ("ssh-key", self.ssh_key.clone()),
                (
                    "persist-credentials",
                    self.persist_credentials.map(|b| b.to_string()),
                ),
                ("path", self.path.clone()),
                ("clean", self.clean.map(|b| b.to_string())),
                ("fetch-depth", self.fetch_depth.map(FetchDepth::as_argument)),
                ("lfs", self.lfs.map(|b| b.to_string())),
                ("submodules", self.submodules.map(|b| b.to_string())),
            ],
            self.custom_inputs
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }
}
