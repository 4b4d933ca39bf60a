//! Actions a step can invoke with `uses:`.
//!
//! An [`Action`] knows how to print its reference (`owner/name@version`,
//! `./local/path`, `docker://image:tag`) and how to turn its typed inputs into
//! the `with:` argument map. Typed wrappers for specific actions live in the
//! submodules; [`RegularAction`] covers everything else.

mod checkout;
mod install_nix;

pub use checkout::{CheckoutV3, FetchDepth};
pub use install_nix::InstallNixActionV18;

use crate::args::{CustomArguments, filter_arguments};
use indexmap::IndexMap;

/// Something a step can `uses:`.
pub trait Action {
    /// The reference written after `uses:`
    fn uses_string(&self) -> String;

    /// Inputs written under `with:`, absent inputs already dropped
    fn to_yaml_arguments(&self) -> IndexMap<String, String>;
}

/// An action published in a repository, referenced as `owner/name@version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularAction {
    /// Repository owner, e.g. `actions`
    pub owner: String,
    /// Repository name, optionally with a sub-path, e.g. `checkout`
    pub name: String,
    /// Git ref to pin, e.g. `v4`
    pub version: String,
    /// Inputs passed verbatim
    pub inputs: CustomArguments,
}

impl RegularAction {
    /// Create an action reference without inputs
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            version: version.into(),
            inputs: CustomArguments::new(),
        }
    }

    /// Add an input
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(key, value);
        self
    }
}

impl Action for RegularAction {
    fn uses_string(&self) -> String {
        format!("{}/{}@{}", self.owner, self.name, self.version)
    }

    fn to_yaml_arguments(&self) -> IndexMap<String, String> {
        custom_only(&self.inputs)
    }
}

/// An action defined inside the repository itself, e.g. `./.github/actions/setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAction {
    /// Path relative to the repository root, starting with `./`
    pub path: String,
    /// Inputs passed verbatim
    pub inputs: CustomArguments,
}

impl LocalAction {
    /// Reference a local action
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            inputs: CustomArguments::new(),
        }
    }

    /// Add an input
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(key, value);
        self
    }
}

impl Action for LocalAction {
    fn uses_string(&self) -> String {
        self.path.clone()
    }

    fn to_yaml_arguments(&self) -> IndexMap<String, String> {
        custom_only(&self.inputs)
    }
}

/// A container image run as an action, referenced as `docker://image:tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerAction {
    /// Image name including registry, e.g. `alpine` or `ghcr.io/org/tool`
    pub image: String,
    /// Image tag
    pub tag: String,
    /// Inputs passed verbatim
    pub inputs: CustomArguments,
}

impl DockerAction {
    /// Reference a container image
    pub fn new(image: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            tag: tag.into(),
            inputs: CustomArguments::new(),
        }
    }

    /// Add an input
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(key, value);
        self
    }
}

impl Action for DockerAction {
    fn uses_string(&self) -> String {
        format!("docker://{}:{}", self.image, self.tag)
    }

    fn to_yaml_arguments(&self) -> IndexMap<String, String> {
        custom_only(&self.inputs)
    }
}

fn custom_only(inputs: &CustomArguments) -> IndexMap<String, String> {
    filter_arguments(
        std::iter::empty::<(String, Option<String>)>(),
        inputs.iter().map(|(k, v)| (k.clone(), v.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_action_uses_string() {
        let action = RegularAction::new("actions", "setup-node", "v4")
            .with_input("node-version", "20");

        assert_eq!(action.uses_string(), "actions/setup-node@v4");
        assert_eq!(
            action.to_yaml_arguments().get("node-version").map(String::as_str),
            Some("20")
        );
    }

    #[test]
    fn test_local_action_uses_path_verbatim() {
        let action = LocalAction::new("./.github/actions/setup");
        assert_eq!(action.uses_string(), "./.github/actions/setup");
        assert!(action.to_yaml_arguments().is_empty());
    }

    #[test]
    fn test_docker_action_uses_string() {
        let action = DockerAction::new("alpine", "3.20").with_input("args", "echo hi");
        assert_eq!(action.uses_string(), "docker://alpine:3.20");
        assert_eq!(action.to_yaml_arguments().len(), 1);
    }
}
