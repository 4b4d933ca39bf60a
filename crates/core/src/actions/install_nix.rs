//! Typed wrapper for `cachix/install-nix-action@v18`.

use super::Action;
use crate::args::{CustomArguments, filter_arguments};
use indexmap::IndexMap;

/// Install Nix on Linux and macOS runners.
///
/// [Action on GitHub](https://github.com/cachix/install-nix-action)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallNixActionV18 {
    /// Installation URL that will contain a script to install Nix
    pub install_url: Option<String>,
    /// Additional installer flags passed to the installer script
    pub install_options: Option<Vec<String>>,
    /// Value for the `NIX_PATH` environment variable
    pub nix_path: Option<String>,
    /// Appended to `/etc/nix/nix.conf`
    pub extra_nix_config: Option<String>,
    /// Inputs the wrapper doesn't model yet
    pub custom_inputs: CustomArguments,
    /// Overrides the pinned `v18`
    pub custom_version: Option<String>,
}

impl Action for InstallNixActionV18 {
    fn uses_string(&self) -> String {
        format!(
            "cachix/install-nix-action@{}",
            self.custom_version.as_deref().unwrap_or("v18")
        )
    }

    fn to_yaml_arguments(&self) -> IndexMap<String, String> {
        filter_arguments(
            [
                ("install_url", self.install_url.clone()),
                (
                    "install_options",
                    self.install_options.as_ref().map(|opts| opts.join("\n")),
                ),
                ("nix_path", self.nix_path.clone()),
                ("extra_nix_config", self.extra_nix_config.clone()),
            ],
            self.custom_inputs
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }
}
