//! Leading comment block of generated workflow files.

/// How the comment at the top of the generated file is put together.
///
/// The generated provenance block says the file is generated and where from;
/// custom text can replace it or be placed around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preamble {
    /// Only the generated provenance block
    #[default]
    Generated,
    /// Only the custom text
    Replace(String),
    /// Custom text, then the provenance block
    CustomBefore(String),
    /// The provenance block, then custom text
    CustomAfter(String),
}

impl Preamble {
    /// Compose the final comment block.
    ///
    /// `source_path` is the repository-relative path of the workflow
    /// definition, if known. Empty custom text behaves like
    /// [`Preamble::Generated`] in every mode.
    #[must_use]
    pub fn compose(&self, source_path: Option<&str>) -> String {
        let generated = commentify(&provenance_text(source_path));

        match self {
            Self::Generated => generated,
            Self::Replace(text) if text.is_empty() => generated,
            Self::Replace(text) => commentify(text),
            Self::CustomBefore(text) => commentify(text) + &generated,
            Self::CustomAfter(text) => generated + &commentify(text),
        }
    }
}

/// The text of the provenance block, before commenting.
#[must_use]
pub fn provenance_text(source_path: Option<&str>) -> String {
    match source_path {
        Some(path) => format!(
            "This file was generated using a typed workflow definition ({path}).\n\
             If you want to modify the workflow, please change the definition and regenerate this YAML file.\n\
             Generated with actionsmith"
        ),
        None => "This file was generated using a typed workflow definition.\n\
                 If you want to modify the workflow, please change the definition source and regenerate this YAML file.\n\
                 Generated with actionsmith"
            .to_string(),
    }
}

/// Turn free text into a YAML comment block followed by a blank line.
///
/// Every line gets a `# ` prefix with trailing whitespace trimmed, so an empty
/// line becomes a bare `#`. Empty input yields an empty string.
#[must_use]
pub fn commentify(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut block = text
        .split('\n')
        .map(|line| format!("# {line}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    block.push_str("\n\n");
    block
}
