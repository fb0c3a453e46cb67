//! Markdown section builder for the twin prompt.
//!
//! [`PromptBuilder`] assembles a titled preamble followed by `## Heading`
//! sections, joined with blank lines. Unlike a general-purpose prompt
//! builder, it never trims or drops caller-supplied text: resource bodies are
//! embedded exactly as given, including when they are empty.

/// Builder for the multi-section twin prompt.
///
/// # Example
///
/// ```
/// use twin_prompt::prompt::PromptBuilder;
///
/// let prompt = PromptBuilder::titled("Your Role", "You are a digital twin.")
///     .section("Important Context", "Some context")
///     .build();
///
/// assert!(prompt.starts_with("# Your Role\n\nYou are a digital twin."));
/// assert!(prompt.contains("## Important Context\n\nSome context"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    parts: Vec<String>,
}

impl PromptBuilder {
    /// Start a prompt with a top-level `# title` heading and a preamble.
    pub fn titled(title: &str, preamble: impl AsRef<str>) -> Self {
        Self {
            parts: vec![format!("# {title}\n\n{}", preamble.as_ref())],
        }
    }

    /// Append a section under a `## heading`.
    pub fn section(mut self, heading: &str, content: impl AsRef<str>) -> Self {
        self.parts
            .push(format!("## {heading}\n\n{}", content.as_ref()));
        self
    }

    /// Append text without a heading.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        self.parts.push(content.into());
        self
    }

    /// Join everything with blank lines.
    pub fn build(self) -> String {
        self.parts.join("\n\n")
    }
}

/// Render a lead-in line followed by a verbatim body.
///
/// Used for the resource blocks in the context section: the body is copied
/// byte-for-byte, so an empty body yields the lead-in line and a trailing
/// newline.
pub fn labeled_block(label: &str, body: &str) -> String {
    format!("{label}\n{body}")
}
