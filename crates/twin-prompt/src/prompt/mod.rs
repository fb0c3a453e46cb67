//! Prompt assembly: a markdown section builder and the twin composer.
//!
//! 1. **[`PromptBuilder`]** joins a titled preamble and `## Section` blocks,
//!    keeping caller text verbatim.
//! 2. **[`compose_prompt`]** / **[`PromptComposer`]** render the digital-twin
//!    system prompt from [`Resources`](crate::resources::Resources) and a
//!    timestamp.

pub mod builder;
pub mod composer;

pub use builder::{PromptBuilder, labeled_block};
pub use composer::{
    CRITICAL_RULES, FULL_NAME_KEY, NAME_KEY, PERSONAL_INTERESTS_KEY, PROFESSIONAL_TOPICS_KEY,
    PromptComposer, compose_prompt,
};
