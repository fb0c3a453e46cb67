//! System prompt composer for a personal-website digital twin.
//!
//! `twin-prompt` renders the instruction text that makes a language model
//! speak as a specific person on that person's website. The prompt embeds
//! biographical facts, summary notes, a LinkedIn profile, communication style
//! notes and the current date and time, followed by persona, tone and scope
//! rules.
//!
//! # Library usage
//!
//! ```ignore
//! use twin_prompt::{Facts, PromptComposer, Resources};
//!
//! let facts: Facts = [("full_name", "Jane Doe"), ("name", "Jane")]
//!     .into_iter()
//!     .collect();
//! let resources = Resources::new(facts, "Loves ML.", "Senior Engineer.", "Casual and upbeat.");
//!
//! // Render once per chat session (or per turn) and pass the result as the
//! // leading system message of a chat completion call.
//! let composer = PromptComposer::new(resources);
//! let system_prompt = composer.compose()?;
//! ```
//!
//! Load resources from disk instead:
//!
//! ```ignore
//! use twin_prompt::{ResourceSource, TwinConfig};
//!
//! let resources = TwinConfig::new("resources").resource_dir().load()?;
//! ```
//!
//! # Binary
//!
//! ```sh
//! twin-prompt --resources ./resources
//! twin-prompt --resources ./resources --at "2025-01-02 12:00:00"
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod prompt;
pub mod resources;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT, format_timestamp};
pub use config::TwinConfig;
pub use error::{PromptError, ResourceError};
pub use prompt::{CRITICAL_RULES, PromptComposer, compose_prompt};
pub use resources::{Facts, ResourceDir, ResourceSource, Resources};
