//! User-facing prompt seam.
//!
//! # Responsibility
//! - Let core logic surface a blocking acknowledgement dialog without
//!   knowing how the UI renders one.
//!
//! # Invariants
//! - `show` blocks only as long as the sink implementation does; core
//!   treats it as synchronous acknowledgement.
//! - Log output stays metadata-only; prompt text never includes
//!   user-entered data beyond the fixed message.

use log::{info, warn};

/// Visual treatment requested for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSeverity {
    Info,
    Warning,
}

/// A blocking acknowledgement dialog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    pub severity: PromptSeverity,
}

impl Prompt {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: PromptSeverity::Warning,
        }
    }
}

/// UI collaborator that presents prompts to the user.
pub trait PromptSink {
    /// Presents the prompt and returns once it is acknowledged.
    fn show(&self, prompt: &Prompt);
}

/// Default sink that routes prompts to the log.
///
/// Used where no real UI is attached, e.g. the CLI probe and headless
/// integration work.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPromptSink;

impl PromptSink for LogPromptSink {
    fn show(&self, prompt: &Prompt) {
        match prompt.severity {
            PromptSeverity::Warning => warn!(
                "event=user_prompt module=viewmodel severity=warning title={}",
                prompt.title
            ),
            PromptSeverity::Info => info!(
                "event=user_prompt module=viewmodel severity=info title={}",
                prompt.title
            ),
        }
    }
}
