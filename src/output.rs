//! Output panel - the single render target shared by every action
//!
//! Presentation functions take the panel explicitly and replace its whole
//! content. Whichever exchange resolves last is what the user sees.

use chrono::{DateTime, Utc};

use crate::forms::ValidationError;
use crate::models::{Action, FailureCategory, Outcome, Post};

/// Message tone, drawn green or red
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// One piece of rendered output
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputBlock {
    Heading(String),
    Paragraph(String),
    Notice { tone: Tone, text: String },
    /// Pretty-printed JSON
    Preformatted(String),
}

#[derive(Clone, Debug, Default)]
pub struct OutputPanel {
    blocks: Vec<OutputBlock>,
    updated_at: Option<DateTime<Utc>>,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[OutputBlock] {
        &self.blocks
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Overwrite the panel
    pub fn replace(&mut self, blocks: Vec<OutputBlock>) {
        self.blocks = blocks;
        self.updated_at = Some(Utc::now());
    }

    /// All block text, one block per line
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                OutputBlock::Heading(text)
                | OutputBlock::Paragraph(text)
                | OutputBlock::Preformatted(text)
                | OutputBlock::Notice { text, .. } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn notice(tone: Tone, text: impl Into<String>) -> OutputBlock {
    OutputBlock::Notice {
        tone,
        text: text.into(),
    }
}

/// Turn an already-stringified error into a user-facing phrase.
///
/// Plain substring checks, first match wins.
pub fn classify_fetch_error(message: &str) -> String {
    if message.contains("NetworkError") {
        "Network error: Please check your internet connection.".to_string()
    } else if message.contains("404") {
        "Error 404: Resource not found.".to_string()
    } else if message.contains("500") {
        "Error 500: Server error. Please try again later.".to_string()
    } else {
        format!("Unexpected error: {}", message)
    }
}

/// Render a rejected form
pub fn render_validation_error(panel: &mut OutputPanel, error: &ValidationError) {
    panel.replace(vec![notice(Tone::Error, error.to_string())]);
}

/// Render the outcome of an action
pub fn render_outcome(panel: &mut OutputPanel, action: &Action, outcome: &Outcome) {
    let blocks = match outcome {
        Outcome::Success { decoded_body, .. } => success_blocks(action, decoded_body),
        Outcome::Failure { category, message } => {
            vec![notice(Tone::Error, failure_text(action, *category, message))]
        }
    };
    panel.replace(blocks);
}

fn success_blocks(action: &Action, body: &serde_json::Value) -> Vec<OutputBlock> {
    match action {
        Action::FetchPost | Action::FetchPostLegacy => {
            match serde_json::from_value::<Post>(body.clone()) {
                Ok(post) => vec![
                    OutputBlock::Heading(post.title),
                    OutputBlock::Paragraph(post.body),
                ],
                Err(e) => vec![notice(Tone::Error, format!("Error: {}", e))],
            }
        }
        Action::CreatePost => vec![
            notice(Tone::Success, "Post created successfully!"),
            OutputBlock::Preformatted(pretty(body)),
        ],
        Action::UpdatePost => vec![
            notice(Tone::Success, "Post updated successfully!"),
            OutputBlock::Preformatted(pretty(body)),
        ],
        Action::DeletePost { id } => vec![notice(
            Tone::Success,
            format!("Post with ID {} deleted successfully!", id),
        )],
    }
}

// Legacy-style actions report status text or a bare "Network Error";
// only Create goes through the classifier.
fn failure_text(action: &Action, category: FailureCategory, message: &str) -> String {
    match action {
        Action::CreatePost => classify_fetch_error(message),
        Action::FetchPostLegacy | Action::UpdatePost => match category {
            FailureCategory::Network => "Network Error".to_string(),
            FailureCategory::HttpStatus | FailureCategory::Parse => format!("Error: {}", message),
        },
        Action::FetchPost | Action::DeletePost { .. } => format!("Error: {}", message),
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
