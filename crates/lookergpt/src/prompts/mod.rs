//! Prompt Catalog
//!
//! Instruction text and worked examples for the explore-URL task. The text
//! lives in `prompts/*.txt` next to the crate manifest and is embedded at
//! build time as reference data.
//!
//! The fine-tuned model learned the task from these examples, so the prompt
//! sent upstream is the bare query. Prepending the catalog text would exceed
//! the model's context window.

use crate::domain::Query;

const INSTRUCTIONS: &str = include_str!("../../prompts/instructions.txt");
const EXAMPLES: &str = include_str!("../../prompts/examples.txt");

/// Context window of the fine-tuned davinci base model, in tokens.
pub const MODEL_CONTEXT_TOKENS: usize = 2049;

/// Static prompt data
#[derive(Debug, Clone, Copy)]
pub struct PromptCatalog {
    instructions: &'static str,
    examples: &'static str,
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptCatalog {
    /// Catalog backed by the embedded prompt files
    pub const fn builtin() -> Self {
        Self {
            instructions: INSTRUCTIONS,
            examples: EXAMPLES,
        }
    }

    pub fn instructions(&self) -> &'static str {
        self.instructions
    }

    pub fn examples(&self) -> &'static str {
        self.examples
    }

    /// Build the prompt text sent upstream for `query`
    pub fn render(&self, query: &Query) -> String {
        query.as_str().to_string()
    }
}

/// Rough token count, ~4 bytes per token.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}
