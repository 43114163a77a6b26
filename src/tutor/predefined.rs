// src/tutor/predefined.rs
//! Short predefined answers for a handful of classroom questions, falling back
//! to another resolver for everything else.

use super::preprocess::{clean_text, words};
use super::{AnswerResolver, ResolveError, SharedResolver};

const NEWTON: &str = "Newton’s Second Law states that Force equals mass times acceleration (F = m × a).";
const PHOTOSYNTHESIS: &str = "Photosynthesis is the process by which green plants use sunlight to make food from carbon dioxide and water.";
const PYTHON_VARIABLE: &str = "In Python, a variable is a name that stores data value. Example: x = 10";
const ARTIFICIAL_INTELLIGENCE: &str = "Artificial Intelligence is a field of computer science that enables machines to mimic human intelligence.";

/// Looks up a predefined answer for an already cleaned question
pub fn predefined_answer(cleaned: &str) -> Option<&'static str> {
    if cleaned.contains("newton") {
        Some(NEWTON)
    } else if cleaned.contains("photosynthesis") {
        Some(PHOTOSYNTHESIS)
    } else if cleaned.contains("python") && cleaned.contains("variable") {
        Some(PYTHON_VARIABLE)
    } else if words(cleaned).any(|w| w == "ai") || cleaned.contains("artificial intelligence") {
        // whole word only, "explain" or "paint" must not match
        Some(ARTIFICIAL_INTELLIGENCE)
    } else {
        None
    }
}

pub struct PredefinedResolver {
    fallback: SharedResolver,
}

impl PredefinedResolver {
    pub fn new(fallback: SharedResolver) -> Self {
        Self { fallback }
    }
}

impl AnswerResolver for PredefinedResolver {
    fn name(&self) -> &'static str {
        "predefined"
    }

    fn resolve(&self, question: &str) -> Result<String, ResolveError> {
        match predefined_answer(&clean_text(question)) {
            Some(answer) => Ok(answer.to_string()),
            None => self.fallback.resolve(question),
        }
    }
}
