// src/tutor/mod.rs
//! Answer resolution for the `/ask` endpoint

use std::sync::Arc;
use thiserror::Error;

use crate::config::AnswerEngine;

pub mod knowledge_base;
pub mod predefined;
pub mod preprocess;

pub use knowledge_base::KnowledgeBaseResolver;
pub use predefined::PredefinedResolver;

pub const APOLOGY: &str = "I apologize, but I'm having trouble processing your question right now. \
Please try again with a different question about your learning topic.";

#[derive(Error, Debug, PartialEq)]
pub enum ResolveError {
    #[error("Answer engine unavailable: {0}")]
    Unavailable(String),
}

/// Maps a question to an answer
pub trait AnswerResolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve(&self, question: &str) -> Result<String, ResolveError>;
}

pub type SharedResolver = Arc<dyn AnswerResolver>;

/// Resolves a question, replacing any failure with a fixed apology
pub fn resolve_or_apologize(resolver: &dyn AnswerResolver, question: &str) -> String {
    match resolver.resolve(question) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!(resolver = resolver.name(), error = %e, "Error in AI response");
            APOLOGY.to_string()
        }
    }
}

pub fn build_resolver(engine: AnswerEngine) -> SharedResolver {
    match engine {
        AnswerEngine::KnowledgeBase => Arc::new(KnowledgeBaseResolver::new()),
        AnswerEngine::Predefined => {
            Arc::new(PredefinedResolver::new(Arc::new(KnowledgeBaseResolver::new())))
        }
    }
}
