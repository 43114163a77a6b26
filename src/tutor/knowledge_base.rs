// src/tutor/knowledge_base.rs
//! Keyword cascade: greeting, knowledge base topic, subject keyword, fallback.
//! Rule order decides which answer wins when several match.

use super::{AnswerResolver, ResolveError};

pub const GREETING_TOKENS: &[&str] = &["hello", "hi", "hey", "greetings"];

pub const GREETING_REPLY: &str = "Hello! I'm your AI Tutoring Bot, here to help you learn and explore various subjects. \
I can assist with science, math, programming, history, and much more. What would you like to learn about today?";

/// Topics in match order
pub const KNOWLEDGE_BASE: &[(&str, &str)] = &[
    (
        "photosynthesis",
        "Photosynthesis is the process by which plants use sunlight, water, and carbon dioxide to produce oxygen and energy in the form of sugar.",
    ),
    (
        "python",
        "Python is a high-level, interpreted programming language known for its simple syntax and versatility. It's great for beginners!",
    ),
    (
        "gravity",
        "Gravity is a force that attracts objects toward each other. On Earth, it gives weight to physical objects and causes them to fall toward the ground.",
    ),
    (
        "mitosis",
        "Mitosis is a process of cell division that results in two identical daughter cells. It has phases: prophase, metaphase, anaphase, and telophase.",
    ),
    (
        "algebra",
        "Algebra is a branch of mathematics dealing with symbols and the rules for manipulating those symbols to solve equations.",
    ),
    (
        "water cycle",
        "The water cycle describes how water evaporates from the surface, rises into the atmosphere, cools and condenses into clouds, and falls back as precipitation.",
    ),
    (
        "france",
        "The capital of France is Paris, known for the Eiffel Tower and rich cultural history.",
    ),
];

pub const SUBJECTS: &[(&str, &[&str])] = &[
    ("math", &["math", "mathematics", "algebra", "geometry", "calculus"]),
    ("science", &["science", "physics", "chemistry", "biology"]),
    ("programming", &["programming", "coding", "python", "javascript", "java"]),
    ("history", &["history", "historical", "past events"]),
    ("geography", &["geography", "countries", "capitals"]),
];

pub const SUPPORTED_SUBJECTS: &[&str] = &["Math", "Science", "Programming", "History", "Geography"];

struct Question<'a> {
    original: &'a str,
    lower: String,
}

type Rule = fn(&Question<'_>) -> Option<String>;

const RULES: &[Rule] = &[greeting, knowledge_base_topic, subject_keyword];

fn greeting(question: &Question<'_>) -> Option<String> {
    GREETING_TOKENS
        .iter()
        .any(|token| question.lower.contains(token))
        .then(|| GREETING_REPLY.to_string())
}

fn knowledge_base_topic(question: &Question<'_>) -> Option<String> {
    KNOWLEDGE_BASE
        .iter()
        .find(|(topic, _)| question.lower.contains(topic))
        .map(|(topic, explanation)| {
            format!(
                "**{}**: {}\n\nWould you like me to explain any specific aspect of {} in more detail?",
                title_case(topic),
                explanation,
                topic
            )
        })
}

fn subject_keyword(question: &Question<'_>) -> Option<String> {
    SUBJECTS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| question.lower.contains(k)))
        .map(|(subject, _)| {
            format!(
                "I'd be happy to help you with {subject}! Could you be more specific about what you'd like to learn? \
For example, you could ask about specific concepts, theories, or applications in {subject}."
            )
        })
}

fn fallback(question: &Question<'_>) -> String {
    format!(
        "Thank you for your question about '{}'. I'm designed to help students learn various subjects. \
I can provide explanations, examples, and guidance on topics like:\n\n\
• Mathematics (algebra, geometry, calculus)\n\
• Science (physics, chemistry, biology)\n\
• Programming (Python, web development)\n\
• History and social studies\n\
• Language arts\n\n\
Could you tell me which subject area you're most interested in, or ask me a more specific question?",
        question.original
    )
}

/// Capitalizes the first letter of every word ("water cycle" -> "Water Cycle")
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KnowledgeBaseResolver;

impl KnowledgeBaseResolver {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerResolver for KnowledgeBaseResolver {
    fn name(&self) -> &'static str {
        "knowledge_base"
    }

    fn resolve(&self, question: &str) -> Result<String, ResolveError> {
        let question = Question {
            original: question,
            lower: question.to_lowercase(),
        };

        let answer = RULES
            .iter()
            .find_map(|rule| rule(&question))
            .unwrap_or_else(|| fallback(&question));
        Ok(answer)
    }
}
