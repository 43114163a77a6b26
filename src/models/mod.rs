// src/models/mod.rs
pub mod chat;
pub mod drawing;
pub mod file;
pub mod reminder;
pub mod session;

pub use chat::{ChatEntry, Sender};
pub use drawing::{Drawing, DrawingSummary, NewDrawing};
pub use file::{FileSummary, NewFile, UploadedFile};
pub use reminder::{NewReminder, Reminder};
pub use session::{QuizScore, Session, SessionSnapshot, SessionUpdate};

/// Records kept in a per-user collection carry a sequential id
pub trait Identified {
    fn id(&self) -> u32;
}
