//! Content services: paging defaults, caching and dictionary dispatch on top of the repositories

mod content;
mod dictionary;
mod health;
mod sentence;
mod story;
mod verb;

pub use content::ContentService;
pub use dictionary::DictionaryService;
pub use health::{HealthService, HealthStatus, SERVICE_NAME};
pub use sentence::SentenceService;
pub use story::StoryService;
pub use verb::VerbService;
