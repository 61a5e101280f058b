pub mod dictionary;
pub mod page;
pub mod sentence;
pub mod story;
pub mod verb;

pub use dictionary::{DictionaryAqelei, DictionaryEntry, DictionaryType, DictionaryWaryaghri};
pub use page::{Page, PageLimits, PageRequest, Pagination};
pub use sentence::Sentence;
pub use story::Story;
pub use verb::{Conjugations, Participes, Verb};
