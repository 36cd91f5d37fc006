pub mod reference;
pub mod scanner;

pub use reference::Reference;
pub use scanner::{search, SearchOutcome, VerseMatch};
