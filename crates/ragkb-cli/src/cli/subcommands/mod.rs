mod document;
mod library;

pub use document::DocumentCommands;
pub use library::LibraryCommands;
