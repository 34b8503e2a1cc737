pub mod crawl;
pub mod dispatch;
pub mod document;
pub mod graph;
pub mod library;
pub mod upload;
