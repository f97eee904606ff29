//! SQLite storage implementation for knowledge items.

mod model;
mod repository;

pub use model::KnowledgeItemDB;
pub use repository::KnowledgeRepository;
