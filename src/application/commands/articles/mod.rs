// src/application/commands/articles/mod.rs
mod create;
mod favorite;
mod service;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use favorite::FavoriteArticleCommand;
pub use service::ArticleCommandService;
