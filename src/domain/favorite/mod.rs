// src/domain/favorite/mod.rs
pub mod repository;

pub use repository::FavoriteRepository;
