// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod favorite;
pub mod tag;
pub mod user;
