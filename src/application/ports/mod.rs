// src/application/ports/mod.rs
pub mod health;
pub mod time;
pub mod util;
