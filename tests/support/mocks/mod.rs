// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod time;

pub use store::InMemoryStore;
pub use time::{FixedClock, SteppingClock, fixed_now};
