// src/domain/tag/entity.rs
use crate::domain::tag::value_objects::{TagId, TagName};

/// A shared tag record. Created on first use and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}
