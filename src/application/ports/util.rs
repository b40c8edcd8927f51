// src/application/ports/util.rs

/// Text normalization used for slugs and tag names: lowercase ASCII,
/// runs of whitespace and punctuation become a single `-`, other
/// characters are transliterated or dropped.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
