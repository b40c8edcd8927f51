// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::tag::TagName;
use crate::domain::user::Username;

/// Domain service deriving article slugs and normalized tag names.
///
/// Both derivations go through the same [`SlugGenerator`], so a tag name and
/// an article slug built from the same text normalize identically. The
/// author's username is part of every slug, which keeps identical titles by
/// different authors apart.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn make_slug(&self, owner: &Username, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let raw = format!("{} {}", owner.as_str(), title.as_str());
        ArticleSlug::new(self.generator.slugify(&raw))
    }

    /// Normalize a raw tag label. `None` when nothing survives normalization.
    pub fn make_tag_name(&self, raw: &str) -> Option<TagName> {
        TagName::new(self.generator.slugify(raw)).ok()
    }
}
