// src/domain/article/filter.rs
use crate::domain::tag::TagName;
use crate::domain::user::UserId;

/// Independently optional listing criteria as supplied by a caller.
#[derive(Debug, Clone, Default)]
pub struct ArticleCriteria {
    /// `Some(vec![])` matches nothing; `None` leaves authorship unrestricted.
    pub author_ids: Option<Vec<UserId>>,
    pub favorited_by: Option<UserId>,
    pub tag: Option<TagName>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One conjunct of a listing filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticlePredicate {
    /// Unsatisfiable; produced by an explicitly empty author set.
    Never,
    AuthorIn(Vec<UserId>),
    FavoritedBy(UserId),
    TaggedWith(TagName),
}

/// Conjunction of predicates plus the paging window. Results are always
/// ordered newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    predicates: Vec<ArticlePredicate>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleFilter {
    pub fn compose(criteria: ArticleCriteria) -> Self {
        let ArticleCriteria {
            author_ids,
            favorited_by,
            tag,
            limit,
            offset,
        } = criteria;

        let mut predicates = Vec::new();

        match author_ids {
            Some(ids) if ids.is_empty() => predicates.push(ArticlePredicate::Never),
            Some(ids) => predicates.push(ArticlePredicate::AuthorIn(ids)),
            None => {}
        }

        if let Some(user_id) = favorited_by {
            predicates.push(ArticlePredicate::FavoritedBy(user_id));
        }

        if let Some(tag) = tag {
            predicates.push(ArticlePredicate::TaggedWith(tag));
        }

        Self {
            predicates,
            limit,
            offset,
        }
    }

    /// A filter that matches no article at all.
    pub fn nothing() -> Self {
        Self {
            predicates: vec![ArticlePredicate::Never],
            limit: None,
            offset: None,
        }
    }

    pub fn predicates(&self) -> &[ArticlePredicate] {
        &self.predicates
    }

    pub fn is_unsatisfiable(&self) -> bool {
        self.predicates.contains(&ArticlePredicate::Never)
    }
}
