pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use filter::{ArticleCriteria, ArticleFilter, ArticlePredicate};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle};
