pub mod articles;
pub mod tags;

pub use articles::{ArticleDetails, ArticleDto, AuthorDto};
pub use tags::TagDto;
