use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_FAVORITE_PAIR: &str = "favorites_user_id_article_id_key";
const CNT_FAVORITE_USER: &str = "favorites_user_id_fkey";
const CNT_FAVORITE_ARTICLE: &str = "favorites_article_id_fkey";

/// Translate a sqlx failure into the domain taxonomy. Unique and foreign-key
/// violations become `AlreadyExists` / `NotFound`; everything else is a
/// persistence error.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::AlreadyExists(
                        "article slug already exists. Please choose another title.".into(),
                    ),
                    CNT_TAG_NAME => DomainError::AlreadyExists("tag already exists".into()),
                    CNT_FAVORITE_PAIR => {
                        DomainError::AlreadyExists("article already favorited".into())
                    }
                    CNT_ARTICLE_AUTHOR | CNT_FAVORITE_USER => {
                        DomainError::NotFound("user not found".into())
                    }
                    CNT_FAVORITE_ARTICLE => DomainError::NotFound("article not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::AlreadyExists("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
