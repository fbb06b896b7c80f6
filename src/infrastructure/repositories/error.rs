use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_NEWS_SLUG: &str = "news_slug_key";
const CNT_NEWS_CATEGORY: &str = "news_category_id_fkey";
const CNT_NEWS_AUTHOR: &str = "news_author_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_ROLE: &str = "users_role_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG | CNT_NEWS_SLUG => {
                        DomainError::DuplicateSlug(db_err.message().to_string())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    // Inserts cite a missing category; deletes cite news still pointing at one.
                    CNT_NEWS_CATEGORY => {
                        if db_err.message().starts_with("update or delete") {
                            DomainError::Conflict("category still has news".into())
                        } else {
                            DomainError::Validation("category does not exist".into())
                        }
                    }
                    CNT_NEWS_AUTHOR => DomainError::Validation("author does not exist".into()),
                    CNT_USER_ROLE => DomainError::Validation("unknown role".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::Conflict("referenced record constraint".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
