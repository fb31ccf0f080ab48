use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("the database returned no {0} record")]
    MissingRecord(&'static str),
    #[error("a unique index on {0} rejected the record")]
    Duplicate(&'static str),
}

impl RepositoryError {
    /// Maps a write error on `table`, singling out unique index violations.
    pub fn on_write(table: &'static str) -> impl Fn(surrealdb::Error) -> RepositoryError {
        move |error| {
            if error.to_string().contains("already contains") {
                RepositoryError::Duplicate(table)
            } else {
                RepositoryError::Database(error)
            }
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
