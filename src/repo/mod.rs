//! SQL access for the employee directory and the attendance log.

pub mod attendance;
pub mod employee;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not found")]
    NotFound,

    #[error("duplicate employee code")]
    Duplicate,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Maps a UNIQUE constraint failure to `Duplicate`, everything else stays a database error.
pub(crate) fn map_unique_violation(e: sqlx::Error) -> RepoError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => RepoError::Duplicate,
        _ => RepoError::Database(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    #[actix_web::test]
    async fn unique_constraint_failure_maps_to_duplicate() {
        let pool = test_pool().await;
        let insert = "INSERT INTO employees (name, employee_id, position) VALUES (?, ?, ?)";
        sqlx::query(insert)
            .bind("Ali")
            .bind("10001")
            .bind("Engineer")
            .execute(&pool)
            .await
            .unwrap();

        // skips the pre-insert lookup, so only the constraint catches it
        let err = sqlx::query(insert)
            .bind("Sara")
            .bind("10001")
            .bind("Designer")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(matches!(map_unique_violation(err), RepoError::Duplicate));
    }

    #[actix_web::test]
    async fn other_failures_stay_database_errors() {
        let pool = test_pool().await;

        let err = sqlx::query("SELECT * FROM no_such_table")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(matches!(map_unique_violation(err), RepoError::Database(_)));
    }
}
