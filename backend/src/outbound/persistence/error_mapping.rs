//! Diesel and pool error mapping for the product repository.

use tracing::debug;

use crate::domain::ports::ProductRepositoryError;

use super::pool::PoolError;

/// Pool failures mean the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProductRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors, keeping driver detail out of the returned message.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> ProductRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProductRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            ProductRepositoryError::query("product row violates a check constraint")
        }
        DieselError::QueryBuilderError(_) => ProductRepositoryError::query("database query error"),
        _ => ProductRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::Error as DieselError;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("bad url"))]
    fn pool_errors_become_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            ProductRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn other_diesel_errors_become_query_errors() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            ProductRepositoryError::query("database error")
        );
    }
}
