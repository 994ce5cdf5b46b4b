use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// Handles Diesel database errors and transforms them into the variants the
/// HTTP layer knows how to present: missing rows become `NotFound`, unique
/// violations become `Duplicate`, everything else stays a `Database` error
/// with the operation context attached.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::Duplicate {
                    entity: info.table_name().unwrap_or("resource").to_string(),
                    field: info
                        .constraint_name()
                        .unwrap_or("unique constraint")
                        .to_string(),
                }
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "get doc");
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_rollback_maps_to_database_error() {
        let err = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "create doc",
        );
        match err {
            AppError::Database { operation, .. } => assert_eq!(operation, "create doc"),
            other => panic!("expected Database error, got {other:?}"),
        }
    }
}
