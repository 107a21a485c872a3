use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}

impl From<TransactionError<DbErr>> for ServiceError {
    fn from(e: TransactionError<DbErr>) -> Self {
        match e {
            TransactionError::Connection(e) | TransactionError::Transaction(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn client_error_classification() {
        assert!(ServiceError::Validation("limit".into()).is_client_error());
        assert!(ServiceError::Model(ModelError::Validation("author required".into())).is_client_error());
        assert!(!ServiceError::Model(ModelError::Db("gone".into())).is_client_error());
        assert!(!ServiceError::Db("disk full".into()).is_client_error());
    }

    #[test]
    fn transaction_error_keeps_driver_message() {
        let err: ServiceError = TransactionError::Transaction(DbErr::Custom("boom".into())).into();
        assert!(matches!(&err, ServiceError::Db(msg) if msg.contains("boom")));
    }
}
