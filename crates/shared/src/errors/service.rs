use crate::errors::{client::ClientError, repository::RepositoryError};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("No ID is given")]
    MissingId,

    #[error("Order item was not found: {0}")]
    OrderItemNotFound(i32),

    #[error("No catalog data for good price: {0}")]
    GoodPriceNotFound(i32),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(move |e| format!("{field}: {}", e.code))
                    .collect::<Vec<_>>()
            })
            .collect();

        ServiceError::Validation(messages)
    }
}
