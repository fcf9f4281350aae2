use crate::errors::{client::ClientError, repository::RepositoryError, service::ServiceError};
use thiserror::Error;
use tonic::Status;

#[derive(Debug, Error)]
pub enum AppErrorGrpc {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

impl From<AppErrorGrpc> for Status {
    fn from(err: AppErrorGrpc) -> Self {
        match err {
            AppErrorGrpc::Service(service_err) => match service_err {
                ServiceError::MissingId => Status::invalid_argument("No ID is given"),

                ServiceError::Validation(errors) => {
                    Status::invalid_argument(format!("Validation failed: {errors:#?}"))
                }

                ServiceError::OrderItemNotFound(id) => {
                    Status::not_found(format!("Order item {id} was not found"))
                }

                ServiceError::GoodPriceNotFound(id) => {
                    Status::not_found(format!("Good price {id} was not found in catalog"))
                }

                ServiceError::Repo(repo_err) => match repo_err {
                    RepositoryError::NotFound => Status::not_found("Not found"),
                    RepositoryError::MissingId(msg) => Status::invalid_argument(msg),
                    RepositoryError::AlreadyExists(msg) => Status::already_exists(msg),
                    RepositoryError::ForeignKey(msg) => {
                        Status::failed_precondition(format!("Foreign key constraint: {msg}"))
                    }
                    RepositoryError::Sqlx(_) => Status::internal("Database error"),
                },

                ServiceError::Client(client_err) => match client_err {
                    ClientError::Unavailable(msg) => {
                        Status::unavailable(format!("Upstream unavailable: {msg}"))
                    }
                    ClientError::NotFound(msg) => Status::not_found(msg),
                    ClientError::InvalidResponse(msg) | ClientError::Unhandled(msg) => {
                        Status::internal(msg)
                    }
                },
            },
        }
    }
}
