use thiserror::Error;
use tonic::{Code, Status};

/// Failure reported by an upstream collaborator (catalog, pricing, currency...).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Upstream resource not found: {0}")]
    NotFound(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Unhandled upstream error: {0}")]
    Unhandled(String),
}

impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        let message = status.message().to_string();

        match status.code() {
            Code::Unavailable | Code::DeadlineExceeded => ClientError::Unavailable(message),
            Code::NotFound => ClientError::NotFound(message),
            Code::InvalidArgument | Code::DataLoss => ClientError::InvalidResponse(message),
            code => ClientError::Unhandled(format!("gRPC error: {code} - {message}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_status_maps_to_unavailable() {
        let err = ClientError::from(Status::unavailable("pricing down"));
        assert!(matches!(err, ClientError::Unavailable(msg) if msg == "pricing down"));
    }

    #[test]
    fn unknown_status_is_unhandled() {
        let err = ClientError::from(Status::permission_denied("nope"));
        assert!(matches!(err, ClientError::Unhandled(_)));
    }
}
