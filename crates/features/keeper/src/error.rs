use std::borrow::Cow;
use zoo_database::DatabaseError;

/// A specialized [`KeeperError`] enum of this crate.
#[zoo_derive::zoo_error]
pub enum KeeperError {
    /// The animal or habitat named in the request does not exist.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Duplicate names, incompatible terrain or an occupied habitat.
    #[error("Conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Malformed or blank input.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal keeper error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl KeeperError {
    pub(crate) fn animal_not_found(name: &str) -> Self {
        Self::NotFound { message: format!("animal '{name}'").into(), context: None }
    }

    pub(crate) fn habitat_not_found(name: &str) -> Self {
        Self::NotFound { message: format!("habitat '{name}'").into(), context: None }
    }

    pub(crate) fn blank_name(what: &'static str) -> Self {
        Self::Validation { message: format!("{what} name must not be blank").into(), context: None }
    }
}

impl From<DatabaseError> for KeeperError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Conflict { message, context } => Self::Conflict {
                message: format!("'{message}' already exists").into(),
                context,
            },
            DatabaseError::Validation { message, context } => Self::Validation { message, context },
        }
    }
}

#[cfg(feature = "server")]
mod http {
    use super::KeeperError;
    use axum::extract::rejection::{JsonRejection, QueryRejection, StringRejection};
    use axum::response::{IntoResponse, Response};
    use tracing::{debug, error};
    use zoo_kernel::server::{ApiStateError, ErrorBody, ErrorCode};

    impl KeeperError {
        #[must_use]
        pub const fn code(&self) -> ErrorCode {
            match self {
                Self::NotFound { .. } => ErrorCode::NotFound,
                Self::Conflict { .. } => ErrorCode::Conflict,
                Self::Validation { .. } => ErrorCode::Validation,
                Self::Internal { .. } => ErrorCode::Internal,
            }
        }
    }

    impl IntoResponse for KeeperError {
        fn into_response(self) -> Response {
            let code = self.code();
            if code == ErrorCode::Internal {
                error!(error = %self, "Keeper request failed");
            } else {
                debug!(error = %self, ?code, "Keeper request rejected");
            }
            ErrorBody::new(code, self.to_string()).into_response()
        }
    }

    impl From<ApiStateError> for KeeperError {
        fn from(err: ApiStateError) -> Self {
            Self::Internal { message: err.to_string().into(), context: None }
        }
    }

    impl From<JsonRejection> for KeeperError {
        fn from(rejection: JsonRejection) -> Self {
            Self::Validation { message: rejection.body_text().into(), context: Some("body".into()) }
        }
    }

    impl From<QueryRejection> for KeeperError {
        fn from(rejection: QueryRejection) -> Self {
            Self::Validation { message: rejection.body_text().into(), context: Some("query".into()) }
        }
    }

    impl From<StringRejection> for KeeperError {
        fn from(rejection: StringRejection) -> Self {
            Self::Validation { message: rejection.body_text().into(), context: Some("body".into()) }
        }
    }
}
