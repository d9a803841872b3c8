use actix_web::{
    error::ResponseError,
    http::{header, StatusCode},
    HttpResponse,
};

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("{0} does not exist")]
    DocumentNotFound(String),

    #[error("Please enter a valid filename ending with '.txt' or '.md'")]
    InvalidFilename,

    #[error("You must be signed in to do that.")]
    Unauthenticated,

    #[error("Credential file error: {0}")]
    CredentialFile(#[from] serde_yaml::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for CmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            CmsError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
            CmsError::InvalidFilename => StatusCode::UNPROCESSABLE_ENTITY,
            CmsError::Unauthenticated => StatusCode::FOUND,
            CmsError::CredentialFile(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CmsError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CmsError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CmsError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The auth gate has already left its flash message in the session.
            CmsError::Unauthenticated => HttpResponse::Found()
                .insert_header((header::LOCATION, "/"))
                .finish(),
            _ => HttpResponse::build(self.status_code()).body(self.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;
