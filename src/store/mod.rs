pub mod credentials;
pub mod documents;

pub use credentials::CredentialStore;
pub use documents::{ContentKind, DocumentStore};
