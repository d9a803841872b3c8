#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::from_fn,
    test, web, App, Error,
};
use tempfile::TempDir;

use docshelf::handlers;
use docshelf::middleware::session_middleware;
use docshelf::session::SessionManager;
use docshelf::store::{CredentialStore, DocumentStore};

/// Temp-backed stores plus a session manager, one set per test.
pub struct TestSite {
    pub documents: DocumentStore,
    pub credentials: CredentialStore,
    pub sessions: SessionManager,
    credentials_path: PathBuf,
    _dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_dir = dir.path().join("data");
        fs::create_dir_all(&data_dir).expect("failed to create data dir");
        let credentials_path = dir.path().join("users.yml");
        fs::write(&credentials_path, "").expect("failed to seed credential file");

        Self {
            documents: DocumentStore::new(&data_dir),
            credentials: CredentialStore::new(&credentials_path),
            sessions: SessionManager::new(),
            credentials_path,
            _dir: dir,
        }
    }

    pub fn create_document(&self, name: &str, content: &str) {
        self.documents
            .write(name, content)
            .expect("failed to write fixture document");
    }

    /// Seeds a credential directly, with a low bcrypt cost to keep tests
    /// fast.
    pub fn add_user(&self, username: &str, password: &str) {
        let hash = bcrypt::hash(password, 4).expect("failed to hash password");
        let mut users = self
            .credentials
            .load()
            .expect("failed to load credential file");
        users.insert(username.to_string(), hash);
        let raw = serde_yaml::to_string(&users).expect("failed to serialize credentials");
        fs::write(&self.credentials_path, raw).expect("failed to write credential file");
    }
}

pub fn app(
    site: &TestSite,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(site.documents.clone()))
        .app_data(web::Data::new(site.credentials.clone()))
        .app_data(web::Data::new(site.sessions.clone()))
        .wrap(from_fn(session_middleware))
        .configure(handlers::routes)
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == "session_id")
        .map(|cookie| cookie.into_owned())
        .expect("response should carry a session cookie")
}

pub async fn read_body_string<B>(resp: ServiceResponse<B>) -> String
where
    B: MessageBody,
{
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
