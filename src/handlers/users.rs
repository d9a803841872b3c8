use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use serde::Deserialize;

use super::{page_context, redirect_home, render, render_with_status};
use crate::{
    error::Result,
    session::{SessionId, SessionManager},
    store::CredentialStore,
    templates::{SigninTemplate, SignupTemplate},
};

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

#[get("/users/signin")]
pub async fn signin_form(
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    let template = SigninTemplate {
        ctx: page_context(&sessions, &token),
        username: String::new(),
        error: None,
    };
    render(&template)
}

#[post("/users/signin")]
pub async fn signin(
    form: web::Form<CredentialsForm>,
    credentials: web::Data<CredentialStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;

    if credentials.verify(&form.username, &form.password)? {
        log::info!("User {} signed in", form.username);
        sessions.sign_in(&token, &form.username);
        sessions.set_message(&token, "Welcome!");
        Ok(redirect_home())
    } else {
        log::warn!("Failed sign-in attempt for user {}", form.username);
        let template = SigninTemplate {
            ctx: page_context(&sessions, &token),
            username: form.username.clone(),
            error: Some("Invalid credentials".to_string()),
        };
        render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &template)
    }
}

#[post("/users/signout")]
pub async fn signout(
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.sign_out(&token);
    sessions.set_message(&token, "You have been signed out.");
    Ok(redirect_home())
}

#[get("/users/signup")]
pub async fn signup_form(
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    let template = SignupTemplate {
        ctx: page_context(&sessions, &token),
        username: String::new(),
        error: None,
    };
    render(&template)
}

#[post("/users/signup")]
pub async fn signup(
    form: web::Form<CredentialsForm>,
    credentials: web::Data<CredentialStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    let username = form.username.trim();
    let password = form.password.trim();

    if username.is_empty() || password.is_empty() {
        let template = SignupTemplate {
            ctx: page_context(&sessions, &token),
            username: username.to_string(),
            error: Some("Please enter a valid username and password".to_string()),
        };
        return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &template);
    }

    credentials.add(username, password)?;
    log::info!("New user {} signed up", username);

    sessions.set_message(
        &token,
        format!("New user {username} has been signed up, please sign in to access!"),
    );
    Ok(redirect_home())
}
