use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use pulldown_cmark::{html, Parser};
use serde::Deserialize;

use super::{page_context, redirect_home, render, render_with_status};
use crate::{
    error::{CmsError, Result},
    session::{SessionId, SessionManager},
    store::{ContentKind, DocumentStore},
    templates::{DocumentTemplate, EditTemplate, IndexTemplate, NewDocumentTemplate},
};

#[derive(Debug, Deserialize)]
pub struct NewDocumentForm {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub content: String,
}

fn render_markdown(text: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(text));
    out
}

#[get("/")]
pub async fn index(
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    let template = IndexTemplate {
        ctx: page_context(&sessions, &token),
        files: documents.list()?,
    };
    render(&template)
}

#[get("/new")]
pub async fn new_document_form(
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.require_signed_in(&token)?;

    let template = NewDocumentTemplate {
        ctx: page_context(&sessions, &token),
        filename: String::new(),
        error: None,
    };
    render(&template)
}

#[post("/new")]
pub async fn create_document(
    form: web::Form<NewDocumentForm>,
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.require_signed_in(&token)?;

    match documents.create(&form.filename, "") {
        Ok(name) => {
            log::info!("Created document {}", name);
            sessions.set_message(&token, format!("{name} has been created."));
            Ok(redirect_home())
        }
        Err(err @ CmsError::InvalidFilename) => {
            let template = NewDocumentTemplate {
                ctx: page_context(&sessions, &token),
                filename: form.filename.clone(),
                error: Some(err.to_string()),
            };
            render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &template)
        }
        Err(err) => Err(err),
    }
}

#[get("/{filename}")]
pub async fn view_document(
    path: web::Path<String>,
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    let filename = path.into_inner();

    match documents.read(&filename) {
        Ok((content, ContentKind::Plain)) => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(content)),
        Ok((content, ContentKind::Markdown)) => {
            let template = DocumentTemplate {
                ctx: page_context(&sessions, &token),
                rendered: render_markdown(&content),
                filename,
            };
            render(&template)
        }
        Err(err @ CmsError::DocumentNotFound(_)) => {
            sessions.set_message(&token, err.to_string());
            Ok(redirect_home())
        }
        Err(err) => Err(err),
    }
}

#[get("/{filename}/edit")]
pub async fn edit_form(
    path: web::Path<String>,
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.require_signed_in(&token)?;
    let filename = path.into_inner();

    match documents.read(&filename) {
        Ok((content, _)) => {
            let template = EditTemplate {
                ctx: page_context(&sessions, &token),
                content: content.trim().to_string(),
                filename,
            };
            render(&template)
        }
        Err(err @ CmsError::DocumentNotFound(_)) => {
            sessions.set_message(&token, err.to_string());
            Ok(redirect_home())
        }
        Err(err) => Err(err),
    }
}

#[post("/{filename}")]
pub async fn update_document(
    path: web::Path<String>,
    form: web::Form<UpdateForm>,
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.require_signed_in(&token)?;
    let filename = path.into_inner();

    documents.write(&filename, &form.content)?;
    log::info!("Updated document {}", filename);

    sessions.set_message(&token, format!("{filename} has been updated."));
    Ok(redirect_home())
}

#[post("/{filename}/destroy")]
pub async fn destroy_document(
    path: web::Path<String>,
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.require_signed_in(&token)?;
    let filename = path.into_inner();

    documents.delete(&filename)?;
    log::info!("Deleted document {}", filename);

    sessions.set_message(&token, format!("{filename} has been deleted."));
    Ok(redirect_home())
}

#[post("/{filename}/duplicate")]
pub async fn duplicate_document(
    path: web::Path<String>,
    documents: web::Data<DocumentStore>,
    sessions: web::Data<SessionManager>,
    session: web::ReqData<SessionId>,
) -> Result<HttpResponse> {
    let token = session.into_inner().0;
    sessions.require_signed_in(&token)?;
    let filename = path.into_inner();

    let copy = documents.duplicate(&filename)?;
    log::info!("Duplicated document {} -> {}", filename, copy);

    sessions.set_message(&token, format!("{filename} has been duplicated!"));
    Ok(redirect_home())
}
