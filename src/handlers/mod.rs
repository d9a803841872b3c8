pub mod documents;
pub mod users;

pub use documents::{
    create_document, destroy_document, duplicate_document, edit_form, index, new_document_form,
    update_document, view_document,
};
pub use users::{signin, signin_form, signout, signup, signup_form};

use actix_web::{
    http::{header, StatusCode},
    web, HttpResponse,
};
use askama::Template;

use crate::error::Result;
use crate::session::SessionManager;
use crate::templates::PageContext;

/// Registers every route. Static paths go first; `/{filename}` patterns are
/// matched last so they cannot shadow them.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(new_document_form)
        .service(create_document)
        .service(signin_form)
        .service(signin)
        .service(signout)
        .service(signup_form)
        .service(signup)
        .service(edit_form)
        .service(update_document)
        .service(destroy_document)
        .service(duplicate_document)
        .service(view_document);
}

/// Builds the per-page context, consuming the pending flash message in the
/// process.
pub(crate) fn page_context(sessions: &SessionManager, token: &str) -> PageContext {
    PageContext {
        user: sessions.current_user(token),
        flash: sessions.take_message(token),
    }
}

pub(crate) fn render<T: Template>(template: &T) -> Result<HttpResponse> {
    render_with_status(StatusCode::OK, template)
}

pub(crate) fn render_with_status<T: Template>(
    status: StatusCode,
    template: &T,
) -> Result<HttpResponse> {
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(template.render()?))
}

pub(crate) fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
