//! Askama templates for the HTML pages.

use askama::Template;

/// Data the base template needs on every page: the signed-in user and the
/// pending flash message.
pub struct PageContext {
    pub user: Option<String>,
    pub flash: Option<String>,
}

/// Document list page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub files: Vec<String>,
}

/// Rendered markdown document page
#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub ctx: PageContext,
    pub filename: String,
    pub rendered: String,
}

/// New document form; `error` re-renders inline on validation failure
#[derive(Template)]
#[template(path = "new.html")]
pub struct NewDocumentTemplate {
    pub ctx: PageContext,
    pub filename: String,
    pub error: Option<String>,
}

/// Edit form with the document's current content
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub ctx: PageContext,
    pub filename: String,
    pub content: String,
}

/// Sign-in page
#[derive(Template)]
#[template(path = "signin.html")]
pub struct SigninTemplate {
    pub ctx: PageContext,
    pub username: String,
    pub error: Option<String>,
}

/// Sign-up page
#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub username: String,
    pub error: Option<String>,
}
