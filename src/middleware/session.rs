use actix_web::{
    body::MessageBody,
    cookie::{Cookie, SameSite},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    middleware::Next,
    web, HttpMessage,
};

use crate::session::{SessionId, SessionManager};

pub const SESSION_COOKIE: &str = "session_id";

/// Ensures every request runs under a known session. Requests arriving
/// without a recognized `session_id` cookie get a fresh session, with the
/// cookie set on the way out; anonymous visitors need one for flash
/// messages.
pub async fn session_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let sessions = req
        .app_data::<web::Data<SessionManager>>()
        .ok_or_else(|| ErrorInternalServerError("Session manager not available"))?
        .clone();

    let existing = req
        .cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| sessions.contains(token));

    let (token, is_new) = match existing {
        Some(token) => (token, false),
        None => (sessions.open(), true),
    };

    // Make the session token available to handlers via ReqData
    req.extensions_mut().insert(SessionId(token.clone()));

    let mut res = next.call(req).await?;

    if is_new {
        let cookie = Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .finish();
        res.response_mut()
            .add_cookie(&cookie)
            .map_err(ErrorInternalServerError)?;
    }

    Ok(res)
}
