//! Cookie-based session middleware for the dashboard.

use axum::{
    extract::Request,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};

use crate::web::session::SessionStore;

pub const SESSION_COOKIE: &str = "dashboard_session";

/// Session id of the current request, inserted as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

/// Attaches a [`SessionId`] to every request.
///
/// # Cookie Format
///
/// ```text
/// Cookie: dashboard_session=<32 hex chars>
/// ```
///
/// Requests without a well-formed cookie get a fresh id, returned with
/// `Set-Cookie: dashboard_session=<id>; Path=/; HttpOnly; SameSite=Lax`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::session;
///
/// let router = Router::new()
///     .route("/", get(dashboard_handler))
///     .route_layer(middleware::from_fn(session::layer));
/// ```
pub async fn layer(mut req: Request, next: Next) -> Response {
    let existing = session_cookie(req.headers()).filter(|id| is_valid_id(id));

    let (id, issued) = match existing {
        Some(id) => (id, false),
        None => (SessionStore::new_session_id(), true),
    };

    req.extensions_mut().insert(SessionId(id.clone()));
    let mut response = next.run(req).await;

    if issued {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Invalid session cookie header"),
        }
    }

    response
}

/// Extracts the session cookie, ignoring other cookies in the header.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                _ => None,
            }
        })
}

fn is_valid_id(id: &str) -> bool {
    id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit())
}
