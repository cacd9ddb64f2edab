//! Form handlers that mutate the session's dashboard view.
//!
//! Each handler runs the view operation in a spawned task, so the operation
//! completes even if the browser disconnects, then redirects back to `/`.

use axum::{
    Form,
    extract::{Extension, Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::application::views::FormState;
use crate::domain::ports::Confirmer;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::session::SessionId;

#[derive(Debug, Deserialize)]
pub struct PageForm {
    pub delta: i32,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirmed: bool,
}

/// Confirmation already answered in the browser before the form was posted.
#[derive(Debug, Clone, Copy)]
pub struct FormConfirmation(pub bool);

impl Confirmer for FormConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, confirmed = self.0, "Delete confirmation from form");
        self.0
    }
}

/// Submits the create form.
///
/// # Endpoint
///
/// `POST /shorten` with form fields `url` and `custom_code`
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Form(form): Form<FormState>,
) -> Result<Redirect, AppError> {
    let view = state.sessions.view(&session_id, &state.api);

    tokio::spawn(async move {
        let mut view = view.lock_owned().await;
        view.submit_new_link(&form.url, form.custom_code.as_deref())
            .await;
    })
    .await?;

    Ok(Redirect::to("/"))
}

/// Moves the history by `delta` pages.
///
/// # Endpoint
///
/// `POST /page` with form field `delta` (e.g. `-1` or `1`)
pub async fn page_handler(
    State(state): State<AppState>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Form(PageForm { delta }): Form<PageForm>,
) -> Result<Redirect, AppError> {
    let view = state.sessions.view(&session_id, &state.api);

    tokio::spawn(async move {
        let mut view = view.lock_owned().await;
        view.change_page(delta).await;
    })
    .await?;

    Ok(Redirect::to("/"))
}

/// Deletes a link once the browser has confirmed.
///
/// # Endpoint
///
/// `POST /links/{code}/delete` with form field `confirmed`
pub async fn delete_handler(
    State(state): State<AppState>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Path(code): Path<String>,
    Form(DeleteForm { confirmed }): Form<DeleteForm>,
) -> Result<Redirect, AppError> {
    let view = state.sessions.view(&session_id, &state.api);

    tokio::spawn(async move {
        let mut view = view.lock_owned().await;
        view.delete_link(&code, &FormConfirmation(confirmed)).await;
    })
    .await?;

    Ok(Redirect::to("/"))
}
