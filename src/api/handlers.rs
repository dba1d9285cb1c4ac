use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::error::QueryError;
use crate::AppState;

use super::models::{AskForm, AskRequest, AskResponse, ErrorResponse};
use super::page::{self, Outcome, PageView};

pub async fn index() -> Html<String> {
    Html(page::render(&PageView::default()))
}

pub async fn ask_form(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Response {
    let (status, outcome) = match state.handler.ask(&form.question).await {
        Ok(answer) => (StatusCode::OK, Outcome::Answer(answer.text)),
        Err(err) => (status_for(&err), outcome_for(&err)),
    };

    let view = PageView {
        question: form.question,
        outcome,
    };
    (status, Html(page::render(&view))).into_response()
}

pub async fn ask_json(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.handler.ask(&payload.question).await {
        Ok(answer) => Ok(Json(AskResponse {
            answer: answer.text,
            model: state.handler.model().to_string(),
        })),
        Err(err) => Err((
            status_for(&err),
            Json(ErrorResponse {
                error: err.user_message(),
            }),
        )),
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

fn status_for(err: &QueryError) -> StatusCode {
    match err {
        QueryError::EmptyQuestion => StatusCode::BAD_REQUEST,
        QueryError::Service(_) => StatusCode::BAD_GATEWAY,
    }
}

fn outcome_for(err: &QueryError) -> Outcome {
    match err {
        QueryError::EmptyQuestion => Outcome::Warning(err.user_message()),
        QueryError::Service(_) => Outcome::Error(err.user_message()),
    }
}
