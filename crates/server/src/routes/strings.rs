//! `/strings` resource: create, look up, query and delete analyzed strings.
//!
//! Store and engine calls can hit disk (redb), so they run on the blocking
//! pool.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use filter::StructuredFilter;
use query::{FilterQueryResult, NaturalLanguageQueryResult, QueryEngine};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use store::Record;

/// Query parameters for the natural-language endpoint
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: String,
}

/// Pull the text out of a `{"value": "..."}` body.
///
/// A missing or null `value` is a bad request; any other non-string JSON
/// value is reported as an invalid type.
pub fn parse_create_body(body: &Value) -> ServerResult<String> {
    let Some(fields) = body.as_object() else {
        return Err(ServerError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    };

    match fields.get("value") {
        None | Some(Value::Null) => Err(ServerError::BadRequest(
            "missing required field \"value\"".to_string(),
        )),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ServerError::InvalidType(
            "field \"value\" must be a string".to_string(),
        )),
    }
}

async fn with_engine<T, F>(state: &ServerState, op: F) -> ServerResult<T>
where
    T: Send + 'static,
    F: FnOnce(&QueryEngine) -> ServerResult<T> + Send + 'static,
{
    let engine = Arc::clone(&state.engine);
    tokio::task::spawn_blocking(move || op(engine.as_ref())).await?
}

/// `POST /strings`
pub async fn create_string(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Record>)> {
    let Json(body) = payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let text = parse_create_body(&body)?;

    let record = with_engine(&state, move |engine| Ok(engine.create(&text)?)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings/{string_value}`
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<Json<Record>> {
    let record = with_engine(&state, move |engine| Ok(engine.get(&value)?)).await?;
    record
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("string does not exist".to_string()))
}

/// `GET /strings?is_palindrome=&min_length=&max_length=&word_count=&contains_character=`
pub async fn list_strings(
    State(state): State<Arc<ServerState>>,
    params: Result<Query<StructuredFilter>, QueryRejection>,
) -> ServerResult<Json<FilterQueryResult>> {
    let Query(filter) =
        params.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let result = with_engine(&state, move |engine| Ok(engine.query_by_filter(&filter)?)).await?;
    Ok(Json(result))
}

/// `GET /strings/filter-by-natural-language?query=`
pub async fn filter_by_natural_language(
    State(state): State<Arc<ServerState>>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> ServerResult<Json<NaturalLanguageQueryResult>> {
    let Query(params) =
        params.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let result = with_engine(&state, move |engine| {
        Ok(engine.query_by_natural_language(&params.query)?)
    })
    .await?;
    Ok(Json(result))
}

/// `DELETE /strings/{string_value}`
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<StatusCode> {
    with_engine(&state, move |engine| Ok(engine.delete(&value)?)).await?;
    Ok(StatusCode::NO_CONTENT)
}
