//! Doc CRUD request handlers.
//!
//! Every endpoint answers with the `{code, data, msg}` envelope. Domain
//! failures keep HTTP 200 and signal the outcome through the envelope
//! code; only create/update persistence failures raise HTTP 500.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::api::doc::DOC_TAG;
use crate::api::dto::{
    CreateDocRequest, DocResponse, Envelope, GetDocQuery, ListDocsQuery, MSG_DELETED, MSG_FAILURE,
    UpdateDocRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates doc CRUD routes, nested under /admin/docs.
pub fn doc_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_doc))
        .routes(routes!(get_doc))
        .routes(routes!(update_doc))
        .routes(routes!(delete_doc))
}

/// Creates the doc listing route, mounted at the root.
pub fn doc_list_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_docs))
}

/// GET /admin/docs/{id} - Get doc by ID
///
/// Returns the doc; pass `relation=chapters` to eager-load its chapters.
#[utoipa::path(
    get,
    path = "/{id}",
    params(
        ("id" = i32, Path, description = "Doc ID"),
        GetDocQuery
    ),
    responses(
        (status = 200, description = "Doc found or lookup failed, see envelope code", body = Envelope<DocResponse>)
    ),
    tag = DOC_TAG
)]
async fn get_doc(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<GetDocQuery>,
) -> Response {
    match state
        .services
        .docs
        .get_doc(id, query.wants_chapters())
        .await
    {
        Ok((doc, chapters)) => Json(Envelope::ok(DocResponse::new(doc, chapters))).into_response(),
        Err(err) => Json(Envelope::<DocResponse>::failure(err.to_string())).into_response(),
    }
}

/// POST /admin/docs - Create a new doc
///
/// Validates the payload field by field; the first violation is reported.
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateDocRequest,
    responses(
        (status = 200, description = "Doc created or payload rejected, see envelope code", body = Envelope<DocResponse>),
        (status = 500, description = "Persistence failed", body = Envelope<DocResponse>)
    ),
    tag = DOC_TAG
)]
async fn create_doc(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDocRequest>,
) -> Response {
    match state.services.docs.create_doc(payload.into_new_doc()).await {
        Ok(doc) if doc.id == 0 => {
            Json(Envelope::<DocResponse>::failure(MSG_FAILURE)).into_response()
        }
        Ok(doc) => Json(Envelope::ok(DocResponse::new(doc, None))).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Envelope::<DocResponse>::failure(format!(
                "create doc failed: {err}"
            ))),
        )
            .into_response(),
    }
}

/// POST /admin/docs/{id}/update - Update a doc
///
/// Takes the full field set. A missing id is a domain failure (HTTP 200,
/// envelope code 400); a persistence error raises HTTP 500.
#[utoipa::path(
    post,
    path = "/{id}/update",
    params(("id" = i32, Path, description = "Doc ID")),
    request_body = UpdateDocRequest,
    responses(
        (status = 200, description = "Doc updated or rejected, see envelope code", body = Envelope<DocResponse>),
        (status = 500, description = "Persistence failed", body = Envelope<DocResponse>)
    ),
    tag = DOC_TAG
)]
async fn update_doc(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateDocRequest>,
) -> Response {
    match state
        .services
        .docs
        .update_doc(id, payload.into_update_doc())
        .await
    {
        Ok(doc) => Json(Envelope::ok(DocResponse::new(doc, None))).into_response(),
        Err(err @ AppError::NotFound { .. }) => {
            Json(Envelope::<DocResponse>::failure(err.to_string())).into_response()
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Envelope::<DocResponse>::failure(format!(
                "update doc failed: {err}"
            ))),
        )
            .into_response(),
    }
}

/// DELETE /admin/docs/{id}/delete - Delete a doc
///
/// Deleting a missing id still reports success; the statement affects zero
/// rows without erroring.
#[utoipa::path(
    delete,
    path = "/{id}/delete",
    params(("id" = i32, Path, description = "Doc ID")),
    responses(
        (status = 200, description = "Deletion outcome, see envelope code", body = Envelope<String>)
    ),
    tag = DOC_TAG
)]
async fn delete_doc(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.services.docs.delete_doc(id).await {
        Ok(deleted) => {
            if !deleted {
                tracing::debug!(id, "delete affected no rows");
            }
            Json(Envelope::<String>::message(MSG_DELETED)).into_response()
        }
        Err(err) => Json(Envelope::<String>::failure(err.to_string())).into_response(),
    }
}

/// GET /tts - List docs
///
/// Supports name search, whitelisted ordering, and 1-based pagination.
/// Chapters are never loaded here.
#[utoipa::path(
    get,
    path = "/tts",
    params(ListDocsQuery),
    responses(
        (status = 200, description = "Doc listing, see envelope code", body = Envelope<Vec<DocResponse>>)
    ),
    tag = DOC_TAG
)]
async fn list_docs(State(state): State<AppState>, Query(query): Query<ListDocsQuery>) -> Response {
    match state
        .services
        .docs
        .list_docs(
            query.search_str.as_deref(),
            query.order_by.as_deref(),
            query.page(),
            query.per_page(),
        )
        .await
    {
        Ok(docs) => {
            let responses: Vec<DocResponse> = docs
                .into_iter()
                .map(|doc| DocResponse::new(doc, None))
                .collect();
            Json(Envelope::ok(responses)).into_response()
        }
        Err(err) => Json(Envelope::<Vec<DocResponse>>::failure(err.to_string())).into_response(),
    }
}
