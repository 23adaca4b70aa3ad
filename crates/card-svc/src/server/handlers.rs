//! Axum request handlers for all card endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    CreateCardRequest, DeleteCardResponse, ErrorBody, PatchCardRequest, ReplaceCardRequest,
};
use common::ApiError;

use super::state::AppState;

/// `GET /cards` — list the full live sequence, in store order.
pub async fn list_cards(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.store.list().await)).into_response()
}

/// `POST /cards` — create a new card from `suit` and `value`.
pub async fn create_card(
    State(state): State<AppState>,
    Json(req): Json<CreateCardRequest>,
) -> Response {
    let (suit, value) = match req.validate() {
        Ok(fields) => fields,
        Err(e) => return reject(e),
    };
    let card = state.store.create(suit, value).await;
    (StatusCode::CREATED, Json(card)).into_response()
}

/// `GET /cards/:id` — fetch a single card by id.
pub async fn get_card(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return reject(e),
    };
    match state.store.get(id).await {
        Ok(card) => (StatusCode::OK, Json(card)).into_response(),
        Err(e) => reject(e),
    }
}

/// `PUT /cards/:id` — replace a card wholesale.
///
/// The id check runs before the body check, so an invalid id wins when both
/// would fail.
pub async fn replace_card(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(req): Json<ReplaceCardRequest>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return reject(e),
    };
    let (suit, value) = match req.validate() {
        Ok(fields) => fields,
        Err(e) => return reject(e),
    };
    match state.store.replace(id, suit, value).await {
        Ok(card) => (StatusCode::OK, Json(card)).into_response(),
        Err(e) => reject(e),
    }
}

/// `PATCH /cards/:id` — update whichever of `suit`/`value` are present.
pub async fn patch_card(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(req): Json<PatchCardRequest>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return reject(e),
    };
    match state.store.patch(id, req.suit, req.value).await {
        Ok(card) => (StatusCode::OK, Json(card)).into_response(),
        Err(e) => reject(e),
    }
}

/// `DELETE /cards/:id` — remove a card and return it in the acknowledgement.
pub async fn delete_card(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return reject(e),
    };
    match state.store.remove(id).await {
        Ok(card) => (StatusCode::OK, Json(DeleteCardResponse::new(card))).into_response(),
        Err(e) => reject(e),
    }
}

/// Catch-all 404 handler for unmatched verb+path pairs.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

/// Build the error response for `err`, using its status code and wire message.
fn reject(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorBody::from(&err))).into_response()
}

// ---------------------------------------------------------------------------
// Id parsing
// ---------------------------------------------------------------------------

/// Parse the `:id` path segment with integer-prefix semantics.
///
/// Leading whitespace and an optional sign are skipped, then the longest run
/// of ASCII digits is taken; anything after it is ignored, so `"12abc"`
/// parses as 12. A segment with no digit prefix is invalid. Overflowing
/// prefixes saturate, which still fails the subsequent lookup.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return Err(ApiError::InvalidId);
    }
    let magnitude: i64 = digits[..len].parse().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}
