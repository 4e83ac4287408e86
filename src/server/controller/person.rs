use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        person::{PersonDto, PersonPayloadDto},
    },
    server::{
        data::StoreKind,
        error::AppError,
        model::person::{Person, PersonCandidate},
        service::person::PersonService,
        state::AppState,
        util::parse::{parse_person_id, PERSON_NOT_FOUND},
    },
};

/// Tag for grouping phonebook endpoints in OpenAPI documentation
pub static PERSON_TAG: &str = "person";

/// Unwraps a JSON body, reporting unreadable bodies as 400 Bad Request.
fn read_payload(
    payload: Result<Json<PersonPayloadDto>, JsonRejection>,
) -> Result<PersonPayloadDto, AppError> {
    payload
        .map(|Json(dto)| dto)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn not_found() -> AppError {
    AppError::NotFound(PERSON_NOT_FOUND.to_string())
}

/// List all phonebook entries.
///
/// # Returns
/// - `200 OK` - All entries in store order
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/persons",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Successfully retrieved entries", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_persons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PersonService::new(state.store.as_ref(), &state.rules);

    let persons: Vec<PersonDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Person::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(persons)))
}

/// Get a phonebook entry by ID.
///
/// # Returns
/// - `200 OK` - The entry
/// - `400 Bad Request` - Malformed id (database store)
/// - `404 Not Found` - No entry with that id
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = String, Path, description = "Phonebook entry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entry", body = PersonDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_person_id(&id, state.store.kind())?;
    let service = PersonService::new(state.store.as_ref(), &state.rules);

    match service.get_by_id(id).await? {
        Some(person) => Ok((StatusCode::OK, Json(person.into_dto()))),
        None => Err(not_found()),
    }
}

/// Create a new phonebook entry.
///
/// The body is validated in full before anything is stored.
///
/// # Returns
/// - `201 Created` - The stored entry with its assigned id
/// - `400 Bad Request` - Unreadable body or validation failure
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSON_TAG,
    request_body = PersonPayloadDto,
    responses(
        (status = 201, description = "Successfully created entry", body = PersonDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = read_payload(payload)?;
    let service = PersonService::new(state.store.as_ref(), &state.rules);

    let person = service.create(PersonCandidate::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(person.into_dto())))
}

/// Replace the name and number of a phonebook entry.
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `400 Bad Request` - Malformed id, unreadable body or validation failure
/// - `404 Not Found` - No entry with that id
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = String, Path, description = "Phonebook entry ID")
    ),
    request_body = PersonPayloadDto,
    responses(
        (status = 200, description = "Successfully updated entry", body = PersonDto),
        (status = 400, description = "Invalid entry data or malformed id", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PersonPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_person_id(&id, state.store.kind())?;
    let payload = read_payload(payload)?;
    let service = PersonService::new(state.store.as_ref(), &state.rules);

    match service.update(id, PersonCandidate::from_dto(payload)).await? {
        Some(person) => Ok((StatusCode::OK, Json(person.into_dto()))),
        None => Err(not_found()),
    }
}

/// Delete a phonebook entry.
///
/// The database store answers with an empty 204, the memory store echoes the
/// removed entry with a 200.
///
/// # Returns
/// - `204 No Content` - Entry deleted (database store)
/// - `200 OK` - Entry deleted, body holds the removed entry (memory store)
/// - `400 Bad Request` - Malformed id (database store)
/// - `404 Not Found` - No entry with that id
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = String, Path, description = "Phonebook entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted (memory store)", body = PersonDto),
        (status = 204, description = "Entry deleted (database store)"),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let kind = state.store.kind();
    let id = parse_person_id(&id, kind)?;
    let service = PersonService::new(state.store.as_ref(), &state.rules);

    let removed = service.delete(id).await?.ok_or_else(not_found)?;

    match kind {
        StoreKind::Database => Ok(StatusCode::NO_CONTENT.into_response()),
        StoreKind::Memory => Ok((StatusCode::OK, Json(removed.into_dto())).into_response()),
    }
}
