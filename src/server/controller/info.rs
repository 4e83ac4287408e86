use std::fmt::Display;

use axum::{extract::State, response::Html, Json};
use chrono::{DateTime, Local, TimeZone};
use utoipa::OpenApi;

use crate::server::{
    config::DEFAULT_BASE_PATH, error::AppError, router::ApiDoc,
    service::person::PersonService, state::AppState,
};

/// Renders the `/info` HTML fragment.
pub fn info_page<Tz: TimeZone>(count: u64, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "<p>Phonebook has info for {} people</p>\n<p>{}</p>",
        count,
        now.to_rfc2822()
    )
}

/// Summary page with the current entry count and server time.
pub async fn get_info(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let service = PersonService::new(state.store.as_ref(), &state.rules);

    let count = service.count().await?;

    Ok(Html(info_page(count, &Local::now())))
}

pub async fn hello() -> &'static str {
    "Hello World!"
}

/// OpenAPI document with the person routes moved under `base_path`.
///
/// Handlers are annotated with the default base path.
pub fn openapi_document(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DEFAULT_BASE_PATH) {
            Some(rest) => (format!("{}{}", base_path, rest), item),
            None => (path, item),
        })
        .collect();

    doc
}

/// Serves a prebuilt OpenAPI document.
pub async fn openapi(doc: utoipa::openapi::OpenApi) -> Json<utoipa::openapi::OpenApi> {
    Json(doc)
}
