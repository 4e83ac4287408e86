use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        person::{PersonDto, PersonPayloadDto},
    },
    server::{
        controller::{
            info::{get_info, hello, openapi, openapi_document},
            person::{
                self, create_person, delete_person, get_person_by_id, get_persons, update_person,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        person::get_persons,
        person::get_person_by_id,
        person::create_person,
        person::update_person,
        person::delete_person,
    ),
    components(schemas(PersonDto, PersonPayloadDto, ErrorDto)),
    tags((name = "person", description = "Phonebook entries"))
)]
pub struct ApiDoc;

/// Routes for the phonebook API with collection routes mounted at `base_path`.
pub fn router(base_path: &str) -> Router<AppState> {
    let item_path = format!("{}/{{id}}", base_path);
    let doc = openapi_document(base_path);

    Router::new()
        .route("/", get(hello))
        .route("/info", get(get_info))
        .route("/api/openapi.json", get(move || openapi(doc)))
        .route(base_path, get(get_persons).post(create_person))
        .route(
            &item_path,
            get(get_person_by_id)
                .put(update_person)
                .delete(delete_person),
        )
}

/// Complete application: routes, state, static fallback, CORS and request tracing.
pub fn app(state: AppState, base_path: &str, static_dir: Option<&Path>) -> Router {
    let mut routes = router(base_path);

    if let Some(dir) = static_dir {
        routes = routes.fallback_service(ServeDir::new(dir));
    }

    routes
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
