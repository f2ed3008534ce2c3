pub mod docs;
pub mod health;
pub mod skill;
pub mod user;
pub mod vacancy;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::cors_layer, AppState};

pub fn router(state: AppState, client_origin: Option<HeaderValue>) -> Router {
    let base_routes = Router::new()
        .route("/api/healthchecker", get(health::health))
        .route("/api/openapi.json", get(docs::openapi_json));

    let skill_api = Router::new()
        .route(
            "/api/skills",
            get(skill::list_skills).post(skill::create_skill),
        )
        .route(
            "/api/skills/:id",
            get(skill::get_skill)
                .put(skill::update_skill)
                .delete(skill::delete_skill),
        );

    let user_api = Router::new()
        .route(
            "/api/users/register",
            axum::routing::post(user::register_user),
        )
        .route(
            "/api/users/:id",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/:id/recommendations",
            get(user::get_recommendations),
        );

    let vacancy_api = Router::new()
        .route(
            "/api/vacancies",
            get(vacancy::list_vacancies).post(vacancy::register_vacancy),
        )
        .route(
            "/api/vacancies/:id",
            get(vacancy::get_vacancy).delete(vacancy::delete_vacancy),
        );

    base_routes
        .merge(skill_api)
        .merge(user_api)
        .merge(vacancy_api)
        .with_state(state)
        .layer(cors_layer(client_origin))
        .layer(TraceLayer::new_for_http())
}
