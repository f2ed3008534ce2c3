use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::{
        user_dto::{
            RegisterUserPayload, RegistrationResponse, UpdateUserPayload, UpdateUserResponse,
            UserResponse,
        },
        vacancy_dto::VacancySummary,
    },
    error::Result,
    utils::{
        extract::{AppJson, AppPath},
        validation::validate,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterUserPayload,
    responses(
        (status = 201, description = "User created successfully", body = RegistrationResponse),
        (status = 400, description = "Invalid payload or unknown skill"),
        (status = 409, description = "User already exist")
    )
)]
#[axum::debug_handler]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    state.user_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::success(
            "User has been created successfully",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with skills", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    let (user, skills) = state.user_service.get_with_skills(id).await?;
    Ok(Json(UserResponse::new(user, skills)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated", body = UpdateUserResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let user = state.user_service.update(id, payload).await?;
    Ok(Json(UpdateUserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/recommendations",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Vacancies matching the user's skills, empty when none", body = [VacancySummary])
    )
)]
#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    let vacancies = state.recommendation_service.recommend(id).await?;
    let summaries: Vec<VacancySummary> = vacancies.into_iter().map(Into::into).collect();
    Ok(Json(summaries))
}
