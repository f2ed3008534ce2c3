use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::{
        user_dto::RegistrationResponse,
        vacancy_dto::{
            RegisterVacancyPayload, VacancyDetailResponse, VacancyListQuery, VacancyListResponse,
        },
    },
    error::Result,
    utils::{
        extract::{AppJson, AppPath, AppQuery},
        validation::validate,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/vacancies",
    request_body = RegisterVacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully", body = RegistrationResponse),
        (status = 400, description = "Invalid payload or unknown skill")
    )
)]
#[axum::debug_handler]
pub async fn register_vacancy(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterVacancyPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    state.vacancy_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::success(
            "Vacancy has been created successfully",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vacancies",
    params(
        ("limit" = Option<i64>, Query, description = "Items per page, also accepted as `per_page`"),
        ("page" = Option<i64>, Query, description = "Page number")
    ),
    responses(
        (status = 200, description = "List of vacancies", body = VacancyListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<VacancyListQuery>,
) -> Result<impl IntoResponse> {
    let result = state.vacancy_service.list(query).await?;
    Ok(Json(VacancyListResponse::from(result)))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy with required skills", body = VacancyDetailResponse),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    let (vacancy, skills) = state.vacancy_service.get_with_skills(id).await?;
    Ok(Json(VacancyDetailResponse::new(vacancy, skills)))
}

#[utoipa::path(
    delete,
    path = "/api/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Vacancy deleted successfully"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    state.vacancy_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
