use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::skill_dto::{RegisterSkillPayload, SkillListQuery, SkillListResponse, SkillResponse},
    error::Result,
    utils::{
        extract::{AppJson, AppPath, AppQuery},
        validation::validate,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/skills",
    request_body = RegisterSkillPayload,
    responses(
        (status = 201, description = "Skill created successfully", body = SkillResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_skill(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterSkillPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let skill = state.skill_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}

#[utoipa::path(
    get,
    path = "/api/skills",
    params(
        ("limit" = Option<i64>, Query, description = "Items per page"),
        ("page" = Option<i64>, Query, description = "Page number"),
        ("search" = Option<String>, Query, description = "Substring of the skill name")
    ),
    responses(
        (status = 200, description = "List of skills", body = SkillListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_skills(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SkillListQuery>,
) -> Result<impl IntoResponse> {
    let skills = state.skill_service.list(query).await?;
    Ok(Json(SkillListResponse::from(skills)))
}

#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    params(
        ("id" = i32, Path, description = "Skill ID")
    ),
    responses(
        (status = 200, description = "Skill found", body = SkillResponse),
        (status = 404, description = "Skill not found")
    )
)]
#[axum::debug_handler]
pub async fn get_skill(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    let skill = state.skill_service.get_by_id(id).await?;
    Ok(Json(SkillResponse::from(skill)))
}

#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    params(
        ("id" = i32, Path, description = "Skill ID")
    ),
    request_body = RegisterSkillPayload,
    responses(
        (status = 200, description = "Skill renamed", body = SkillResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Skill not found")
    )
)]
#[axum::debug_handler]
pub async fn update_skill(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<RegisterSkillPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let skill = state.skill_service.update(id, payload).await?;
    Ok(Json(SkillResponse::from(skill)))
}

#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    params(
        ("id" = i32, Path, description = "Skill ID")
    ),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 404, description = "Skill not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_skill(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    state.skill_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
