use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::{
    skill_dto::{
        RegisterSkillPayload, SkillListResponse, SkillResponse, SkillYearsPayload,
        SkillYearsResponse,
    },
    user_dto::{
        RegisterUserPayload, RegistrationResponse, UpdateUserPayload, UpdateUserResponse,
        UserResponse,
    },
    vacancy_dto::{
        RegisterVacancyPayload, VacancyDetailResponse, VacancyListResponse, VacancySummary,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::skill::create_skill,
        crate::routes::skill::list_skills,
        crate::routes::skill::get_skill,
        crate::routes::skill::update_skill,
        crate::routes::skill::delete_skill,
        crate::routes::user::register_user,
        crate::routes::user::get_user,
        crate::routes::user::update_user,
        crate::routes::user::delete_user,
        crate::routes::user::get_recommendations,
        crate::routes::vacancy::register_vacancy,
        crate::routes::vacancy::list_vacancies,
        crate::routes::vacancy::get_vacancy,
        crate::routes::vacancy::delete_vacancy,
    ),
    components(schemas(
        RegisterSkillPayload,
        SkillResponse,
        SkillListResponse,
        SkillYearsPayload,
        SkillYearsResponse,
        RegisterUserPayload,
        UpdateUserPayload,
        UpdateUserResponse,
        UserResponse,
        RegistrationResponse,
        RegisterVacancyPayload,
        VacancySummary,
        VacancyDetailResponse,
        VacancyListResponse,
    )),
    tags(
        (name = "skill-recommender", description = "Skill catalog, users, vacancies and recommendations")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
