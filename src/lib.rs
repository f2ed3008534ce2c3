pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    matching_service::{MatchPolicy, MatchingService},
    recommendation_service::{PgRecommendationSource, RecommendationService},
    skill_service::SkillService,
    user_service::UserService,
    vacancy_service::VacancyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub skill_service: SkillService,
    pub user_service: UserService,
    pub vacancy_service: VacancyService,
    pub recommendation_service: RecommendationService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        Self::with_policy(pool, config.match_policy)
    }

    pub fn with_policy(pool: PgPool, policy: MatchPolicy) -> Self {
        let skill_service = SkillService::new(pool.clone());
        let user_service = UserService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());
        let recommendation_service = RecommendationService::new(
            Arc::new(PgRecommendationSource::new(
                user_service.clone(),
                vacancy_service.clone(),
            )),
            MatchingService::new(policy),
        );

        Self {
            pool,
            skill_service,
            user_service,
            vacancy_service,
            recommendation_service,
        }
    }
}
