use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::UserSkill;
use crate::models::vacancy::{Vacancy, VacancySkill};
use crate::services::matching_service::MatchingService;
use crate::services::user_service::UserService;
use crate::services::vacancy_service::VacancyService;

/// Read access the recommender needs from the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn user_skills(&self, user_id: Uuid) -> Result<Vec<UserSkill>>;
    async fn vacancy_skills(&self, vacancy_id: Uuid) -> Result<Vec<VacancySkill>>;
    async fn list_vacancies(&self) -> Result<Vec<Vacancy>>;
    async fn vacancy_by_id(&self, vacancy_id: Uuid) -> Result<Vacancy>;
}

#[derive(Clone)]
pub struct PgRecommendationSource {
    users: UserService,
    vacancies: VacancyService,
}

impl PgRecommendationSource {
    pub fn new(users: UserService, vacancies: VacancyService) -> Self {
        Self { users, vacancies }
    }
}

#[async_trait]
impl RecommendationSource for PgRecommendationSource {
    async fn user_skills(&self, user_id: Uuid) -> Result<Vec<UserSkill>> {
        self.users.skills_for(user_id).await
    }

    async fn vacancy_skills(&self, vacancy_id: Uuid) -> Result<Vec<VacancySkill>> {
        self.vacancies.skills_for(vacancy_id).await
    }

    async fn list_vacancies(&self) -> Result<Vec<Vacancy>> {
        self.vacancies.list_all().await
    }

    async fn vacancy_by_id(&self, vacancy_id: Uuid) -> Result<Vacancy> {
        self.vacancies.get_by_id(vacancy_id).await
    }
}

#[derive(Clone)]
pub struct RecommendationService {
    source: Arc<dyn RecommendationSource>,
    matcher: MatchingService,
}

impl RecommendationService {
    pub fn new(source: Arc<dyn RecommendationSource>, matcher: MatchingService) -> Self {
        Self { source, matcher }
    }

    /// Scans every vacancy and keeps those the matcher accepts, in scan order.
    ///
    /// A user that does not exist has no skills, so nothing matches and the
    /// result is empty rather than an error. A vacancy deleted while the scan
    /// runs is skipped.
    #[instrument(skip(self))]
    pub async fn recommend(&self, user_id: Uuid) -> Result<Vec<Vacancy>> {
        let user_skills = self.source.user_skills(user_id).await?;
        let vacancies = self.source.list_vacancies().await?;

        let mut recommended = Vec::new();
        for vacancy in &vacancies {
            let vacancy_skills = self.source.vacancy_skills(vacancy.id).await?;
            if let Some(matched_id) = self
                .matcher
                .compute_vacancy_match(&vacancy_skills, &user_skills)
            {
                match self.source.vacancy_by_id(matched_id).await {
                    Ok(found) => recommended.push(found),
                    Err(Error::NotFound(_)) => {
                        tracing::debug!(
                            vacancy_id = %matched_id,
                            "Matched vacancy vanished during scan"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        tracing::info!(
            policy = %self.matcher.policy(),
            user_skills = user_skills.len(),
            scanned = vacancies.len(),
            recommended = recommended.len(),
            "Recommendations computed"
        );
        Ok(recommended)
    }
}
