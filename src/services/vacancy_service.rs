use crate::dto::vacancy_dto::{RegisterVacancyPayload, VacancyListQuery};
use crate::error::{Error, Result};
use crate::models::skill::SkillWithYears;
use crate::models::vacancy::{Vacancy, VacancySkill};
use crate::services::skill_service::{skill_ids, SkillService};
use crate::utils::pagination::PageWindow;
use sqlx::PgPool;
use uuid::Uuid;

const VACANCY_COLUMNS: &str =
    "id, position_name, company_name, salary, currency, created_at, updated_at";

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
    skill_service: SkillService,
}

pub struct VacancyList {
    pub items: Vec<Vacancy>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        let skill_service = SkillService::new(pool.clone());
        Self {
            pool,
            skill_service,
        }
    }

    /// Inserts the vacancy and one requirement row per declared skill in a
    /// single transaction.
    pub async fn register(&self, payload: RegisterVacancyPayload) -> Result<Vacancy> {
        self.skill_service
            .ensure_exist(&skill_ids(&payload.skills))
            .await?;

        let mut tx = self.pool.begin().await?;

        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            r#"
            INSERT INTO vacancies (position_name, company_name, salary, currency)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            VACANCY_COLUMNS
        ))
        .bind(payload.position_name.trim())
        .bind(payload.company_name.trim())
        .bind(payload.salary)
        .bind(payload.currency.trim())
        .fetch_one(&mut *tx)
        .await?;

        for skill in &payload.skills {
            sqlx::query(
                "INSERT INTO vacancies_skills (vacancy_id, skill_id, years) VALUES ($1, $2, $3)",
            )
            .bind(vacancy.id)
            .bind(skill.id)
            .bind(skill.years)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            vacancy_id = %vacancy.id,
            skills = payload.skills.len(),
            "Vacancy registered"
        );
        Ok(vacancy)
    }

    pub async fn list(&self, query: VacancyListQuery) -> Result<VacancyList> {
        let window = PageWindow::new(query.page, query.per_page, 20);

        let items = sqlx::query_as::<_, Vacancy>(&format!(
            r#"
            SELECT {}
            FROM vacancies
            ORDER BY created_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
            VACANCY_COLUMNS
        ))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vacancies")
            .fetch_one(&self.pool)
            .await?;

        let total_pages = ((total as f64) / (window.limit as f64)).ceil() as i64;

        Ok(VacancyList {
            items,
            total,
            page: window.page,
            per_page: window.limit,
            total_pages,
        })
    }

    /// Every vacancy in store order, unpaginated.
    pub async fn list_all(&self) -> Result<Vec<Vacancy>> {
        let items = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {} FROM vacancies ORDER BY created_at, id",
            VACANCY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {} FROM vacancies WHERE id = $1",
            VACANCY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        vacancy.ok_or_else(|| Error::NotFound(format!("No vacancy with this id: {} found", id)))
    }

    pub async fn get_with_skills(&self, id: Uuid) -> Result<(Vacancy, Vec<SkillWithYears>)> {
        let vacancy = self.get_by_id(id).await?;
        let skills = sqlx::query_as::<_, SkillWithYears>(
            r#"
            SELECT s.id, s.name, vs.years
            FROM vacancies_skills vs
            JOIN skills s ON s.id = vs.skill_id
            WHERE vs.vacancy_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok((vacancy, skills))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No vacancy with this id: {} found", id)));
        }
        tracing::info!(vacancy_id = %id, "Vacancy deleted");
        Ok(())
    }

    pub async fn skills_for(&self, vacancy_id: Uuid) -> Result<Vec<VacancySkill>> {
        let skills = sqlx::query_as::<_, VacancySkill>(
            r#"
            SELECT vacancy_id, skill_id, years
            FROM vacancies_skills
            WHERE vacancy_id = $1
            ORDER BY skill_id
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }
}
