use crate::models::user::UserSkill;
use crate::models::vacancy::VacancySkill;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Minimum match percentage for a vacancy to be recommended.
pub const MATCH_THRESHOLD_PERCENT: f64 = 50.0;

/// How the match percentage of a vacancy is derived from its satisfied requirements.
///
/// `LegacyInverted` divides the number of requirements by the number satisfied,
/// so a vacancy with many requirements and few matches scores high. It is the
/// historical behavior and stays the default. `Corrected` is the plain
/// satisfied / required ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    LegacyInverted,
    Corrected,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::LegacyInverted => "legacy-inverted",
            MatchPolicy::Corrected => "corrected",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy-inverted" | "legacy" => Ok(MatchPolicy::LegacyInverted),
            "corrected" => Ok(MatchPolicy::Corrected),
            other => Err(format!(
                "unknown match policy '{}', expected 'legacy-inverted' or 'corrected'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingService {
    policy: MatchPolicy,
}

impl MatchingService {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Only the first entry for the skill is consulted when the user list
    /// carries duplicates, even if a later one would satisfy the requirement.
    pub fn is_skill_satisfied(vacancy_skill: &VacancySkill, user_skills: &[UserSkill]) -> bool {
        user_skills
            .iter()
            .find(|s| s.skill_id == vacancy_skill.skill_id)
            .map(|s| s.years >= vacancy_skill.years)
            .unwrap_or(false)
    }

    /// Returns `None` when no requirement is satisfied.
    pub fn match_percent(&self, total_required: usize, matched: usize) -> Option<f64> {
        if matched == 0 || total_required == 0 {
            return None;
        }
        let total = total_required as f64;
        let matched = matched as f64;
        let percent = match self.policy {
            MatchPolicy::LegacyInverted => total * 100.0 / matched,
            MatchPolicy::Corrected => matched * 100.0 / total,
        };
        Some(percent)
    }

    /// Decides whether the vacancy owning `vacancy_skills` fits the user and,
    /// if so, returns the vacancy id taken from the first satisfied requirement.
    pub fn compute_vacancy_match(
        &self,
        vacancy_skills: &[VacancySkill],
        user_skills: &[UserSkill],
    ) -> Option<Uuid> {
        let matched: Vec<&VacancySkill> = vacancy_skills
            .iter()
            .filter(|vs| Self::is_skill_satisfied(vs, user_skills))
            .collect();

        let percent = self.match_percent(vacancy_skills.len(), matched.len())?;
        if percent >= MATCH_THRESHOLD_PERCENT {
            matched.first().map(|vs| vs.vacancy_id)
        } else {
            None
        }
    }
}
