pub mod matching_service;
pub mod recommendation_service;
pub mod skill_service;
pub mod user_service;
pub mod vacancy_service;
