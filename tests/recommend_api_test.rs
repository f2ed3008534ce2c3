use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use skill_recommender::{
    dto::skill_dto::RegisterSkillPayload, routes, services::matching_service::MatchPolicy,
    AppState,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_app() -> Option<(Router, AppState)> {
    dotenvy::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database-backed test");
        return None;
    };

    let pool: PgPool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let state = AppState::with_policy(pool, MatchPolicy::LegacyInverted);
    Some((routes::router(state.clone(), None), state))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create_skill(state: &AppState, name: &str) -> i32 {
    state
        .skill_service
        .create(RegisterSkillPayload {
            name: name.to_string(),
        })
        .await
        .expect("create skill")
        .id
}

async fn register_user(app: &Router, state: &AppState, skills: JsonValue) -> Uuid {
    let email = format!("df_{}@example.com", Uuid::new_v4());
    let payload = json!({
        "first_name": "dani",
        "last_name": "filth",
        "email": email,
        "years_prev_exp": 10,
        "skills": skills
    });
    let (status, body) = send(app, json_request("POST", "/api/users/register", payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["status"], "success");

    state
        .user_service
        .get_by_email(&email)
        .await
        .expect("lookup user")
        .expect("user stored")
        .id
}

async fn register_vacancy(app: &Router, state: &AppState, skills: JsonValue) -> Uuid {
    let position = format!("Python Dev {}", Uuid::new_v4());
    let payload = json!({
        "position_name": position,
        "company_name": "HUNTY",
        "salary": 9999999,
        "currency": "COP",
        "skills": skills
    });
    let (status, body) = send(app, json_request("POST", "/api/vacancies", payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    state
        .vacancy_service
        .list_all()
        .await
        .expect("list vacancies")
        .into_iter()
        .find(|v| v.position_name == position)
        .expect("vacancy stored")
        .id
}

#[tokio::test]
async fn recommendations_end_to_end() {
    let Some((app, state)) = setup_app().await else {
        return;
    };

    let suffix = Uuid::new_v4().simple().to_string();
    let python = create_skill(&state, &format!("python-{}", suffix)).await;
    let django = create_skill(&state, &format!("django-{}", suffix)).await;
    let aws = create_skill(&state, &format!("aws-{}", suffix)).await;

    let vacancy_id = register_vacancy(
        &app,
        &state,
        json!([
            { "id": python, "name": "python", "years": 5 },
            { "id": django, "name": "django", "years": 4 },
            { "id": aws, "name": "aws", "years": 4 }
        ]),
    )
    .await;
    let aws_only = register_vacancy(&app, &state, json!([{ "id": aws, "years": 1 }])).await;

    let senior = register_user(
        &app,
        &state,
        json!([
            { "id": python, "name": "python", "years": 5 },
            { "id": django, "name": "django", "years": 5 }
        ]),
    )
    .await;
    let junior = register_user(&app, &state, json!([{ "id": python, "years": 0 }])).await;
    let skill_less = register_user(&app, &state, json!([])).await;

    // 2 of 3 requirements met: 3 * 100 / 2 = 150 under the legacy policy.
    let (status, body) = send(&app, get(&format!("/api/users/{}/recommendations", senior))).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], vacancy_id.to_string());
    assert_eq!(items[0]["company_name"], "HUNTY");
    assert_eq!(items[0]["currency"], "COP");
    assert!(items.iter().all(|v| v["id"] != aws_only.to_string()));

    let (status, body) = send(&app, get(&format!("/api/users/{}/recommendations", junior))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        send(&app, get(&format!("/api/users/{}/recommendations", skill_less))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(
        &app,
        get(&format!("/api/users/{}/recommendations", Uuid::new_v4())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, get(&format!("/api/users/{}", senior))).await;
    assert_eq!(status, StatusCode::OK);
    let skills = body["skills"].as_array().expect("skills");
    assert_eq!(skills.len(), 2);
    assert!(skills.iter().all(|s| s["years"] == 5));

    let (status, body) = send(&app, get(&format!("/api/vacancies/{}", vacancy_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skills"].as_array().map(Vec::len), Some(3));

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/vacancies/{}", vacancy_id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&format!("/api/users/{}/recommendations", senior))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn user_crud_and_conflicts() {
    let Some((app, state)) = setup_app().await else {
        return;
    };

    let rust = create_skill(&state, &format!("rust-{}", Uuid::new_v4().simple())).await;
    let user_id = register_user(&app, &state, json!([{ "id": rust, "years": 3 }])).await;
    let existing = state.user_service.get_by_id(user_id).await.expect("user");

    let duplicate = json!({
        "first_name": "other",
        "last_name": "person",
        "email": existing.email.to_uppercase(),
        "years_prev_exp": 1,
        "skills": []
    });
    let (status, body) = send(&app, json_request("POST", "/api/users/register", duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User already exist");

    let unknown_skill = json!({
        "first_name": "other",
        "last_name": "person",
        "email": format!("other_{}@example.com", Uuid::new_v4()),
        "years_prev_exp": 1,
        "skills": [{ "id": -1, "years": 1 }]
    });
    let (status, _) = send(&app, json_request("POST", "/api/users/register", unknown_skill)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let update = json!({
        "first_name": "Dani",
        "last_name": "Filth",
        "email": existing.email,
        "years_prev_exp": 12
    });
    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/api/users/{}", user_id), update),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years_prev_exp"], 12);

    let skills = state.user_service.skills_for(user_id).await.expect("skills");
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].years, 3);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", user_id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&format!("/api/users/{}", user_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state
        .user_service
        .skills_for(user_id)
        .await
        .expect("skills")
        .is_empty());
}

#[tokio::test]
async fn skill_catalog_crud() {
    let Some((app, _state)) = setup_app().await else {
        return;
    };

    let name = format!("kotlin-{}", Uuid::new_v4().simple());
    let (status, body) = send(&app, json_request("POST", "/api/skills", json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("id");

    let (status, body) = send(&app, get(&format!("/api/skills?search={}", name))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["results"], 1);
    assert_eq!(body["skills"][0]["name"], name.as_str());

    let renamed = format!("{}-jvm", name);
    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/api/skills/{}", id), json!({ "name": renamed })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], renamed.as_str());

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/skills/{}", id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&format!("/api/skills/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap_or_default().contains("No skill"));
}

#[tokio::test]
async fn skill_list_pages_by_limit() {
    let Some((app, state)) = setup_app().await else {
        return;
    };

    let prefix = format!("paged-{}", Uuid::new_v4().simple());
    for i in 0..12 {
        create_skill(&state, &format!("{}-{:02}", prefix, i)).await;
    }

    let (status, body) = send(&app, get(&format!("/api/skills?search={}", prefix))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], 10);
    assert_eq!(body["skills"][0]["name"], format!("{}-00", prefix).as_str());

    let (_, body) = send(&app, get(&format!("/api/skills?search={}&page=2", prefix))).await;
    assert_eq!(body["results"], 2);
    assert_eq!(body["skills"][0]["name"], format!("{}-10", prefix).as_str());

    let (_, body) = send(
        &app,
        get(&format!("/api/skills?search={}&limit=5&page=3", prefix)),
    )
    .await;
    assert_eq!(body["results"], 2);

    let (_, body) = send(
        &app,
        get(&format!("/api/skills?search={}&limit=5&page=4", prefix)),
    )
    .await;
    assert_eq!(body["results"], 0);
}

#[tokio::test]
async fn vacancy_list_pages_by_limit() {
    let Some((app, state)) = setup_app().await else {
        return;
    };

    for _ in 0..3 {
        register_vacancy(&app, &state, json!([])).await;
    }

    let (status, body) = send(&app, get("/api/vacancies?limit=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["page"], 1);
    let total = body["total"].as_i64().expect("total");
    assert!(total >= 3);
    assert_eq!(body["total_pages"], (total + 1) / 2);

    let (status, body) = send(&app, get("/api/vacancies?limit=2&page=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert!(!body["items"].as_array().expect("items").is_empty());

    let (_, body) = send(&app, get("/api/vacancies?per_page=1")).await;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["per_page"], 1);

    let (_, body) = send(&app, get("/api/vacancies")).await;
    assert_eq!(body["per_page"], 20);
}
