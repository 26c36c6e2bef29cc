//! HTTP-level integration tests for the profile, skill, project, work and
//! link endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_profile, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Profile CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/profiles",
        json!({"name": "Ada Lovelace", "email": "ada@x.com", "location": "London"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["email"], "ada@x.com");
    assert_eq!(json["location"], "London");
    assert!(json["id"].is_number());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_returns_409(pool: PgPool) {
    create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/profiles",
        json!({"name": "Another Ada", "email": "ada@x.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/profiles").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_profile_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/profiles",
        json!({"name": "A", "email": "not-an-email"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("email"));
    assert!(message.contains("name"));

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", json!({"name": "No Email"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_profile_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/profiles/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Profile with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_profiles_paginates(pool: PgPool) {
    for i in 0..3 {
        create_profile(&pool, &format!("Person {i}"), &format!("p{i}@x.com")).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/profiles?offset=1&limit=1").await).await;
    let page = json.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "Person 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_applies_only_supplied_fields(pool: PgPool) {
    let id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/profiles/{id}"),
        json!({"bio": "Analyst"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["email"], "ada@x.com");
    assert_eq!(json["bio"], "Analyst");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_null_clears_field(pool: PgPool) {
    let id = create_profile(&pool, "Ada", "ada@x.com").await;
    let uri = format!("/api/v1/profiles/{id}");

    let app = common::build_test_app(pool.clone());
    put_json(app, &uri, json!({"bio": "Analyst", "location": "London"})).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &uri, json!({"bio": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["bio"], serde_json::Value::Null);
    assert_eq!(json["location"], "London");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_profile_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/profiles/999999", json!({"bio": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_profile_cascades(pool: PgPool) {
    let id = create_profile(&pool, "Ada", "ada@x.com").await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/profiles/{id}/skills"),
        json!({"name": "Rust"}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/profiles/{id}/links"),
        json!({"platform": "GitHub", "url": "https://github.com/ada"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let stats = body_json(get(app, "/api/v1/stats").await).await;
    assert_eq!(stats["profiles"], 0);
    assert_eq!(stats["skills"], 0);
    assert_eq!(stats["links"], 0);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Child collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_skill_defaults_level(pool: PgPool) {
    let id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{id}/skills"),
        json!({"name": "Rust", "category": "Languages"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["level"], "intermediate");
    assert_eq!(json["profile_id"], id);

    let app = common::build_test_app(pool);
    let list = body_json(get(app, &format!("/api/v1/profiles/{id}/skills")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_child_of_missing_profile_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/profiles/999999/skills",
        json!({"name": "Rust"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/profiles/999999/projects").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_update_and_delete(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/api/v1/profiles/{profile_id}/skills"),
            json!({"name": "Rust"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/skills/{id}"),
        json!({"level": "expert"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Rust");
    assert_eq!(json["level"], "expert");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/skills/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/skills/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_technologies_round_trip(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/projects"),
        json!({"title": "Portfolio", "technologies": ["React", "Node.js"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["is_active"], true);
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(fetched["technologies"], json!(["React", "Node.js"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_null_technologies_is_empty(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/projects"),
        json!({"title": "Portfolio", "technologies": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["technologies"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_end_date_can_be_cleared(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/work"),
        json!({
            "company": "Acme",
            "position": "Engineer",
            "start_date": "2019-01-01T00:00:00Z",
            "end_date": "2020-01-01T00:00:00Z",
        }),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/work/{id}"),
        json!({"end_date": null, "is_current": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["end_date"], serde_json::Value::Null);
    assert_eq!(json["is_current"], true);
    assert_eq!(json["company"], "Acme");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_listed_newest_first(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;
    for (company, start) in [
        ("Early Corp", "2015-01-01T00:00:00Z"),
        ("Late Corp", "2021-06-01T00:00:00Z"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/profiles/{profile_id}/work"),
            json!({"company": company, "position": "Engineer", "start_date": start}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let list = body_json(get(app, &format!("/api/v1/profiles/{profile_id}/work")).await).await;
    let companies: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["company"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(companies, ["Late Corp", "Early Corp"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_requires_start_date(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/work"),
        json!({"company": "Acme", "position": "Engineer"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_url_scheme_is_validated(pool: PgPool) {
    let profile_id = create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/links"),
        json!({"platform": "FTP", "url": "ftp://bad"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/links"),
        json!({"platform": "Site", "url": "https://good.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/links/{id}"),
        json!({"url": "ftp://still-bad"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", json!(["not", "an", "object"])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
