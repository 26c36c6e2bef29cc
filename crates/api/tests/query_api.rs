//! HTTP-level integration tests for the search and aggregation endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_profile, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn add_skill(pool: &PgPool, profile_id: i64, name: &str, level: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/profiles/{profile_id}/skills"),
        json!({"name": name, "level": level}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn add_project(pool: &PgPool, profile_id: i64, body: Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &format!("/api/v1/profiles/{profile_id}/projects"), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_skills_counts_and_orders(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    let bob = create_profile(&pool, "Bob", "bob@x.com").await;
    add_skill(&pool, ada, "Rust", "expert").await;
    add_skill(&pool, bob, "Rust", "beginner").await;
    add_skill(&pool, ada, "SQL", "advanced").await;
    add_skill(&pool, bob, "Go", "advanced").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/skills/top?limit=2").await).await;

    assert_eq!(json["total"], 2);
    assert_eq!(
        json["skills"],
        json!([{"name": "Rust", "count": 2}, {"name": "Go", "count": 1}])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_skills_rejects_out_of_range_limit(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_skill(&pool, ada, "Rust", "expert").await;

    for uri in ["/api/v1/skills/top?limit=0", "/api/v1/skills/top?limit=101"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/skills/top?limit=100").await).await;
    assert_eq!(json["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination_rejects_out_of_range_values(pool: PgPool) {
    for uri in [
        "/api/v1/profiles?limit=0",
        "/api/v1/profiles?limit=500",
        "/api/v1/profiles?offset=-1",
        "/api/v1/projects/all?offset=-3",
        "/api/v1/search?q=a&limit=-5",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_skills_case_insensitive_with_level(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_skill(&pool, ada, "Rust", "expert").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/skills/search?skill=rust").await).await;
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Rust");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/skills/search?skill=rust&level=beginner").await).await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_skills_empty_level_is_ignored(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_skill(&pool, ada, "Rust", "expert").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/skills/search?skill=rust&level=").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_skills_requires_term(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/skills/search?skill=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_by_skill_is_exact_and_case_sensitive(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_project(&pool, ada, json!({"title": "Lower", "technologies": ["python"]})).await;
    add_project(&pool, ada, json!({"title": "Upper", "technologies": ["Python", "SQL"]})).await;
    add_project(&pool, ada, json!({"title": "Py3", "technologies": ["Python3"]})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects?skill=Python").await).await;

    assert_eq!(json["total"], 1);
    assert_eq!(json["projects"][0]["title"], "Upper");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_by_skill_requires_skill(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_search_matches_text_or_technology(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_project(&pool, ada, json!({"title": "Rust Compiler"})).await;
    add_project(
        &pool,
        ada,
        json!({"title": "Engine", "description": "written in rust"}),
    )
    .await;
    add_project(&pool, ada, json!({"title": "Backend", "technologies": ["rust"]})).await;
    add_project(&pool, ada, json!({"title": "Unrelated"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects/search?q=rust").await).await;
    assert_eq!(json["total"], 3);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects/search?q=rust&limit=1").await).await;
    assert_eq!(json["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_projects(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    let bob = create_profile(&pool, "Bob", "bob@x.com").await;
    add_project(&pool, ada, json!({"title": "One"})).await;
    add_project(&pool, bob, json!({"title": "Two"})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects/all").await).await;
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["One", "Two"]);
}

// ---------------------------------------------------------------------------
// Global search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_global_search_tags_and_orders_results(pool: PgPool) {
    let ada = create_profile(&pool, "Graph Ada", "ada@x.com").await;
    add_skill(&pool, ada, "GraphQL", "advanced").await;
    add_project(&pool, ada, json!({"title": "Graph viewer"})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/search?q=graph").await).await;

    assert_eq!(json["query"], "graph");
    assert_eq!(json["total"], 3);
    let types: Vec<_> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, ["profile", "skill", "project"]);
    assert_eq!(json["results"][1]["name"], "GraphQL");
    assert_eq!(json["results"][2]["title"], "Graph viewer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_global_search_profiles_crowd_out_later_groups(pool: PgPool) {
    let first = create_profile(&pool, "Data One", "one@x.com").await;
    create_profile(&pool, "Data Two", "two@x.com").await;
    add_skill(&pool, first, "Data modelling", "expert").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/search?q=data&limit=2").await).await;

    assert_eq!(json["total"], 2);
    for hit in json["results"].as_array().unwrap() {
        assert_eq!(hit["type"], "profile");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_global_search_no_match_is_empty(pool: PgPool) {
    create_profile(&pool, "Ada", "ada@x.com").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=zzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
    assert_eq!(json["results"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_global_search_keeps_surrounding_whitespace(pool: PgPool) {
    create_profile(&pool, "Ada Lovelace", "ada@x.com").await;
    create_profile(&pool, "Lovelace", "solo@x.com").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/search?q=%20Lovelace").await).await;
    assert_eq!(json["query"], " Lovelace");
    assert_eq!(json["total"], 1);
    assert_eq!(json["results"][0]["name"], "Ada Lovelace");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=%20").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["query"], " ");
    assert_eq!(json["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_global_search_requires_query(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Complete profile and stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_profile_nests_collections(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_skill(&pool, ada, "Rust", "expert").await;
    add_project(&pool, ada, json!({"title": "Engine"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/profiles/{ada}/complete")).await).await;

    assert_eq!(json["id"], ada);
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["skills"].as_array().unwrap().len(), 1);
    assert_eq!(json["projects"].as_array().unwrap().len(), 1);
    assert_eq!(json["work_experiences"], json!([]));
    assert_eq!(json["links"], json!([]));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/profiles/999999/complete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_counts_rows(pool: PgPool) {
    let ada = create_profile(&pool, "Ada", "ada@x.com").await;
    add_skill(&pool, ada, "Rust", "expert").await;
    add_skill(&pool, ada, "SQL", "advanced").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/stats").await).await;

    assert_eq!(
        json,
        json!({"profiles": 1, "skills": 2, "projects": 0, "work_experiences": 0, "links": 0})
    );
}
