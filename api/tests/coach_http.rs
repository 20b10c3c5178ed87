use std::{net::TcpListener, sync::Arc};

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use nutricoach_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn app(gemini_base_url: &str, extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "nutricoach",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        gemini_base_url,
    ];
    argv.extend_from_slice(extra_args);

    let args = Args::parse_from(argv);
    let state = state(Arc::new(args)).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn program_json(days: usize, sessions: usize) -> Value {
    let nutrition: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "jour": format!("Jour {day}"),
                "repas": [{
                    "nom": "Déjeuner",
                    "description_plat": "Dahl de lentilles",
                    "calories": 700,
                    "proteines_g": 30.0,
                    "lipides_g": 15.0,
                    "glucides_g": 95.0
                }],
                "total_kcal_jour": 2200,
                "justification_adaptation": "Végétarien, riche en fibres."
            })
        })
        .collect();

    let workouts: Vec<Value> = (1..=sessions)
        .map(|session| {
            json!({
                "jour_semaine": format!("Séance {session}"),
                "duree_minutes": 45,
                "type_seance": "Force",
                "exercices": ["Pompes 3x12"]
            })
        })
        .collect();

    json!({
        "logs_raisonnement": [
            { "titre": "Calcul des besoins", "details": "TDEE 2700 kcal" },
            { "titre": "Auto-critique", "details": "Aucune violation" }
        ],
        "estimation_kcal_cible": 2200,
        "macros_cible": "30P/30L/40G",
        "plan_nutritionnel": nutrition,
        "plan_sportif": workouts,
        "liste_courses_semaine": ["Lentilles", "Riz basmati"]
    })
}

fn gemini_reply(text: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    }))
}

fn profile_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("goal", "weight_loss"),
        ("sex", "male"),
        ("age", "30"),
        ("weight_kg", "75.0"),
        ("height_cm", "175"),
        ("activity_level", "moderate"),
        ("health_constraints", "Végétarien"),
        ("sport_availability", "3 séances/semaine"),
    ]
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn assert_in_order(html: &str, needles: &[String]) {
    let positions: Vec<usize> = needles
        .iter()
        .map(|needle| html.find(needle.as_str()).unwrap_or_else(|| panic!("{needle} not rendered")))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "sections out of order: {needles:?}"
    );
}

#[tokio::test]
async fn test_form_is_rendered_idle_with_defaults() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&gemini)
        .await;

    let server = app(&gemini.uri(), &[]);
    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<title>Coach IA de Santé et Nutrition</title>"));
    assert!(html.contains("action=\"/\""));
    assert!(html.contains("value=\"30\""));
    assert!(html.contains("value=\"75.0\""));
    assert!(html.contains("value=\"175\""));
    assert!(html.contains("Perte de poids"));
    assert!(!html.contains("id=\"program\""));
    assert!(!html.contains("id=\"failure\""));
}

#[tokio::test]
async fn test_submission_renders_program_in_source_order() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains("Perte de poids"))
        .and(body_string_contains("Végétarien"))
        .and(body_string_contains("3 séances/semaine"))
        .and(body_string_contains("\"response_mime_type\":\"application/json\""))
        .respond_with(gemini_reply(program_json(7, 3).to_string()))
        .expect(1)
        .mount(&gemini)
        .await;

    let server = app(&gemini.uri(), &[]);
    let response = server.post("/").form(&profile_form()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();

    assert_eq!(html.matches("class=\"tab-panel\"").count(), 7);
    assert_eq!(html.matches("class=\"workout\"").count(), 3);
    assert_in_order(&html, &(1..=7).map(|d| format!(">Jour {d}<")).collect::<Vec<_>>());
    assert_in_order(&html, &(1..=3).map(|s| format!(">Séance {s}<")).collect::<Vec<_>>());
    assert!(html.contains("2200 kcal"));
    assert!(html.contains("<li>Riz basmati</li>"));

    // submitted values are kept in the form
    assert!(html.contains("<option value=\"moderate\" selected>"));
    assert!(html.contains(">Végétarien</textarea>"));
}

#[tokio::test]
async fn test_transport_error_renders_failure_state() {
    let server = app(&closed_port_url(), &[]);
    let response = server.post("/").form(&profile_form()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let html = response.text();
    assert!(html.contains("id=\"failure\""));
    assert!(html.contains("Impossible de générer le programme"));
    assert!(html.contains("LLM provider call failed"));
    assert!(!html.contains("id=\"program\""));
    assert!(html.contains("id=\"profile-form\""));
}

#[tokio::test]
async fn test_schema_violation_renders_failure_state() {
    let gemini = MockServer::start().await;
    let mut program = program_json(7, 3);
    program.as_object_mut().unwrap().remove("estimation_kcal_cible");
    Mock::given(method("POST"))
        .respond_with(gemini_reply(program.to_string()))
        .expect(1)
        .mount(&gemini)
        .await;

    let server = app(&gemini.uri(), &[]);
    let response = server.post("/").form(&profile_form()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let html = response.text();
    assert!(html.contains("estimation_kcal_cible"));
    assert!(!html.contains("id=\"program\""));
}

#[tokio::test]
async fn test_invalid_form_is_not_submitted() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(gemini_reply(program_json(7, 3).to_string()))
        .expect(0)
        .mount(&gemini)
        .await;

    let mut form = profile_form();
    form[2] = ("age", "16");

    let server = app(&gemini.uri(), &[]);
    let response = server.post("/").form(&form).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("age must be at least 18"));
    assert!(html.contains("value=\"16\""));
}

#[tokio::test]
async fn test_unparsable_field_keeps_other_values() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(gemini_reply(program_json(7, 3).to_string()))
        .expect(0)
        .mount(&gemini)
        .await;

    let mut form = profile_form();
    form[2] = ("age", "abc");
    form[3] = ("weight_kg", "72.75");

    let server = app(&gemini.uri(), &[]);
    let response = server.post("/").form(&form).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("age must be a whole number"));
    assert!(html.contains("value=\"72.75\""));
    assert!(html.contains("<option value=\"moderate\" selected>"));
    assert!(html.contains(">Végétarien</textarea>"));
    assert!(html.contains(">3 séances/semaine</textarea>"));
}

#[tokio::test]
async fn test_json_endpoint_returns_program() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(gemini_reply(program_json(7, 3).to_string()))
        .expect(1)
        .mount(&gemini)
        .await;

    let server = app(&gemini.uri(), &[]);
    let response = server
        .post("/api/programs")
        .json(&json!({
            "goal": "weight_loss",
            "sex": "male",
            "age": 30,
            "weight_kg": 75.0,
            "height_cm": 175,
            "activity_level": "moderate",
            "health_constraints": "Végétarien",
            "sport_availability": "3 séances/semaine"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["id"].is_string());
    assert_eq!(body["data"]["plan_nutritionnel"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"]["plan_sportif"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["plan_nutritionnel"][6]["jour"], "Jour 7");
}

#[tokio::test]
async fn test_json_endpoint_errors() {
    let server = app(&closed_port_url(), &[]);

    let invalid = server
        .post("/api/programs")
        .json(&json!({
            "goal": "maintenance",
            "sex": "female",
            "age": 12,
            "weight_kg": 40.0,
            "height_cm": 150,
            "activity_level": "light"
        }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = invalid.json();
    assert_eq!(body["code"], "E_VALIDATION");
    assert_eq!(body["message"], "age must be at least 18");

    let failed = server
        .post("/api/programs")
        .json(&json!({
            "goal": "maintenance",
            "sex": "female",
            "age": 40,
            "weight_kg": 60.0,
            "height_cm": 165,
            "activity_level": "light"
        }))
        .await;
    assert_eq!(failed.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = failed.json();
    assert_eq!(body["code"], "E_AGENT_FAILURE");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_root_path_prefixes_every_route() {
    let server = app(
        &closed_port_url(),
        &["--server-root-path", "/coach", "--page-title", "Mon coach"],
    );

    let page = server.get("/coach/").await;
    assert_eq!(page.status_code(), StatusCode::OK);
    let html = page.text();
    assert!(html.contains("action=\"/coach/\""));
    assert!(html.contains("<title>Mon coach</title>"));

    let health = server.get("/coach/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);

    let docs = server.get("/coach/scalar").await;
    assert_eq!(docs.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let server = app(&closed_port_url(), &[]);
    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
