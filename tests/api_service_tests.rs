use gapfinder::client::config::ClientConfig;
use gapfinder::client::services::api_service::ApiService;
use mockito::{Matcher, Server};
use serde_json::json;
use url::Url;

fn service_for(server: &Server) -> ApiService {
    let config = ClientConfig {
        api_base_url: Url::parse(&server.url()).expect("mock server url parses"),
        start_page: None,
    };
    ApiService::new(&config)
}

#[tokio::test]
async fn test_questions_fetch_posts_topic_and_decodes_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-interview-questions")
        .match_body(Matcher::Json(json!({ "topic": "Rust" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "questions": [
                    {
                        "id": "q1",
                        "question": "What does the borrow checker enforce?",
                        "answer": "Aliasing xor mutability.",
                        "difficulty": "Intermediate"
                    },
                    {
                        "id": "q2",
                        "question": "When is Box<dyn Trait> needed?",
                        "answer": "When the concrete type is only known at runtime.",
                        "difficulty": "Advanced"
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = service_for(&server);
    let questions = api.generate_interview_questions("Rust").await.unwrap();

    // The mock matched exactly once, so exactly one request went out and
    // its body was {"topic": "Rust"}.
    mock.assert_async().await;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[1].id, "q2");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-interview-questions")
        .with_status(500)
        .with_body("backend exploded")
        .create_async()
        .await;

    let api = service_for(&server);
    let result = api.generate_interview_questions("Rust").await;

    mock.assert_async().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_payload_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-interview-questions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"questions": "not a list"}"#)
        .create_async()
        .await;

    let api = service_for(&server);
    let result = api.generate_interview_questions("Rust").await;

    mock.assert_async().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_sibling_generators_carry_the_same_body_shape() {
    let mut server = Server::new_async().await;
    let projects = server
        .mock("POST", "/generate-projects")
        .match_body(Matcher::Json(json!({ "topic": "Rust" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "projects": [
                    {
                        "title": "CLI task tracker",
                        "description": "Parse args, persist to a file.",
                        "difficulty": "Beginner"
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let resources = server
        .mock("POST", "/generate-resources")
        .match_body(Matcher::Json(json!({ "topic": "Rust" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "resources": [
                    { "title": "The Book", "url": "https://doc.rust-lang.org/book/", "kind": "book" }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = service_for(&server);
    let project_list = api.generate_projects("Rust").await.unwrap();
    let resource_list = api.generate_resources("Rust").await.unwrap();

    projects.assert_async().await;
    resources.assert_async().await;
    assert_eq!(project_list[0].title, "CLI task tracker");
    assert_eq!(resource_list[0].kind.as_deref(), Some("book"));
}

#[tokio::test]
async fn test_gap_analysis_sends_topic_and_knowledge() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-gap-analysis")
        .match_body(Matcher::Json(json!({ "topic": "Rust", "knowledge": "I know C." })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "gaps": ["lifetimes"], "strengths": ["pointers"] }).to_string())
        .create_async()
        .await;

    let api = service_for(&server);
    let report = api.generate_gap_analysis("Rust", "I know C.").await.unwrap();

    mock.assert_async().await;
    assert_eq!(report["gaps"][0], "lifetimes");
}
