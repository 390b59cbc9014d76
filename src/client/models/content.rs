//! Payload types exchanged with the AI generation backend.

use serde::{Deserialize, Serialize};

/// Difficulty tier attached to generated questions and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One interview question as delivered by the backend. The `id` is opaque
/// and only used to track which entry is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// A suggested learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub kind: Option<String>,
}

/// A practice project suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
}

/// Body of the per-topic generator endpoints.
#[derive(Debug, Serialize)]
pub struct TopicRequest<'a> {
    pub topic: &'a str,
}

/// Body of the gap-analysis endpoint.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub topic: &'a str,
    pub knowledge: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct ResourcesResponse {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_questions_payload_decodes() {
        let payload = json!({
            "questions": [
                {
                    "id": "q1",
                    "question": "What is ownership?",
                    "answer": "Each value has a single owner.",
                    "difficulty": "Beginner"
                },
                {
                    "id": "q2",
                    "question": "Explain pinning.",
                    "answer": "Pinned values may not move in memory.",
                    "difficulty": "Advanced"
                }
            ]
        });

        let decoded: QuestionsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(decoded.questions.len(), 2);
        assert_eq!(decoded.questions[0].difficulty, Difficulty::Beginner);
        assert_eq!(decoded.questions[1].id, "q2");
    }

    #[test]
    fn test_resource_kind_is_optional() {
        let payload = json!({
            "resources": [
                { "title": "The Book", "url": "https://doc.rust-lang.org/book/" },
                { "title": "A talk", "url": "https://example.com", "kind": "video" }
            ]
        });

        let decoded: ResourcesResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(decoded.resources[0].kind, None);
        assert_eq!(decoded.resources[1].kind.as_deref(), Some("video"));
    }

    #[test]
    fn test_topic_request_body_shape() {
        let body = serde_json::to_value(TopicRequest { topic: "Rust" }).unwrap();
        assert_eq!(body, json!({ "topic": "Rust" }));
    }

    #[test]
    fn test_analysis_request_body_shape() {
        let body = serde_json::to_value(AnalysisRequest {
            topic: "Rust",
            knowledge: "I know C.",
        })
        .unwrap();
        assert_eq!(body, json!({ "topic": "Rust", "knowledge": "I know C." }));
    }
}
