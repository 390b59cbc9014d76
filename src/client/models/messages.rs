use serde_json::Value;

use crate::client::models::app_state::Section;
use crate::client::models::content::{Project, Question, Resource};

#[derive(Debug, Clone)]
pub enum Message {
    // Topic-input screen
    TopicInputChanged(String),
    KnowledgeInputChanged(String),
    SubmitAnalysis,
    AnalysisResult { success: bool, message: String, report: Option<Value> },
    OpenSampleResults,
    // Results navigation
    OpenSection(Section),
    GoBack,
    // Interview questions
    ToggleQuestion(String),
    QuestionsLoaded { seq: u64, outcome: Result<Vec<Question>, String> },
    // Sibling generators
    ProjectsLoaded { seq: u64, outcome: Result<Vec<Project>, String> },
    AiResourcesLoaded { seq: u64, outcome: Result<Vec<Resource>, String> },
}
