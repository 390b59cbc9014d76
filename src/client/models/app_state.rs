use chrono::{DateTime, Local};
use serde_json::Value;

use crate::client::models::content::{Project, Question, Resource};

/// Topic the questions view assumes when nothing else is available.
pub const DEFAULT_TOPIC: &str = "machine learning";

/// Topic the results area adopts when no navigation state was supplied.
pub const FALLBACK_TOPIC: &str = "JavaScript";

pub const QUESTIONS_FETCH_ERROR: &str = "Failed to load AI interview questions";
pub const PROJECTS_FETCH_ERROR: &str = "Failed to load AI project suggestions";
pub const RESOURCES_FETCH_ERROR: &str = "Failed to load AI resource suggestions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    TopicInput,
    Results(Section),
}

/// The sub-views of the results area. Dispatch is exclusive: exactly one
/// section is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    GapAnalysis,
    Resources,
    Projects,
    AiResources,
    InterviewQuestions,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::GapAnalysis,
        Section::Resources,
        Section::Projects,
        Section::AiResources,
        Section::InterviewQuestions,
    ];

    /// Resolve a sub-path of the results area. Unknown paths land on the
    /// root section, which doubles as the redirect target.
    pub fn from_path(path: &str) -> Section {
        match path.trim().trim_end_matches('/') {
            "/resources" => Section::Resources,
            "/projects" => Section::Projects,
            "/ai-resources" => Section::AiResources,
            "/interview-questions" => Section::InterviewQuestions,
            _ => Section::GapAnalysis,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Section::GapAnalysis => "/",
            Section::Resources => "/resources",
            Section::Projects => "/projects",
            Section::AiResources => "/ai-resources",
            Section::InterviewQuestions => "/interview-questions",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::GapAnalysis => "Gap Analysis",
            Section::Resources => "Resources",
            Section::Projects => "Projects",
            Section::AiResources => "AI Resources",
            Section::InterviewQuestions => "Interview Questions",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Section::GapAnalysis => "🧭",
            Section::Resources => "📚",
            Section::Projects => "🛠️",
            Section::AiResources => "🤖",
            Section::InterviewQuestions => "💬",
        }
    }
}

/// One-shot bundle handed over by the screen that navigated into the
/// results area. Consumed at adoption time, never re-read.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub topic: Option<String>,
    pub knowledge_input: Option<String>,
    pub ai_output: Option<Value>,
}

/// Shared context of the results area for one routed session.
#[derive(Debug, Clone, Default)]
pub struct ResultsContext {
    pub topic: String,
    pub knowledge: String,
    pub ai_output: Option<Value>,
    /// Set when no real topic arrived; keeps the sample-data banner up
    /// until the user navigates back in with real state.
    pub demo: bool,
}

impl ResultsContext {
    pub fn from_navigation(state: Option<NavigationState>) -> Self {
        let nav = state.unwrap_or_default();
        let (topic, demo) = match nav.topic.filter(|t| !t.trim().is_empty()) {
            Some(topic) => (topic, false),
            None => (FALLBACK_TOPIC.to_string(), true),
        };
        Self {
            topic,
            knowledge: nav.knowledge_input.unwrap_or_default(),
            ai_output: nav.ai_output,
            demo,
        }
    }
}

/// Resolve the topic a fetching view uses. A routed topic wins when
/// present; otherwise the stored preference, then the view default.
pub fn effective_topic(routed: &str, stored: Option<&str>) -> String {
    if !routed.trim().is_empty() {
        return routed.to_string();
    }
    match stored {
        Some(stored) if !stored.trim().is_empty() => stored.to_string(),
        _ => DEFAULT_TOPIC.to_string(),
    }
}

/// Presentation lifecycle of a fetching view. Exactly one variant holds
/// at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Fetch lifecycle plus a generation counter. Completions echo the
/// counter; anything older than the latest generation is dropped.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    pub topic: String,
    pub phase: FetchPhase<T>,
    seq: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            topic: String::new(),
            phase: FetchPhase::Loading,
            seq: 0,
        }
    }
}

impl<T> FetchState<T> {
    /// Start a fetch for `topic` and return the generation number the
    /// completion must echo.
    pub fn begin_fetch(&mut self, topic: String) -> u64 {
        self.topic = topic;
        self.phase = FetchPhase::Loading;
        self.seq += 1;
        self.seq
    }

    /// Apply a completion. Returns false when it was stale and ignored.
    pub fn apply(&mut self, seq: u64, outcome: Result<T, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.phase = match outcome {
            Ok(value) => FetchPhase::Loaded(value),
            Err(message) => FetchPhase::Failed(message),
        };
        true
    }
}

/// State of the interview-questions accordion.
#[derive(Debug, Clone, Default)]
pub struct InterviewQuestionsState {
    pub fetch: FetchState<Vec<Question>>,
    /// Id of the single expanded entry, if any.
    pub expanded: Option<String>,
    pub loaded_at: Option<DateTime<Local>>,
}

impl InterviewQuestionsState {
    pub fn begin_fetch(&mut self, topic: String) -> u64 {
        self.expanded = None;
        self.loaded_at = None;
        self.fetch.begin_fetch(topic)
    }

    pub fn apply(&mut self, seq: u64, outcome: Result<Vec<Question>, String>) {
        if self.fetch.apply(seq, outcome) {
            self.expanded = None;
            if matches!(self.fetch.phase, FetchPhase::Loaded(_)) {
                self.loaded_at = Some(Local::now());
            }
        }
    }

    /// Accordion semantics: selecting a collapsed entry expands it and
    /// collapses any other; selecting the expanded entry collapses it.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GapAppState {
    pub page: AppState,
    pub topic_input: String,
    pub knowledge_input: String,
    pub analyzing: bool,
    pub analysis_error: Option<String>,
    pub context: ResultsContext,
    pub questions: InterviewQuestionsState,
    pub projects: FetchState<Vec<Project>>,
    pub ai_resources: FetchState<Vec<Resource>>,
}
