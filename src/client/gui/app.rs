use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::config::ClientConfig;
use crate::client::models::app_state::{
    effective_topic, AppState, FetchState, GapAppState, InterviewQuestionsState, NavigationState,
    ResultsContext, Section, PROJECTS_FETCH_ERROR, QUESTIONS_FETCH_ERROR, RESOURCES_FETCH_ERROR,
};
use crate::client::models::messages::Message;
use crate::client::services::api_service::ApiService;
use crate::client::utils::topic_store;

pub struct GapApp {
    pub state: GapAppState,
    pub api: Arc<ApiService>,
}

impl Application for GapApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let api = Arc::new(ApiService::new(&config));
        let mut app = GapApp {
            state: GapAppState::default(),
            api,
        };

        // Optional deep link straight into a results section with sample
        // data; unknown paths land on the gap-analysis root.
        let command = match config.start_page.as_deref() {
            Some(path) => {
                let section = Section::from_path(path);
                log::info!("starting at results section '{}'", section.title());
                app.state.context = ResultsContext::from_navigation(None);
                app.open_section(section)
            }
            None => Command::none(),
        };

        (app, command)
    }

    fn title(&self) -> String {
        "GapFinder".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::TopicInputChanged(topic) => {
                self.state.topic_input = topic;
                Command::none()
            }
            Message::KnowledgeInputChanged(knowledge) => {
                self.state.knowledge_input = knowledge;
                Command::none()
            }
            Message::SubmitAnalysis => {
                let topic = self.state.topic_input.trim().to_string();
                if topic.is_empty() {
                    self.state.analysis_error = Some("Enter a topic to analyze".to_string());
                    return Command::none();
                }
                self.state.analyzing = true;
                self.state.analysis_error = None;

                let knowledge = self.state.knowledge_input.trim().to_string();
                let api = self.api.clone();
                Command::perform(
                    async move {
                        match api.generate_gap_analysis(&topic, &knowledge).await {
                            Ok(report) => Message::AnalysisResult {
                                success: true,
                                message: String::new(),
                                report: Some(report),
                            },
                            Err(e) => {
                                log::error!("gap analysis failed: {:#}", e);
                                Message::AnalysisResult {
                                    success: false,
                                    message: "Analysis failed. Check your connection and try again."
                                        .to_string(),
                                    report: None,
                                }
                            }
                        }
                    },
                    |msg| msg,
                )
            }
            Message::AnalysisResult { success, message, report } => {
                self.state.analyzing = false;
                if success {
                    let topic = self.state.topic_input.trim().to_string();
                    if let Err(e) = topic_store::save_topic(&topic) {
                        log::warn!("could not persist topic preference: {:#}", e);
                    }
                    let knowledge = self.state.knowledge_input.trim().to_string();
                    self.state.context = ResultsContext::from_navigation(Some(NavigationState {
                        topic: Some(topic),
                        knowledge_input: if knowledge.is_empty() { None } else { Some(knowledge) },
                        ai_output: report,
                    }));
                    self.open_section(Section::GapAnalysis)
                } else {
                    self.state.analysis_error = Some(message);
                    Command::none()
                }
            }
            Message::OpenSampleResults => {
                self.state.context = ResultsContext::from_navigation(None);
                self.open_section(Section::GapAnalysis)
            }
            Message::OpenSection(section) => self.open_section(section),
            Message::GoBack => {
                // Unconditional return to the topic screen; everything the
                // results area held is discarded.
                self.state.context = ResultsContext::default();
                self.state.questions = InterviewQuestionsState::default();
                self.state.projects = FetchState::default();
                self.state.ai_resources = FetchState::default();
                self.state.page = AppState::TopicInput;
                Command::none()
            }
            Message::ToggleQuestion(id) => {
                self.state.questions.toggle(&id);
                Command::none()
            }
            Message::QuestionsLoaded { seq, outcome } => {
                self.state.questions.apply(seq, outcome);
                Command::none()
            }
            Message::ProjectsLoaded { seq, outcome } => {
                self.state.projects.apply(seq, outcome);
                Command::none()
            }
            Message::AiResourcesLoaded { seq, outcome } => {
                self.state.ai_resources.apply(seq, outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        match self.state.page {
            AppState::TopicInput => crate::client::gui::views::topic_input::view(&self.state),
            AppState::Results(section) => crate::client::gui::views::results::view(&self.state, section),
        }
    }
}

impl GapApp {
    /// Mount one results section. Fetching sections start from a fresh
    /// state and issue exactly one request for their resolved topic.
    fn open_section(&mut self, section: Section) -> Command<Message> {
        self.state.page = AppState::Results(section);
        match section {
            Section::GapAnalysis | Section::Resources => Command::none(),
            Section::InterviewQuestions => {
                self.state.questions = InterviewQuestionsState::default();
                let topic = effective_topic(
                    &self.state.context.topic,
                    topic_store::load_topic().as_deref(),
                );
                let seq = self.state.questions.begin_fetch(topic.clone());
                let api = self.api.clone();
                Command::perform(
                    async move {
                        match api.generate_interview_questions(&topic).await {
                            Ok(questions) => Message::QuestionsLoaded { seq, outcome: Ok(questions) },
                            Err(e) => {
                                log::error!("interview questions fetch failed: {:#}", e);
                                Message::QuestionsLoaded {
                                    seq,
                                    outcome: Err(QUESTIONS_FETCH_ERROR.to_string()),
                                }
                            }
                        }
                    },
                    |msg| msg,
                )
            }
            Section::Projects => {
                self.state.projects = FetchState::default();
                let topic = self.state.context.topic.clone();
                let seq = self.state.projects.begin_fetch(topic.clone());
                let api = self.api.clone();
                Command::perform(
                    async move {
                        match api.generate_projects(&topic).await {
                            Ok(projects) => Message::ProjectsLoaded { seq, outcome: Ok(projects) },
                            Err(e) => {
                                log::error!("project suggestions fetch failed: {:#}", e);
                                Message::ProjectsLoaded {
                                    seq,
                                    outcome: Err(PROJECTS_FETCH_ERROR.to_string()),
                                }
                            }
                        }
                    },
                    |msg| msg,
                )
            }
            Section::AiResources => {
                self.state.ai_resources = FetchState::default();
                let topic = self.state.context.topic.clone();
                let seq = self.state.ai_resources.begin_fetch(topic.clone());
                let api = self.api.clone();
                Command::perform(
                    async move {
                        match api.generate_resources(&topic).await {
                            Ok(resources) => Message::AiResourcesLoaded { seq, outcome: Ok(resources) },
                            Err(e) => {
                                log::error!("resource suggestions fetch failed: {:#}", e);
                                Message::AiResourcesLoaded {
                                    seq,
                                    outcome: Err(RESOURCES_FETCH_ERROR.to_string()),
                                }
                            }
                        }
                    },
                    |msg| msg,
                )
            }
        }
    }
}
