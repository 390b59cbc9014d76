pub mod ai_resources;
pub mod gap_analysis;
pub mod interview_questions;
pub mod projects;
pub mod resources;
pub mod results;
pub mod topic_input;
