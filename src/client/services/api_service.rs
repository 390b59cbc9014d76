//! Client for the AI generation backend. Every endpoint is a single JSON
//! POST exchange carrying the topic; there is no authentication, no retry
//! and no pagination.

use anyhow::{anyhow, bail, Result};
use log::{debug, info};
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::models::content::{
    AnalysisRequest, Project, ProjectsResponse, Question, QuestionsResponse, Resource,
    ResourcesResponse, TopicRequest,
};

pub struct ApiService {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiService {
    pub fn new(config: &ClientConfig) -> Self {
        // No request timeout; a silent backend leaves the view loading.
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| anyhow!("invalid endpoint '{}': {}", path, e))
    }

    /// Generate interview questions for a topic.
    pub async fn generate_interview_questions(&self, topic: &str) -> Result<Vec<Question>> {
        let url = self.endpoint("generate-interview-questions")?;
        debug!("POST {} topic='{}'", url, topic);
        let response = self.client.post(url).json(&TopicRequest { topic }).send().await?;
        if !response.status().is_success() {
            bail!("interview questions endpoint returned {}", response.status());
        }
        let payload: QuestionsResponse = response.json().await?;
        info!("received {} interview questions for '{}'", payload.questions.len(), topic);
        Ok(payload.questions)
    }

    /// Generate practice project suggestions for a topic.
    pub async fn generate_projects(&self, topic: &str) -> Result<Vec<Project>> {
        let url = self.endpoint("generate-projects")?;
        debug!("POST {} topic='{}'", url, topic);
        let response = self.client.post(url).json(&TopicRequest { topic }).send().await?;
        if !response.status().is_success() {
            bail!("projects endpoint returned {}", response.status());
        }
        let payload: ProjectsResponse = response.json().await?;
        info!("received {} project suggestions for '{}'", payload.projects.len(), topic);
        Ok(payload.projects)
    }

    /// Generate learning resource suggestions for a topic.
    pub async fn generate_resources(&self, topic: &str) -> Result<Vec<Resource>> {
        let url = self.endpoint("generate-resources")?;
        debug!("POST {} topic='{}'", url, topic);
        let response = self.client.post(url).json(&TopicRequest { topic }).send().await?;
        if !response.status().is_success() {
            bail!("resources endpoint returned {}", response.status());
        }
        let payload: ResourcesResponse = response.json().await?;
        info!("received {} resource suggestions for '{}'", payload.resources.len(), topic);
        Ok(payload.resources)
    }

    /// Run the gap analysis. The report shape is owned by the backend, so
    /// it is kept as untyped JSON and rendered leniently.
    pub async fn generate_gap_analysis(&self, topic: &str, knowledge: &str) -> Result<serde_json::Value> {
        let url = self.endpoint("generate-gap-analysis")?;
        debug!("POST {} topic='{}'", url, topic);
        let response = self
            .client
            .post(url)
            .json(&AnalysisRequest { topic, knowledge })
            .send()
            .await?;
        if !response.status().is_success() {
            bail!("gap analysis endpoint returned {}", response.status());
        }
        let report = response.json().await?;
        info!("gap analysis completed for '{}'", topic);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> ApiService {
        ApiService {
            client: reqwest::Client::new(),
            base_url: Url::parse(base).unwrap(),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let api = service("https://api.example.com");
        assert_eq!(
            api.endpoint("generate-interview-questions").unwrap().as_str(),
            "https://api.example.com/generate-interview-questions"
        );
    }

    #[test]
    fn test_endpoint_respects_base_path() {
        let api = service("https://api.example.com/v1/");
        assert_eq!(
            api.endpoint("generate-projects").unwrap().as_str(),
            "https://api.example.com/v1/generate-projects"
        );
    }
}
