use crate::errors::{Error, Result};
use async_trait::async_trait;
use serde_json::json;

/// Text-generation provider behind the coach.
#[async_trait]
pub trait CoachProviderTrait: Send + Sync {
    async fn generate(&self, message: &str, goal_name: &str) -> Result<String>;
}

const SYSTEM_PROMPT: &str = "You are a brutal, no-nonsense motivational coach. \
The user is working toward this goal: \"{goal}\". Your job is to give tough \
love, call out excuses, and push them to take action. Be direct, firm, and \
motivating without being mean or discouraging. Focus on action and \
accountability. Keep responses under 100 words.";

/// Provider speaking the OpenAI-compatible chat-completions protocol.
pub struct HttpCoachProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpCoachProvider {
    pub fn new(api_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CoachProviderTrait for HttpCoachProvider {
    async fn generate(&self, message: &str, goal_name: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Coach("no API key configured".to_string()))?;

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT.replace("{goal}", goal_name),
                },
                {
                    "role": "user",
                    "content": message,
                },
            ],
            "max_tokens": 150,
            "temperature": 0.8,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Coach(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Coach(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Coach(format!("invalid response body: {}", e)))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::Coach("response contained no message content".to_string()))
    }
}
