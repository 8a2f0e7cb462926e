use std::sync::Arc;

use log::warn;

use super::coach_provider::CoachProviderTrait;
use async_trait::async_trait;

/// Returned when the provider is unreachable or errors out.
const FALLBACK_RESPONSE: &str =
    "I can't coach you right now, but that's no excuse to stop working toward your goal!";

/// Returned when the provider answers with an empty message.
const EMPTY_RESPONSE: &str = "Stop making excuses and get to work!";

/// Trait for coach service operations
#[async_trait]
pub trait CoachServiceTrait: Send + Sync {
    async fn chat(&self, message: &str, goal_name: &str) -> String;
}

/// Service wrapping the coach provider with canned fallbacks.
pub struct CoachService {
    provider: Arc<dyn CoachProviderTrait>,
}

impl CoachService {
    pub fn new(provider: Arc<dyn CoachProviderTrait>) -> Self {
        CoachService { provider }
    }
}

#[async_trait]
impl CoachServiceTrait for CoachService {
    /// Never fails: provider errors are logged and degrade to a canned line.
    async fn chat(&self, message: &str, goal_name: &str) -> String {
        match self.provider.generate(message, goal_name).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => EMPTY_RESPONSE.to_string(),
            Err(e) => {
                warn!("Coach provider failed: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}
