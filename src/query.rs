use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{QueryError, ServiceError};
use crate::groq::{ChatClient, Completion};

/// A non-blank question, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QueryError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

pub fn format_prompt(question: &Question) -> String {
    format!(
        "Answer the questions as accurately as possible:\nQuestion: {}",
        question.as_str()
    )
}

#[derive(Clone)]
pub struct QueryHandler {
    client: Arc<dyn ChatClient>,
    model: String,
}

impl QueryHandler {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn ask(&self, input: &str) -> Result<Answer, QueryError> {
        let question = Question::parse(input)?;
        let prompt = format_prompt(&question);

        match self.client.complete(&self.model, &prompt).await {
            Ok(Completion::Answer(text)) => {
                info!(model = %self.model, chars = text.len(), "answer received");
                Ok(Answer { text })
            }
            Ok(Completion::UnexpectedShape(detail)) => {
                warn!(model = %self.model, %detail, "unexpected response shape");
                Err(ServiceError::UnexpectedShape(detail).into())
            }
            Err(err) => {
                warn!(model = %self.model, error = %err, "model service call failed");
                Err(err.into())
            }
        }
    }
}
