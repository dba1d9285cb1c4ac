use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is missing. Set it in the environment before starting the server.")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to the model service timed out")]
    Timeout,

    #[error("the model service rejected the API key ({status})")]
    Unauthorized { status: u16 },

    #[error("the model service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to reach the model service: {0}")]
    Transport(String),

    #[error("failed to decode the model service response: {0}")]
    Malformed(String),

    #[error("Unexpected response format from the model: {0}")]
    UnexpectedShape(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Malformed(error_chain(&err))
        } else {
            Self::Transport(error_chain(&err))
        }
    }
}

/// Joins an error with all of its sources, outermost first.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Please enter a valid question!")]
    EmptyQuestion,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl QueryError {
    /// Text shown to the user in the page's warning or error region.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuestion => self.to_string(),
            Self::Service(ServiceError::UnexpectedShape(_)) => {
                "Unexpected response format from the model.".to_string()
            }
            Self::Service(err) => format!("An error occurred: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        inner: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn error_chain_includes_every_cause() {
        let err = Layer {
            message: "error sending request",
            inner: Some(Box::new(Layer {
                message: "client error (Connect)",
                inner: Some(Box::new(Layer {
                    message: "Connection refused",
                    inner: None,
                })),
            })),
        };
        assert_eq!(
            error_chain(&err),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[test]
    fn error_chain_without_source_is_display() {
        let err = Layer {
            message: "just this",
            inner: None,
        };
        assert_eq!(error_chain(&err), "just this");
    }

    #[test]
    fn service_errors_carry_their_description() {
        let err = QueryError::from(ServiceError::Status {
            status: 500,
            body: "upstream exploded".to_string(),
        });
        assert_eq!(
            err.user_message(),
            "An error occurred: the model service returned 500: upstream exploded"
        );
    }

    #[test]
    fn unexpected_shape_has_fixed_message() {
        let err = QueryError::from(ServiceError::UnexpectedShape("no choices".to_string()));
        assert_eq!(
            err.user_message(),
            "Unexpected response format from the model."
        );
    }
}
