use thiserror::Error;

/// Problems with what the user typed. Reported back, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a YouTube video link to proceed.")]
    EmptyUrl,

    #[error("Invalid YouTube URL or ID format: {0}")]
    InvalidVideoId(String),

    #[error("Please fill in the Student ID before submitting.")]
    MissingStudentId,

    #[error("Please fill in the Feedback text before submitting.")]
    MissingFeedback,

    #[error("Unknown course: {0}")]
    UnknownCourse(String),
}

/// Failures reported by the comment source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("video not found")]
    NotFound,

    #[error("comments disabled")]
    CommentsDisabled,

    #[error("comment API failure: {0}")]
    Other(String),
}

impl FetchError {
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NotFound => {
                "Error 404: The video was not found or has comments disabled.".to_string()
            }
            FetchError::CommentsDisabled => {
                "Error 403: Comments are disabled for this video.".to_string()
            }
            FetchError::Other(details) => format!(
                "An API error occurred. Please check your API key and permissions. Details: {}",
                details
            ),
        }
    }
}

// Request URLs are dropped before the error reaches users or logs.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Other(err.without_url().to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Anything that can end a single user action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Input(err) => format!("Input Error: {}", err),
            AppError::Fetch(err) => err.user_message(),
        }
    }
}
