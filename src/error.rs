use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Connection, timeout, DNS or body read failure. Never suppressed.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{status} resource not found ({endpoint})")]
    NotFound { status: StatusCode, endpoint: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response was 2xx but did not match the expected shape. Never suppressed.
    #[error("JSON deserialization error: {0}")]
    JSON(#[from] JSONError),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("invalid base url {url}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("API key is not a valid header value: {0}")]
    ApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("client has been closed")]
    Closed,
}

impl Error {
    /// HTTP status reported by the remote API, if the failure came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound { status, .. } => Some(*status),
            Error::Api(e) => Some(e.status),
            Error::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the error is an API-level negative answer that suppress mode turns into `None`.
    pub fn is_suppressible(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::Api(_))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("API returned {status} ({endpoint}){}", match message { Some(m) => format!(": {m}"), None => "".into() })]
pub struct ApiError {
    pub status: StatusCode,
    pub endpoint: String,
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, endpoint: &str, message: Option<String>) -> Self {
        Self {
            status,
            endpoint: endpoint.into(),
            message,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({endpoint})")]
pub struct JSONError {
    endpoint: String,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(endpoint: &str, source: serde_json::Error) -> Self {
        Self {
            endpoint: endpoint.into(),
            source,
        }
    }
}
