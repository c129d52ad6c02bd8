use thiserror::Error;

/// Errors returned by the ads GraphQL client.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The response had neither `data` nor `errors`.
    #[error("GraphQL response from {endpoint} contained no data")]
    MissingData { endpoint: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid GraphQL endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
