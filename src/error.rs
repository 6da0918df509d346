use reqwest::StatusCode;
use thiserror::Error;

/// Problems with the local configuration file. All of them abort the run
/// before any request is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Empty AccessToken")]
    EmptyAccessToken,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request URL or headers could not be built.
    #[error("Unable to build request: {0}")]
    RequestConstruction(String),

    /// The network call itself failed (DNS, connect, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The control request was answered with anything but 200.
    #[error("failed: remote service answered {0}")]
    RemoteFailure(StatusCode),

    #[error("Choose flag -d, -a, -u or -b")]
    Usage,

    #[error("Unable to write output: {0}")]
    Console(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::RequestConstruction(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error::RequestConstruction(err.to_string())
    }
}
