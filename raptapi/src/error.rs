use std::fmt;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug)]
pub enum Error {
    Application(Application),
    Session,
    Status(StatusCode, String),
    Transport(String),
    Unauthorized,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Application {
    #[serde(default)]
    pub code:    u32,
    pub message: String,
    #[serde(default)]
    pub id:      Option<String>,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Application(a)    => write!(f, "application error {}: {}", a.code, a.message),
            Error::Session           => write!(f, "not logged in"),
            Error::Status(s, body)   => write!(f, "status {}: {}", s, body),
            Error::Transport(e)      => write!(f, "transport error: {}", e),
            Error::Unauthorized      => write!(f, "unauthorized"),
        }
    }
}

impl From<Application> for Error {
    fn from(err: Application) -> Self {
        Error::Application(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
