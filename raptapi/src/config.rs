use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub url:         String,
    pub credentials: Credentials,
    pub timeout:     Duration,
    pub proxy:       Option<String>,
}

#[derive(Clone)]
pub struct Credentials {
    pub user:     String,
    pub password: String,
}

impl Config {
    pub fn new(url: &str, credentials: Credentials) -> Self {
        Self {
            url:         url.trim_end_matches('/').to_owned(),
            credentials: credentials,
            timeout:     Duration::from_secs(30),
            proxy:       None,
        }
    }
}

impl Credentials {
    pub fn new(user: &str, password: &str) -> Self {
        Self {
            user:     user.to_owned(),
            password: password.to_owned(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
