use clap::{Parser, Subcommand};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser, Debug)]
#[command(name = "cafe_likes")]
#[command(about = "Toggles the like state of a cafe", long_about = None)]
pub struct Cli {
    /// Base URL of the server exposing /api/likes and /api/unlike.
    #[arg(long, env = "LIKES_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Raw `Cookie` header carrying a logged-in session.
    #[arg(long, env = "LIKES_SESSION_COOKIE")]
    pub session_cookie: Option<String>,

    #[arg(long, env = "LIKES_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print whether the cafe is currently liked.
    Status { cafe_id: String },
    /// Click the like button once and print the resulting markup.
    Toggle { cafe_id: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub session_cookie: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            session_cookie: None,
            request_timeout: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            session_cookie: cli.session_cookie.clone().filter(|c| !c.trim().is_empty()),
            request_timeout: cli.timeout_secs.map(Duration::from_secs),
        }
    }
}
