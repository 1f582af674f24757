//! API Configuration
//!
//! Where the backend lives. `STAYHUB_API_BASE` is baked in at compile
//! time for hosted builds; without it the client talks to the local
//! backend. Uploaded images are served from the same base.

const LOCAL_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// REST endpoint base, no trailing slash required
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: option_env!("STAYHUB_API_BASE")
                .unwrap_or(LOCAL_API_BASE)
                .to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
