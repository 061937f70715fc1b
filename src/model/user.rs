use serde::{Deserialize, Serialize};

/// The signed-in principal. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
}

/// A seeded username/password pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: &str, password: &str) -> Self {
        Credential {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// The three accounts the portal ships with
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("troy", "20"),
        Credential::new("manar", "28"),
        Credential::new("crryhot", "239"),
    ]
}
