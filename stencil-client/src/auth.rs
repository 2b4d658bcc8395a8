//! Access token handling

/// Authorization scheme picked for an access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessToken {
    /// Looks like a JWT (starts with `ey`)
    Bearer(String),
    /// Anything else is taken as a pre-encoded basic credential
    Basic(String),
}

impl AccessToken {
    /// Classify a raw token, `None` for an empty one
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else if token.starts_with("ey") {
            Some(AccessToken::Bearer(token.to_string()))
        } else {
            Some(AccessToken::Basic(token.to_string()))
        }
    }

    /// Value of the `Authorization` header
    pub fn header_value(&self) -> String {
        match self {
            AccessToken::Bearer(token) => format!("Bearer {}", token),
            AccessToken::Basic(token) => format!("Basic {}", token),
        }
    }
}
