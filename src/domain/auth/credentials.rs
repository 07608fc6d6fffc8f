//! Credential pair and login outcome

/// Fixed user-facing message for rejected login attempts.
pub const REJECTED_MESSAGE: &str = "Usuário ou senha incorretos!";

/// The accepted username/password combination.
///
/// Constructed once from configuration at startup and never mutated.
/// Comparison is exact string equality: no hashing, no case normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    username: String,
    password: String,
}

impl CredentialPair {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The accepted username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a submitted username/password against this pair.
    ///
    /// Absent form fields arrive as empty strings and never match.
    pub fn check(&self, username: &str, password: &str) -> LoginOutcome {
        if username == self.username && password == self.password {
            LoginOutcome::Authenticated
        } else {
            LoginOutcome::Rejected {
                message: REJECTED_MESSAGE,
            }
        }
    }
}

/// Result of a credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Both fields matched the configured pair
    Authenticated,
    /// Anything else, including empty submissions
    Rejected { message: &'static str },
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
