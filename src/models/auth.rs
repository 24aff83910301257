use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// An authenticated session. Presence of the token is the only thing the
/// client ever checks; there is no expiry handling.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// A login only succeeds when the response carries both token and user.
    pub fn into_session(self) -> Result<Session, String> {
        match (self.token, self.user) {
            (Some(token), Some(user)) => Ok(Session { token, user }),
            _ => Err(self.message.unwrap_or_else(|| "Login failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_needs_token_and_user() {
        let full = LoginResponse {
            token: Some("abc".into()),
            user: Some(User {
                username: "amina".into(),
                email: "amina@example.com".into(),
            }),
            message: None,
        };
        let session = full.into_session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.username, "amina");

        let rejected = LoginResponse {
            token: None,
            user: None,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(rejected.into_session().unwrap_err(), "Invalid credentials");
    }
}
