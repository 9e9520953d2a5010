//! # User model for authenticated users
//!
//! [`UserInfo`] is what `GET /auth/verify` returns for a live session cookie. It is
//! owned by the session state: present while authenticated, absent otherwise.
//!
//! The backend is not strict about `user_id` (a UUID string on some deployments, an
//! integer on others) or `credits` (absent on older accounts), so both decode
//! leniently. The helper [`UserInfo::display_name`] returns the username or falls back
//! to the email address.

use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub credits: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
}

impl UserInfo {
    /// Get display name, falling back to email if the username is empty.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Text(String),
    Number(i64),
}

fn string_or_number<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Option::<Id>::deserialize(de)? {
        Some(Id::Text(s)) => s,
        Some(Id::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_id() {
        let user: UserInfo =
            serde_json::from_str(r#"{"username":"ana","email":"ana@x.io","credits":12,"user_id":7}"#)
                .unwrap();
        assert_eq!(user.user_id, "7");
        assert_eq!(user.credits, 12);
        assert_eq!(user.display_name(), "ana");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: UserInfo = serde_json::from_str(r#"{"email":"ana@x.io","user_id":"u-1"}"#).unwrap();
        assert_eq!(user.display_name(), "ana@x.io");
        assert_eq!(user.credits, 0);
    }
}
