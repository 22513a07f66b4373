use serde::{Deserialize, Serialize};

use crate::utils::constants::ADMIN_ROLE;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair issued by POST /auth/login.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub token_type: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

impl UserProfile {
    /// Role gate for admin screens. The backend has emitted "Admin",
    /// "ADMIN" and "admin" across versions, so the comparison ignores case.
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ADMIN_ROLE)
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

/// Envelope for the locally cached profile (see auth_service).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CachedProfile {
    pub user: UserProfile,
    pub cached_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> UserProfile {
        UserProfile {
            id: 1,
            email: "ayesha@example.com".to_string(),
            full_name: Some("Ayesha Khan".to_string()),
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_role_matches_case_insensitively() {
        assert!(user_with_role("admin").is_admin());
        assert!(user_with_role("Admin").is_admin());
        assert!(user_with_role("ADMIN").is_admin());
        assert!(!user_with_role("member").is_admin());
        assert!(!user_with_role("").is_admin());
    }

    #[test]
    fn display_name_prefers_full_name() {
        let mut user = user_with_role("member");
        assert_eq!(user.display_name(), "Ayesha Khan");
        user.full_name = None;
        assert_eq!(user.display_name(), "ayesha@example.com");
    }
}
