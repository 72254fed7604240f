use serde::{Deserialize, Serialize};

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Plain-text password; hashed by the backend.
    pub password: String,
}

/// Body of `POST /employees`. Same shape as registration.
pub type CreateEmployeeRequest = RegisterRequest;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Token issued by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for subsequent calls.
    pub access_token: String,
}

/// Body of `PUT /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Body of `PATCH /users/me/password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Password currently on the account.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Secret123".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn auth_response_reads_access_token() {
        let response: AuthResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(response.access_token, "abc");
    }

    #[test]
    fn change_password_request_field_names() {
        let request = ChangePasswordRequest {
            current_password: "Old12345".into(),
            new_password: "New12345".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["currentPassword"], "Old12345");
        assert_eq!(json["newPassword"], "New12345");
    }
}
