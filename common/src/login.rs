use serde::{Deserialize, Serialize};

/// This is the information sent by the user to login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The authentication endpoint's JSON reply. Every field is defaulted so
/// that an odd payload degrades to a rejection instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<UserInfo>,
}

/// The authenticated user, echoed by the backend. Only `role` matters to
/// the client; the rest is display material for other pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<String>,
}

impl LoginResponse {
    /// The role of the authenticated user, `Membre` when absent.
    pub fn role(&self) -> Role {
        Role::parse(self.user.as_ref().and_then(|user| user.role.as_deref()))
    }
}

/// The role labels issued by the backend. Unknown labels degrade to
/// `Membre`; only `Administrateur` changes the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrateur,
    Presidente,
    Secretaire,
    Tresoriere,
    Membre,
}

impl Role {
    pub fn parse(label: Option<&str>) -> Role {
        match label {
            Some("Administrateur") => Role::Administrateur,
            Some("Présidente") => Role::Presidente,
            Some("Secrétaire") => Role::Secretaire,
            Some("Trésorière") => Role::Tresoriere,
            _ => Role::Membre,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Role::Administrateur => "Administrateur",
            Role::Presidente => "Présidente",
            Role::Secretaire => "Secrétaire",
            Role::Tresoriere => "Trésorière",
            Role::Membre => "Membre",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn role_should_parse_every_backend_label() {
        for role in [
            Role::Administrateur,
            Role::Presidente,
            Role::Secretaire,
            Role::Tresoriere,
            Role::Membre,
        ] {
            assert_that(&Role::parse(Some(role.as_label()))).is_equal_to(role);
        }
    }

    #[test]
    fn role_should_degrade_unknown_labels_to_membre() {
        assert_that(&Role::parse(Some("Superviseur"))).is_equal_to(Role::Membre);
        assert_that(&Role::parse(Some(""))).is_equal_to(Role::Membre);
        assert_that(&Role::parse(None)).is_equal_to(Role::Membre);
    }

    #[test]
    fn login_response_should_deserialize_the_backend_payload() {
        let payload = serde_json::json!({
            "success": true,
            "message": "Connexion réussie",
            "user": {
                "id": 42,
                "username": "aminata",
                "first_name": "Aminata",
                "last_name": "Diallo",
                "email": "aminata@example.org",
                "role": "Présidente"
            }
        });
        let response: LoginResponse =
            serde_json::from_value(payload).expect("a login response");
        assert_that(&response.success).is_true();
        assert_that(&response.role()).is_equal_to(Role::Presidente);
    }

    #[test]
    fn login_response_should_deserialize_a_rejection_without_a_user() {
        let payload = serde_json::json!({
            "success": false,
            "message": "Identifiants incorrects"
        });
        let response: LoginResponse =
            serde_json::from_value(payload).expect("a login response");
        assert_that(&response.success).is_false();
        assert_that(&response.user).is_none();
        assert_that(&response.role()).is_equal_to(Role::Membre);
    }

    #[test]
    fn login_response_should_treat_a_missing_success_flag_as_a_rejection() {
        let response: LoginResponse =
            serde_json::from_value(serde_json::json!({})).expect("a login response");
        assert_that(&response.success).is_false();
    }

    #[test]
    fn login_response_should_tolerate_a_user_without_a_role() {
        let payload = serde_json::json!({
            "success": true,
            "user": { "id": 7, "username": "fatou" }
        });
        let response: LoginResponse =
            serde_json::from_value(payload).expect("a login response");
        assert_that(&response.role()).is_equal_to(Role::Membre);
    }
}
