//! Session state reported by the identity provider.
//!
//! The landing page never decides whether a visitor is signed in. The identity
//! provider reports a [`SessionState`], and the navigation bar renders the
//! [`AuthControl`]s of the matching [`AuthSlot`].

use serde::{Deserialize, Serialize};

/// Where the visitor lands after signing out from the user menu.
pub const SIGN_OUT_REDIRECT: &str = "/";

/// Public profile of the signed-in visitor, as exposed by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl UserSummary {
    /// Name shown in the user menu, falling back to a generic label.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Account")
    }

    /// Single uppercase letter for the avatar when there is no image.
    pub fn initial(&self) -> char {
        self.label()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Authentication state of the current visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(UserSummary),
}

impl SessionState {
    pub fn from_user(user: Option<UserSummary>) -> Self {
        match user {
            Some(user) => SessionState::SignedIn(user),
            None => SessionState::SignedOut,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    pub fn user(&self) -> Option<&UserSummary> {
        match self {
            SessionState::SignedIn(user) => Some(user),
            SessionState::SignedOut => None,
        }
    }

    pub fn slot(&self) -> AuthSlot {
        match self {
            SessionState::SignedOut => AuthSlot::SignedOut,
            SessionState::SignedIn(_) => AuthSlot::SignedIn,
        }
    }
}

/// Which of the two mutually exclusive header views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthSlot {
    SignedOut,
    SignedIn,
}

/// A control rendered inside an [`AuthSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthControl {
    SignIn,
    SignUp,
    UserMenu,
}

impl AuthSlot {
    /// Controls of this slot, in display order.
    pub fn controls(&self) -> &'static [AuthControl] {
        match self {
            AuthSlot::SignedOut => &[AuthControl::SignIn, AuthControl::SignUp],
            AuthSlot::SignedIn => &[AuthControl::UserMenu],
        }
    }
}

impl AuthControl {
    pub fn label(&self) -> &'static str {
        match self {
            AuthControl::SignIn => "Sign In",
            AuthControl::SignUp => "Sign Up",
            AuthControl::UserMenu => "Open user menu",
        }
    }
}

/// How the identity provider presents its sign-in / sign-up flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignInMode {
    #[default]
    Modal,
    Redirect,
}

impl SignInMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignInMode::Modal => "modal",
            SignInMode::Redirect => "redirect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserSummary {
        UserSummary {
            id: "user_1".to_string(),
            display_name: Some("alice".to_string()),
            image_url: None,
        }
    }

    #[test]
    fn test_signed_out_shows_entry_points_only() {
        let controls = SessionState::SignedOut.slot().controls();
        assert_eq!(controls, &[AuthControl::SignIn, AuthControl::SignUp]);
        assert!(!controls.contains(&AuthControl::UserMenu));
    }

    #[test]
    fn test_signed_in_shows_user_menu_only() {
        let controls = SessionState::SignedIn(alice()).slot().controls();
        assert_eq!(controls, &[AuthControl::UserMenu]);
        assert!(!controls.contains(&AuthControl::SignIn));
        assert!(!controls.contains(&AuthControl::SignUp));
    }

    #[test]
    fn test_slots_are_disjoint() {
        let out = AuthSlot::SignedOut.controls();
        let inside = AuthSlot::SignedIn.controls();
        assert!(out.iter().all(|c| !inside.contains(c)));
    }

    #[test]
    fn test_from_user() {
        assert_eq!(SessionState::from_user(None), SessionState::SignedOut);
        let state = SessionState::from_user(Some(alice()));
        assert!(state.is_signed_in());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("user_1"));
    }

    #[test]
    fn test_user_payload_from_provider() {
        let json = r#"{"id":"user_2","display_name":"Bob Smith","image_url":"https://img.example/b.png"}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.label(), "Bob Smith");
        assert_eq!(user.initial(), 'B');

        let bare: UserSummary = serde_json::from_str(r#"{"id":"user_3"}"#).unwrap();
        assert_eq!(bare.display_name, None);
        assert_eq!(bare.label(), "Account");
        assert_eq!(bare.initial(), 'A');
    }

    #[test]
    fn test_blank_display_name_falls_back() {
        let user = UserSummary {
            display_name: Some("   ".to_string()),
            ..alice()
        };
        assert_eq!(user.label(), "Account");
    }

    #[test]
    fn test_sign_out_returns_to_root() {
        assert_eq!(SIGN_OUT_REDIRECT, "/");
        assert_eq!(SignInMode::default().as_str(), "modal");
    }
}
