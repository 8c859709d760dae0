//! Result-page view modes and the actions each one offers.

use serde::{Deserialize, Serialize};

use super::route::{Destination, Endpoint};

/// How the result page was rendered.
///
/// Guests are offered account creation or login; signed-in users can save
/// the result straight to their dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Guest,
    Authenticated,
}

impl ViewMode {
    /// Actions wired for this mode.
    #[must_use]
    pub const fn actions(self) -> &'static [ResultAction] {
        match self {
            Self::Guest => &[ResultAction::CreateAccount, ResultAction::Login],
            Self::Authenticated => &[ResultAction::SaveResult],
        }
    }

    /// Whether `action` is wired for this mode.
    #[must_use]
    pub fn offers(self, action: ResultAction) -> bool {
        self.actions().contains(&action)
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Authenticated => write!(f, "authenticated"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "authenticated" => Ok(Self::Authenticated),
            _ => Err(format!("invalid view mode: {s}")),
        }
    }
}

/// A button on the result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultAction {
    /// Keep the result and go create an account.
    CreateAccount,
    /// Keep the result and go log in.
    Login,
    /// Save the result for the signed-in user.
    SaveResult,
}

impl ResultAction {
    /// Id of the button element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::CreateAccount => "create-acct",
            Self::Login => "login",
            Self::SaveResult => "save-res",
        }
    }

    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::CreateAccount | Self::Login => Endpoint::ActivateResult,
            Self::SaveResult => Endpoint::SaveResult,
        }
    }

    #[must_use]
    pub const fn destination(self) -> Destination {
        match self {
            Self::CreateAccount => Destination::CreateAccountForm,
            Self::Login => Destination::LoginForm,
            Self::SaveResult => Destination::Dashboard,
        }
    }
}

impl std::fmt::Display for ResultAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateAccount => write!(f, "create-account"),
            Self::Login => write!(f, "login"),
            Self::SaveResult => write!(f, "save"),
        }
    }
}

impl std::str::FromStr for ResultAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create-account" => Ok(Self::CreateAccount),
            "login" => Ok(Self::Login),
            "save" => Ok(Self::SaveResult),
            _ => Err(format!("invalid result action: {s}")),
        }
    }
}
