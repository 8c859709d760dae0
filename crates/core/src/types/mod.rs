//! Core types for the Yahrzeit client.
//!
//! This module provides type-safe wrappers for form values, server responses
//! and routing.

pub mod credentials;
pub mod csrf;
pub mod password;
pub mod route;
pub mod status;
pub mod sunset;
pub mod view;

pub use credentials::{Credentials, CredentialsError, NewAccount};
pub use csrf::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, CsrfToken, CsrfTokenError};
pub use password::{MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS, PasswordError, validate_password};
pub use route::{Destination, Endpoint};
pub use status::{ActionResult, ActionStatus, SUCCESS_STATUS};
pub use sunset::{LatLng, LookupForm, PLACE_FIELDS, Place, SunsetLabels, SunsetQuery, SunsetTime};
pub use view::{ResultAction, ViewMode};
