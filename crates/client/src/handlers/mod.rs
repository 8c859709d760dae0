//! Interaction handlers, one per page.
//!
//! - [`AccountFormHandler`] - account-creation form
//! - [`PlaceDateLookupHandler`] - sunset lookup on the calculator form
//! - [`ResultActionHandler`] - buttons on the result page
//!
//! Handlers never share state with each other and send at most one request
//! per event.

pub mod account;
pub mod lookup;
pub mod result;

pub use account::{AccountFormHandler, SubmitOutcome};
pub use lookup::{LookupOutcome, PlaceDateLookupHandler};
pub use result::ResultActionHandler;
