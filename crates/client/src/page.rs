//! The page the handlers act on.
//!
//! A [`Page`] is whatever hosts the forms: a browser binding, the CLI's
//! console, or a recording fake in tests. Handlers only ever navigate, show a
//! blocking alert, set the text of an element, or toggle its visibility.

/// Label showing "Before <sunset>".
pub const BEFORE_SUNSET_LABEL: &str = "before-sunset-label";

/// Label showing "After <sunset>".
pub const AFTER_SUNSET_LABEL: &str = "after-sunset-label";

/// Time-of-day radio block, hidden until a sunset time is known.
pub const TIME_OF_DAY_BLOCK: &str = "TOD-radios";

/// Alert shown when the server refuses a new account.
pub const EMAIL_TAKEN_MESSAGE: &str = "That email is already associated with an account";

/// Alert shown when a request fails for any reason the user can't act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Side effects a handler can have on the page.
///
/// Methods take `&self` so that several in-flight handlers can share one
/// page; implementations use interior mutability.
pub trait Page {
    /// Send the browser to an absolute path.
    fn navigate(&self, path: &str);

    /// Show a blocking message.
    fn alert(&self, message: &str);

    /// Replace the text of an element.
    fn set_text(&self, element_id: &str, text: &str);

    /// Show or hide an element.
    fn set_visible(&self, element_id: &str, visible: bool);
}

impl<P: Page + ?Sized> Page for &P {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn set_text(&self, element_id: &str, text: &str) {
        (**self).set_text(element_id, text);
    }

    fn set_visible(&self, element_id: &str, visible: bool) {
        (**self).set_visible(element_id, visible);
    }
}
