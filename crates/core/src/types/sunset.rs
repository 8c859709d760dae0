//! Sunset-time lookup types.
//!
//! The lookup form pairs a calendar date with a place resolved by the
//! places-autocomplete widget. Once both are present a [`SunsetQuery`] can be
//! built and the server answers with a [`SunsetTime`].

use serde::{Deserialize, Serialize};

/// Fields the autocomplete widget is asked to return for a place.
pub const PLACE_FIELDS: [&str; 3] = ["formatted_address", "geometry", "name"];

/// Coordinates of a resolved place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A place resolved by the autocomplete widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Human-readable address, e.g. `Tel Aviv, Israel`.
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: Option<LatLng>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Place {
    /// A place with only its formatted address.
    #[must_use]
    pub fn from_address(formatted_address: impl Into<String>) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            geometry: None,
            name: None,
        }
    }
}

/// Current state of the date field and the autocomplete widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupForm {
    /// Raw value of the date input (`YYYY-MM-DD` from a date picker).
    pub date: String,
    /// Resolved place, if the user picked one.
    pub place: Option<Place>,
}

impl LookupForm {
    #[must_use]
    pub fn new(date: impl Into<String>, place: Option<Place>) -> Self {
        Self {
            date: date.into(),
            place,
        }
    }

    /// Build a query if both the date and the place are present.
    #[must_use]
    pub fn query(&self) -> Option<SunsetQuery> {
        if self.date.trim().is_empty() {
            return None;
        }
        let place = self.place.as_ref()?;
        Some(SunsetQuery {
            date: self.date.clone(),
            location_text: place.formatted_address.clone(),
        })
    }
}

/// Inputs of one sunset-time lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunsetQuery {
    /// Raw date value, passed through unchanged.
    pub date: String,
    /// Formatted address of the resolved place.
    pub location_text: String,
}

/// Response body of `GET api/get-sunset-time/{date}/{address}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunsetTime {
    pub sunset_time: String,
}

/// Text for the two time-of-day labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunsetLabels {
    pub before: String,
    pub after: String,
}

impl SunsetLabels {
    #[must_use]
    pub fn new(sunset_time: &str) -> Self {
        Self {
            before: format!("Before {sunset_time}"),
            after: format!("After {sunset_time}"),
        }
    }
}
