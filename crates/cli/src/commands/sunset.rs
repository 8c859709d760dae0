//! Sunset-time lookup.
//!
//! # Usage
//!
//! ```bash
//! yahrzeit sunset -d 2024-03-01 -a "Tel Aviv, Israel"
//! ```

use yahrzeit_client::{ApiClient, ClientConfig, LookupOutcome, PlaceDateLookupHandler};
use yahrzeit_core::{LatLng, LookupForm, Place};

use super::CommandError;
use crate::console::ConsolePage;

/// Place as typed on the command line.
pub struct PlaceArgs {
    pub address: Option<String>,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl PlaceArgs {
    fn into_place(self) -> Option<Place> {
        let geometry = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        };
        self.address.map(|formatted_address| Place {
            formatted_address,
            geometry,
            name: self.name,
        })
    }
}

/// Fire a place-selection event with the given date and place.
pub async fn lookup(
    config: &ClientConfig,
    date: Option<String>,
    place: PlaceArgs,
) -> Result<(), CommandError> {
    let api = ApiClient::new(config)?;
    let handler = PlaceDateLookupHandler::attach(api, ConsolePage);
    let form = LookupForm::new(date.unwrap_or_default(), place.into_place());

    match handler.on_place_changed(&form).await? {
        LookupOutcome::Applied(_) => Ok(()),
        LookupOutcome::Incomplete => Err(CommandError::Refused(
            "both a date and an address are needed".to_string(),
        )),
        LookupOutcome::Superseded => Err(CommandError::Refused(
            "lookup was superseded".to_string(),
        )),
    }
}
