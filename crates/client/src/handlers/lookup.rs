//! Sunset-time lookup on the calculator form.
//!
//! Changing the date or picking a place fires a lookup once both are known.
//! Lookups are not debounced and in-flight ones are not cancelled, so
//! responses can arrive out of order. Each lookup takes a generation number
//! and only the most recently issued one may touch the page.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, instrument, warn};
use yahrzeit_core::{LookupForm, SunsetLabels, SunsetTime};

use crate::api::YahrzeitApi;
use crate::error::Result;
use crate::page::{
    AFTER_SUNSET_LABEL, BEFORE_SUNSET_LABEL, GENERIC_FAILURE_MESSAGE, Page, TIME_OF_DAY_BLOCK,
};
use crate::request;

/// What a change event led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Date or place missing; nothing was sent.
    Incomplete,
    /// Labels updated and the time-of-day block shown.
    Applied(SunsetLabels),
    /// A newer lookup was issued while this one was in flight.
    Superseded,
}

/// Fetches the sunset time for the chosen date and place.
pub struct PlaceDateLookupHandler<A, P> {
    api: A,
    page: P,
    generation: AtomicU64,
}

impl<A: YahrzeitApi, P: Page> PlaceDateLookupHandler<A, P> {
    /// Attach to a page, hiding the time-of-day block until a sunset time is
    /// known.
    pub fn attach(api: A, page: P) -> Self {
        page.set_visible(TIME_OF_DAY_BLOCK, false);
        Self {
            api,
            page,
            generation: AtomicU64::new(0),
        }
    }

    /// The date input changed.
    ///
    /// # Errors
    ///
    /// See [`Self::refresh`].
    pub async fn on_date_changed(&self, form: &LookupForm) -> Result<LookupOutcome> {
        self.refresh(form).await
    }

    /// The autocomplete widget resolved a place.
    ///
    /// # Errors
    ///
    /// See [`Self::refresh`].
    pub async fn on_place_changed(&self, form: &LookupForm) -> Result<LookupOutcome> {
        self.refresh(form).await
    }

    /// Look up the sunset time for the current form state.
    ///
    /// # Errors
    ///
    /// Returns an error if the latest lookup fails; the user is shown a
    /// generic notice. Failures of superseded lookups are dropped.
    #[instrument(skip_all, fields(date = %form.date))]
    pub async fn refresh(&self, form: &LookupForm) -> Result<LookupOutcome> {
        let Some(query) = form.query() else {
            debug!("Date or place missing, skipping lookup");
            return Ok(LookupOutcome::Incomplete);
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = request::sunset_time(query);
        let result = self.api.send::<SunsetTime>(&request).await;

        if !self.is_latest(generation) {
            debug!(generation, "Discarding superseded sunset lookup");
            return Ok(LookupOutcome::Superseded);
        }

        let time = match result {
            Ok(time) => time,
            Err(e) => {
                warn!(error = %e, "Sunset lookup failed");
                self.page.alert(GENERIC_FAILURE_MESSAGE);
                return Err(e);
            }
        };

        let labels = SunsetLabels::new(&time.sunset_time);
        self.page.set_text(BEFORE_SUNSET_LABEL, &labels.before);
        self.page.set_text(AFTER_SUNSET_LABEL, &labels.after);
        self.page.set_visible(TIME_OF_DAY_BLOCK, true);

        Ok(LookupOutcome::Applied(labels))
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
