//! State owned by one dashboard session.
//!
//! A session acquires the payload once, then derives the displayed view from it
//! every time the user applies the current criteria.

use tracing::debug;

use crate::{
    error::FetchError,
    filter::{FilterCriteria, apply_filter},
    model::{DayForecast, WeatherPayload},
    source::WeatherSource,
};

#[derive(Debug)]
pub struct Session {
    /// `None` until the one acquisition attempt has completed.
    acquisition: Option<Result<WeatherPayload, FetchError>>,
    criteria: FilterCriteria,
    view: Vec<DayForecast>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            acquisition: None,
            criteria: FilterCriteria::default(),
            view: Vec::new(),
        }
    }

    /// Acquire the payload from `source`.
    ///
    /// Only the first call reaches the source; later calls hand back the
    /// stored outcome. On success the view starts out as every day.
    pub async fn load(&mut self, source: &dyn WeatherSource) -> Result<&WeatherPayload, &FetchError> {
        let outcome = match self.acquisition.take() {
            Some(outcome) => outcome,
            None => {
                let outcome = source.fetch().await;
                if let Ok(payload) = &outcome {
                    self.view = payload.days.clone();
                }
                outcome
            }
        };

        self.acquisition.insert(outcome).as_ref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria. The view is not recomputed until
    /// [`Session::apply_filters`] is called.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Recompute the view from the payload and the current criteria.
    ///
    /// Without a payload this does nothing and the current view stays.
    pub fn apply_filters(&mut self) -> &[DayForecast] {
        if let Some(Ok(payload)) = &self.acquisition {
            self.view = apply_filter(&payload.days, &self.criteria);
            debug!(
                total = payload.days.len(),
                shown = self.view.len(),
                "filters applied"
            );
        }
        &self.view
    }

    pub fn view(&self) -> &[DayForecast] {
        &self.view
    }

    pub fn payload(&self) -> Option<&WeatherPayload> {
        match &self.acquisition {
            Some(Ok(payload)) => Some(payload),
            _ => None,
        }
    }

    /// The user-visible message for a failed acquisition.
    pub fn error(&self) -> Option<String> {
        match &self.acquisition {
            Some(Err(err)) => Some(err.to_string()),
            _ => None,
        }
    }
}
