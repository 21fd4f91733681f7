use crate::model::DayForecast;

/// What the user asked to narrow the list of days by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    /// Lower bound, checked against the day's `tempmax`.
    pub min_temp: Option<f64>,
    /// Upper bound, checked against the day's `tempmin`.
    pub max_temp: Option<f64>,
}

impl FilterCriteria {
    /// Build criteria from raw text fields. A bound that does not parse as a
    /// finite number is treated as unset.
    pub fn from_inputs(search_term: &str, min_temp: &str, max_temp: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            min_temp: parse_bound(min_temp),
            max_temp: parse_bound(max_temp),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.min_temp.is_none() && self.max_temp.is_none()
    }

    /// Whether `day` belongs in the filtered view.
    ///
    /// The bounds are paired crosswise: a day meets the minimum if its high
    /// reached it, and meets the maximum if its low stayed under it.
    pub fn matches(&self, day: &DayForecast) -> bool {
        let matches_search = day
            .description
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());
        let above_min = self.min_temp.is_none_or(|min| day.tempmax >= min);
        let below_max = self.max_temp.is_none_or(|max| day.tempmin <= max);

        matches_search && above_min && below_max
    }
}

/// Days from `days` that match `criteria`, in their original order.
pub fn apply_filter(days: &[DayForecast], criteria: &FilterCriteria) -> Vec<DayForecast> {
    days.iter().filter(|day| criteria.matches(day)).cloned().collect()
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
