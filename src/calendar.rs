//! Week options for the demand forecast form.

use std::rc::Rc;

use chrono::{Datelike, Month, NaiveDate};
use yew::Reducible;

use crate::api::DemandBackend;
use crate::error::{AppError, ValidationError};

pub const YEAR_OPTIONS: std::ops::RangeInclusive<i32> = 2025..=2029;

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::InvalidMonth { month })
}

/// Gregorian day count, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|n| n.signed_duration_since(first).num_days() as u32)
        .ok_or(ValidationError::InvalidMonth { month })
}

/// Number of Sunday-started calendar rows the month touches.
pub fn weeks_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    let offset = first_of_month(year, month)?.weekday().num_days_from_sunday();
    let days = days_in_month(year, month)?;
    Ok((days + offset).div_ceil(7))
}

pub fn week_options(year: i32, month: u32) -> Result<Vec<u32>, ValidationError> {
    Ok((1..=weeks_in_month(year, month)?).collect())
}

pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DemandQuery {
    pub product_id: Option<i64>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub week: Option<u32>,
    pub weeks: Vec<u32>,
}

/// Select values arrive as strings; an empty or unparsable value means "unselected".
pub enum DemandAction {
    Product(String),
    Year(String),
    Month(String),
    Week(String),
}

impl DemandQuery {
    pub fn apply(mut self, action: DemandAction) -> Self {
        match action {
            DemandAction::Product(raw) => self.product_id = raw.trim().parse().ok(),
            DemandAction::Year(raw) => {
                self.year = raw.trim().parse().ok();
                self.refresh_weeks();
            }
            DemandAction::Month(raw) => {
                self.month = raw.trim().parse().ok();
                self.refresh_weeks();
            }
            DemandAction::Week(raw) => {
                self.week = raw
                    .trim()
                    .parse()
                    .ok()
                    .filter(|w| self.weeks.contains(w));
            }
        }
        self
    }

    /// Week list follows (year, month); the chosen week never survives a change.
    fn refresh_weeks(&mut self) {
        self.week = None;
        self.weeks = match (self.year, self.month) {
            (Some(year), Some(month)) => week_options(year, month).unwrap_or_default(),
            _ => Vec::new(),
        };
    }

    pub fn is_complete(&self) -> bool {
        self.product_id.is_some() && self.year.is_some() && self.month.is_some() && self.week.is_some()
    }
}

impl Reducible for DemandQuery {
    type Action = DemandAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// A prediction together with the selection it was made for.
#[derive(Clone, PartialEq, Debug)]
pub struct Forecast {
    pub product_id: i64,
    pub week: u32,
    pub demand: f64,
}

impl Forecast {
    pub fn caption(&self) -> String {
        format!("For Product ID {} - Week {}", self.product_id, self.week)
    }
}

/// Predicted demand for a complete query. Incomplete queries never reach the backend.
pub async fn predict<B: DemandBackend>(backend: &B, query: &DemandQuery) -> Result<Forecast, AppError> {
    let (product_id, month, week) = match (query.product_id, query.year, query.month, query.week) {
        (Some(p), Some(_), Some(m), Some(w)) => (p, m, w),
        (None, ..) => return Err(ValidationError::MissingValue { field: "product" }.into()),
        (_, None, ..) => return Err(ValidationError::MissingValue { field: "year" }.into()),
        (_, _, None, _) => return Err(ValidationError::MissingValue { field: "month" }.into()),
        (.., None) => return Err(ValidationError::MissingValue { field: "week" }.into()),
    };
    let prediction = backend.predict_demand(product_id, month, week).await?;
    Ok(Forecast {
        product_id,
        week,
        demand: prediction.predicted_demand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::model::DemandPrediction;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(2025, 2, 28, 5)]
    #[case(2028, 2, 29, 5)]
    #[case(2026, 2, 28, 4)]
    #[case(2024, 2, 29, 5)]
    #[case(1900, 2, 28, 5)]
    #[case(2000, 2, 29, 5)]
    #[case(2025, 3, 31, 6)]
    #[case(2025, 6, 30, 5)]
    #[case(2025, 11, 30, 6)]
    #[case(2025, 12, 31, 5)]
    fn gregorian_weeks(#[case] year: i32, #[case] month: u32, #[case] days: u32, #[case] weeks: u32) {
        assert_eq!(days_in_month(year, month), Ok(days));
        assert_eq!(weeks_in_month(year, month), Ok(weeks));
    }

    #[test]
    fn february_2025_starts_on_saturday() {
        let first = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(first.weekday().num_days_from_sunday(), 6);
        assert_eq!(week_options(2025, 2), Ok(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn invalid_month_is_reported() {
        assert_eq!(weeks_in_month(2025, 13), Err(ValidationError::InvalidMonth { month: 13 }));
        assert_eq!(days_in_month(2025, 0), Err(ValidationError::InvalidMonth { month: 0 }));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn weeks_wait_for_both_year_and_month() {
        let query = DemandQuery::default().apply(DemandAction::Year("2025".to_string()));
        assert!(query.weeks.is_empty());
        let query = query.apply(DemandAction::Month("3".to_string()));
        assert_eq!(query.weeks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn changing_year_or_month_resets_week() {
        let query = DemandQuery::default()
            .apply(DemandAction::Year("2025".to_string()))
            .apply(DemandAction::Month("3".to_string()))
            .apply(DemandAction::Week("6".to_string()));
        assert_eq!(query.week, Some(6));

        let query = query.apply(DemandAction::Month("2".to_string()));
        assert_eq!(query.week, None);
        assert_eq!(query.weeks, vec![1, 2, 3, 4, 5]);

        let query = query
            .apply(DemandAction::Week("5".to_string()))
            .apply(DemandAction::Year("2026".to_string()));
        assert_eq!(query.week, None);
        assert_eq!(query.weeks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn clearing_month_drops_week_options() {
        let query = DemandQuery::default()
            .apply(DemandAction::Year("2025".to_string()))
            .apply(DemandAction::Month("3".to_string()))
            .apply(DemandAction::Month(String::new()));
        assert!(query.weeks.is_empty());
        assert_eq!(query.month, None);
    }

    #[test]
    fn week_outside_options_stays_unselected() {
        let query = DemandQuery::default()
            .apply(DemandAction::Year("2026".to_string()))
            .apply(DemandAction::Month("2".to_string()))
            .apply(DemandAction::Week("5".to_string()));
        assert_eq!(query.week, None);
    }

    struct CountingBackend {
        calls: Cell<u32>,
    }

    impl DemandBackend for CountingBackend {
        async fn predict_demand(
            &self,
            _product_id: i64,
            _month: u32,
            week: u32,
        ) -> Result<DemandPrediction, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(DemandPrediction {
                predicted_demand: 10.0 * week as f64,
            })
        }
    }

    #[test]
    fn prediction_requires_a_complete_query() {
        let backend = CountingBackend { calls: Cell::new(0) };
        let partial = DemandQuery::default().apply(DemandAction::Product("4".to_string()));
        assert!(block_on(predict(&backend, &partial)).is_err());
        assert_eq!(backend.calls.get(), 0);

        let full = partial
            .apply(DemandAction::Year("2025".to_string()))
            .apply(DemandAction::Month("6".to_string()))
            .apply(DemandAction::Week("2".to_string()));
        assert!(full.is_complete());
        assert_eq!(
            block_on(predict(&backend, &full)),
            Ok(Forecast { product_id: 4, week: 2, demand: 20.0 })
        );
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn forecast_caption_ignores_later_edits() {
        let backend = CountingBackend { calls: Cell::new(0) };
        let query = DemandQuery::default()
            .apply(DemandAction::Product("4".to_string()))
            .apply(DemandAction::Year("2025".to_string()))
            .apply(DemandAction::Month("3".to_string()))
            .apply(DemandAction::Week("6".to_string()));
        let forecast = block_on(predict(&backend, &query)).unwrap();

        let edited = query.apply(DemandAction::Month("2".to_string()));
        assert_eq!(edited.week, None);
        assert_eq!(forecast.caption(), "For Product ID 4 - Week 6");
        assert_eq!(forecast.demand, 60.0);
    }
}
