use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use crate::error::ProximityError;
use crate::models::domain::{Gender, ResultOrder};

/// Allow-list of gender values. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderFilter {
    allowed: BTreeSet<String>,
}

impl GenderFilter {
    /// A filter that lets every contact through
    pub fn any() -> Self {
        Self::default()
    }

    /// Parse a comma-delimited list such as `"male, female"`.
    ///
    /// Tokens are trimmed and blank tokens dropped. Values are kept verbatim,
    /// so matching stays case-sensitive.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => Self::from_values(raw.split(',')),
            None => Self::any(),
        }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        Self { allowed }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Whether a contact with the given gender passes the filter
    #[inline]
    pub fn allows(&self, gender: Option<Gender>) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        gender.map_or(false, |g| self.allowed.contains(g.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}

/// A single proximity query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub reference: Point<f64>,
    pub max_distance: f64,
    pub gender_filter: GenderFilter,
    pub order: ResultOrder,
}

impl QueryRequest {
    pub fn new(reference_x: f64, reference_y: f64, max_distance: f64) -> Self {
        Self {
            reference: Point::new(reference_x, reference_y),
            max_distance,
            gender_filter: GenderFilter::any(),
            order: ResultOrder::Scan,
        }
    }

    pub fn with_genders(mut self, gender_filter: GenderFilter) -> Self {
        self.gender_filter = gender_filter;
        self
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }

    /// Reject non-finite numbers. A negative radius is accepted and simply
    /// matches nothing.
    pub fn validate(&self) -> Result<(), ProximityError> {
        let fields = [
            ("x_coordinate", self.reference.x()),
            ("y_coordinate", self.reference.y()),
            ("max_distance", self.max_distance),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ProximityError::InvalidInput(format!(
                    "{} must be a finite number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// Parse one numeric path parameter
pub fn parse_coordinate(field: &str, raw: &str) -> Result<f64, ProximityError> {
    raw.trim().parse::<f64>().map_err(|_| {
        ProximityError::InvalidInput(format!("{} must be a number, got '{}'", field, raw))
    })
}

/// Query-string parameters of the close-contact endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CloseContactParams {
    #[validate(length(max = 256))]
    pub gender: Option<String>,
    #[validate(length(max = 16))]
    pub order: Option<String>,
}
