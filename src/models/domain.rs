use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Axis, DataIntegrityGap};

/// Gender values a contact may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    // Case-sensitive: "Male" is not a stored value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("unknown gender '{}'", s)),
        }
    }
}

/// Contact record as handed over by the contact store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub x_coordinate: Option<f64>,
    #[serde(default)]
    pub y_coordinate: Option<f64>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl Contact {
    pub fn new(name: impl Into<String>, x: f64, y: f64, gender: Option<Gender>) -> Self {
        Self {
            name: name.into(),
            x_coordinate: Some(x),
            y_coordinate: Some(y),
            gender,
        }
    }

    /// Position on the plane, or the reason the record cannot be placed
    pub fn position(&self) -> Result<Point<f64>, DataIntegrityGap> {
        let x = self.coordinate(Axis::X, self.x_coordinate)?;
        let y = self.coordinate(Axis::Y, self.y_coordinate)?;
        Ok(Point::new(x, y))
    }

    fn coordinate(&self, axis: Axis, value: Option<f64>) -> Result<f64, DataIntegrityGap> {
        match value {
            None => Err(DataIntegrityGap::MissingCoordinate {
                name: self.name.clone(),
                axis,
            }),
            Some(v) if !v.is_finite() => Err(DataIntegrityGap::NonFiniteCoordinate {
                name: self.name.clone(),
                axis,
                value: v,
            }),
            Some(v) => Ok(v),
        }
    }
}

/// One matching contact together with its distance from the reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub name: String,
    pub distance: f64,
}

/// Ordering applied to query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// Input scan order
    #[default]
    Scan,
    /// Ascending distance, ties broken by name
    Distance,
}

impl FromStr for ResultOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(ResultOrder::Scan),
            "distance" => Ok(ResultOrder::Distance),
            _ => Err(format!("order must be one of: scan, distance (got '{}')", s)),
        }
    }
}
