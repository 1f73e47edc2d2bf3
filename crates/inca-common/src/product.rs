//! Product and field vocabulary for the hourly analysis archive.
//!
//! A *product* is one file series on disk (one file per slot); a *field* is
//! one physical quantity read out of a product. Wind is a single product
//! carrying both horizontal components as separate sub-datasets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::DayStamp;

/// Sentinel written into stacks for missing slots, unreadable slots and
/// cells flagged as no-data inside a container.
pub const NODATA: f64 = -100.0;

/// File extension of the raster containers.
pub const RASTER_EXT: &str = "h5";

/// The four file series the archive publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    /// 2 m air temperature analysis
    #[serde(rename = "temp")]
    Temperature,
    /// 2 m relative humidity analysis
    #[serde(rename = "rhum")]
    RelativeHumidity,
    /// 10 m wind analysis (U and V planes in one container)
    #[serde(rename = "wind")]
    Wind,
    /// 10-minute precipitation accumulation
    #[serde(rename = "rain")]
    Rain,
}

impl Product {
    /// All products, in archive order.
    pub const ALL: [Product; 4] = [
        Product::Temperature,
        Product::RelativeHumidity,
        Product::Wind,
        Product::Rain,
    ];

    /// Look up a product by its short tag ("temp", "rhum", "wind", "rain").
    pub fn from_tag(tag: &str) -> Result<Self, UnknownProductError> {
        match tag {
            "temp" => Ok(Product::Temperature),
            "rhum" => Ok(Product::RelativeHumidity),
            "wind" => Ok(Product::Wind),
            "rain" => Ok(Product::Rain),
            other => Err(UnknownProductError(other.to_string())),
        }
    }

    /// Short tag, the inverse of [`Product::from_tag`].
    pub fn tag(&self) -> &'static str {
        match self {
            Product::Temperature => "temp",
            Product::RelativeHumidity => "rhum",
            Product::Wind => "wind",
            Product::Rain => "rain",
        }
    }

    /// Filename suffix token shared by every file of the series.
    pub fn suffix(&self) -> &'static str {
        match self {
            Product::Temperature => "tem2_inca",
            Product::RelativeHumidity => "rhum_inca",
            Product::Wind => "wind_inca",
            Product::Rain => "acc0010_grs",
        }
    }

    /// Number of hour positions in one day of this series.
    ///
    /// Accumulations include the closing 24h position, so rain covers
    /// hours 00..=24 while the instantaneous analyses cover 00..=23.
    pub fn hour_positions(&self) -> usize {
        match self {
            Product::Rain => 25,
            _ => 24,
        }
    }

    /// Files per hour position (rain publishes six 10-minute files).
    pub fn slots_per_hour(&self) -> usize {
        match self {
            Product::Rain => 6,
            _ => 1,
        }
    }

    /// Total slot count of a full day: 150 for rain, 24 otherwise.
    pub fn slots_per_day(&self) -> usize {
        self.hour_positions() * self.slots_per_hour()
    }

    /// Filename of the slot at `hour` and 10-minute sub-position `sub`.
    ///
    /// The minute field is `<sub>0`; products with a single sub-position
    /// always carry `00` there.
    pub fn slot_filename(&self, day: &DayStamp, hour: usize, sub: usize) -> String {
        format!(
            "{}{:02}{}0_{}.{}",
            day.compact(),
            hour,
            sub,
            self.suffix(),
            RASTER_EXT
        )
    }
}

impl FromStr for Product {
    type Err = UnknownProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::from_tag(s)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Raised when a tag does not name one of the four products.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown product type: {0} (expected temp, rhum, wind or rain)")]
pub struct UnknownProductError(pub String);

/// The five physical quantities that can be stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "temp")]
    Temperature,
    #[serde(rename = "rhum")]
    RelativeHumidity,
    #[serde(rename = "wind_u")]
    WindU,
    #[serde(rename = "wind_v")]
    WindV,
    #[serde(rename = "rain")]
    Rain,
}

impl Field {
    /// All fields, in archive order.
    pub const ALL: [Field; 5] = [
        Field::Temperature,
        Field::RelativeHumidity,
        Field::WindU,
        Field::WindV,
        Field::Rain,
    ];

    /// File series this field is read from.
    pub fn product(&self) -> Product {
        match self {
            Field::Temperature => Product::Temperature,
            Field::RelativeHumidity => Product::RelativeHumidity,
            Field::WindU | Field::WindV => Product::Wind,
            Field::Rain => Product::Rain,
        }
    }

    /// Sub-dataset index inside the container.
    ///
    /// Wind containers carry the U plane first and the V plane second;
    /// every other product has a single plane.
    pub fn band_index(&self) -> usize {
        match self {
            Field::WindV => 1,
            _ => 0,
        }
    }

    /// Sentinel substituted for missing and flagged cells of this field.
    pub fn nodata(&self) -> f64 {
        NODATA
    }
}
