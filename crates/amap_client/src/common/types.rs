/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::tools::error::AmapError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::{Display, EnumIter, EnumString};

/// Request parameters, keyed by wire name. Ordering is applied at encode time.
pub type Params = FxHashMap<String, String>;

/// Longitude/latitude pair in decimal degrees.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

// The service accepts at most six decimal places.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lng, self.lat)
    }
}

impl FromStr for Coordinate {
    type Err = AmapError;

    fn from_str(location: &str) -> Result<Self, Self::Err> {
        let (lng, lat) = location.split_once(',').ok_or_else(|| {
            AmapError::invalid_config(format!(
                "location `{location}` must be formatted as \"lng,lat\""
            ))
        })?;
        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|err| {
                AmapError::invalid_config(format!("location `{location}` is not numeric: {err}"))
            })
        };
        Ok(Coordinate::new(parse(lng)?, parse(lat)?))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Coordinate::new(lng, lat)
    }
}

/// Coordinate systems the service understands for inputs.
#[derive(
    Debug, Clone, Copy, EnumString, EnumIter, Display, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
pub enum CoordinateType {
    #[strum(serialize = "gcj02")]
    #[serde(rename = "gcj02")]
    Gcj02,
    #[strum(serialize = "wgs84")]
    #[serde(rename = "wgs84")]
    Wgs84,
    #[strum(serialize = "bd09ll")]
    #[serde(rename = "bd09ll")]
    Bd09ll,
}

/// Source system accepted by the coordinate convert endpoint.
#[derive(
    Debug, Clone, Copy, EnumString, EnumIter, Display, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CoordSys {
    Gps,
    Mapbar,
    Baidu,
    Autonavi,
}

/// Response format. Only JSON is decoded by this client.
#[derive(
    Debug, Clone, Copy, EnumString, EnumIter, Display, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputType {
    Json,
    Xml,
}

#[derive(
    Debug, Clone, Copy, EnumString, EnumIter, Display, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
pub enum LanguageType {
    #[strum(serialize = "zh_cn")]
    #[serde(rename = "zh_cn")]
    ZhCn,
    #[strum(serialize = "en")]
    #[serde(rename = "en")]
    En,
}

/// Detail level for reverse geocoding.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumString,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Extensions {
    #[default]
    Base,
    All,
}
