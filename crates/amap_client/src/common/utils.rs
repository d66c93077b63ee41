/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::{common::types::Coordinate, tools::error::AmapError};
use chrono::Utc;
use itertools::Itertools;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Current Unix time in seconds, as the service expects it in `timestamp`.
pub fn unix_timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// Rejects an empty required parameter.
pub fn require_param(endpoint: &str, name: &str, value: &str) -> Result<(), AmapError> {
    if value.trim().is_empty() {
        return Err(AmapError::invalid_config(format!(
            "{endpoint}: `{name}` must not be empty"
        )));
    }
    Ok(())
}

/// Rejects an empty location or one without the `lng,lat` separator.
/// Lists (`a,b|c,d`) pass as long as they carry a separator.
pub fn require_location(endpoint: &str, name: &str, value: &str) -> Result<(), AmapError> {
    require_param(endpoint, name, value)?;
    if !value.contains(',') {
        return Err(AmapError::invalid_config(format!(
            "{endpoint}: `{name}` must be formatted as \"lng,lat\", got `{value}`"
        )));
    }
    Ok(())
}

pub fn join_locations(coordinates: &[Coordinate], separator: char) -> String {
    coordinates
        .iter()
        .map(Coordinate::to_string)
        .join(&separator.to_string())
}

pub fn parse_locations(locations: &str, separator: char) -> Result<Vec<Coordinate>, AmapError> {
    locations
        .split(separator)
        .filter(|location| !location.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Accepts a string, a number, `null`, or an array (joined with `;`).
///
/// The service sends `[]` in place of an empty string for many fields.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flatten_value(Value::deserialize(deserializer)?))
}

fn flatten_value(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Array(items) => items
            .into_iter()
            .map(flatten_value)
            .filter(|item| !item.is_empty())
            .join(";"),
        other => other.to_string(),
    }
}
