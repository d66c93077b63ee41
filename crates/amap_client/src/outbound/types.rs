/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::{
    common::{
        types::*,
        utils::{join_locations, lenient_string, parse_locations},
    },
    tools::error::AmapError,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Reverse geocoding search radius when the caller gives none, in meters.
pub const DEFAULT_REGEO_RADIUS: u32 = 1000;
/// Upper bound of coordinate pairs per convert call.
pub const MAX_CONVERT_LOCATIONS: usize = 40;

fn put(params: &mut Params, key: &str, value: impl Display) {
    params.insert(key.to_string(), value.to_string());
}

fn put_opt<V: Display>(params: &mut Params, key: &str, value: &Option<V>) {
    if let Some(value) = value {
        put(params, key, value);
    }
}

// ---------------------------------------------------------------- geocode

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeRequest {
    pub address: String,
    pub city: Option<String>,
    pub timestamp: Option<String>,
}

impl GeocodeRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::default();
        put(&mut params, "address", &self.address);
        put_opt(&mut params, "city", &self.city);
        put_opt(&mut params, "timestamp", &self.timestamp);
        params
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeocodeResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub count: String,
    #[serde(default)]
    pub geocodes: Vec<GeocodeItem>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeocodeItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub formatted_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub province: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub citycode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub adcode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub street: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: String,
}

impl GeocodeItem {
    pub fn coordinate(&self) -> Result<Coordinate, AmapError> {
        self.location.parse()
    }
}

// -------------------------------------------------------------- regeocode

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReGeocodeRequest {
    /// `"lng,lat"`
    pub location: String,
    pub radius: Option<u32>,
    pub coordinate_type: Option<CoordinateType>,
    pub extensions: Option<Extensions>,
    pub language: Option<LanguageType>,
    pub poitype: Option<String>,
    pub housenumber: Option<bool>,
    pub timestamp: Option<String>,
}

impl ReGeocodeRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn at(coordinate: Coordinate) -> Self {
        Self::new(coordinate.to_string())
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::default();
        put(&mut params, "location", &self.location);
        put(
            &mut params,
            "radius",
            self.radius
                .filter(|radius| *radius > 0)
                .unwrap_or(DEFAULT_REGEO_RADIUS),
        );
        put(
            &mut params,
            "extensions",
            self.extensions.unwrap_or_default(),
        );
        put_opt(&mut params, "coordinate_type", &self.coordinate_type);
        put_opt(&mut params, "language", &self.language);
        put_opt(&mut params, "poitype", &self.poitype);
        put_opt(&mut params, "housenumber", &self.housenumber);
        put_opt(&mut params, "timestamp", &self.timestamp);
        params
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReGeocodeResponse {
    pub regeocode: ReGeocode,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReGeocode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub formatted_address: String,
    #[serde(rename = "addressComponent", default)]
    pub address_component: AddressComponent,
    #[serde(default)]
    pub pois: Vec<Poi>,
    #[serde(default)]
    pub roads: Vec<Road>,
    #[serde(alias = "roadintersections", default)]
    pub roadinters: Vec<RoadIntersection>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressComponent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub province: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub citycode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub adcode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub township: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub towncode: String,
    #[serde(rename = "streetNumber", default)]
    pub street_number: StreetNumber,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StreetNumber {
    #[serde(default, deserialize_with = "lenient_string")]
    pub street: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub direction: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Poi {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub poi_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tel: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub direction: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Road {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub direction: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadIntersection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub direction: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub second_name: String,
}

// ---------------------------------------------------------------- routing

/// Walking and bicycling take the same inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkingRequest {
    pub origin: String,
    pub destination: String,
    pub coordinate_type: Option<CoordinateType>,
    pub language: Option<LanguageType>,
    pub timestamp: Option<String>,
}

pub type BicyclingRequest = WalkingRequest;

impl WalkingRequest {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::default();
        put(&mut params, "origin", &self.origin);
        put(&mut params, "destination", &self.destination);
        put_opt(&mut params, "coordinate_type", &self.coordinate_type);
        put_opt(&mut params, "language", &self.language);
        put_opt(&mut params, "timestamp", &self.timestamp);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrivingRequest {
    pub origin: String,
    pub destination: String,
    pub strategy: Option<u32>,
    pub waypoints: Vec<Coordinate>,
    /// `YYYY-MM-DD HH:mm`
    pub departure_time: Option<String>,
    pub vehicle_type: Option<String>,
    pub plate_number: Option<String>,
    pub coordinate_type: Option<CoordinateType>,
    pub language: Option<LanguageType>,
    pub timestamp: Option<String>,
}

impl DrivingRequest {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::default();
        put(&mut params, "origin", &self.origin);
        put(&mut params, "destination", &self.destination);
        put_opt(&mut params, "strategy", &self.strategy);
        if !self.waypoints.is_empty() {
            put(&mut params, "waypoints", join_locations(&self.waypoints, '|'));
        }
        put_opt(&mut params, "departure_time", &self.departure_time);
        put_opt(&mut params, "vehicle_type", &self.vehicle_type);
        put_opt(&mut params, "plate_number", &self.plate_number);
        put_opt(&mut params, "coordinate_type", &self.coordinate_type);
        put_opt(&mut params, "language", &self.language);
        put_opt(&mut params, "timestamp", &self.timestamp);
        params
    }
}

/// Route reply shared by walking, driving and bicycling.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub count: String,
    pub route: Route,
}

pub type WalkingResponse = RouteResponse;
pub type DrivingResponse = RouteResponse;
pub type BicyclingResponse = RouteResponse;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    #[serde(default, deserialize_with = "lenient_string")]
    pub origin: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub destination: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub taxi_cost: String,
    #[serde(default)]
    pub paths: Vec<Path>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub strategy: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tolls: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub toll_distance: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    #[serde(default, deserialize_with = "lenient_string")]
    pub instruction: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub orientation: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub road: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub polyline: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assistant_action: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub walk_type: String,
}

// --------------------------------------------------------------- distance

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceRequest {
    /// Up to 100 origins, `|` separated.
    pub origins: String,
    pub destination: String,
    /// Wire name `type`: 0 straight line, 1 driving, 3 walking.
    pub measure_type: Option<u8>,
    pub coordinate_type: Option<CoordinateType>,
    pub language: Option<LanguageType>,
    pub timestamp: Option<String>,
}

impl DistanceRequest {
    pub fn new(origins: &[Coordinate], destination: Coordinate) -> Self {
        Self {
            origins: join_locations(origins, '|'),
            destination: destination.to_string(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::default();
        put(&mut params, "origins", &self.origins);
        put(&mut params, "destination", &self.destination);
        put_opt(&mut params, "type", &self.measure_type);
        put_opt(&mut params, "coordinate_type", &self.coordinate_type);
        put_opt(&mut params, "language", &self.language);
        put_opt(&mut params, "timestamp", &self.timestamp);
        params
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceResponse {
    #[serde(default)]
    pub results: Vec<DistanceResult>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub origin_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dest_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub info: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
}

// ---------------------------------------------------------------- convert

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertRequest {
    pub locations: Vec<Coordinate>,
    /// Source system, `autonavi` (no-op) when unset.
    pub coordsys: Option<CoordSys>,
}

impl ConvertRequest {
    pub fn new(locations: Vec<Coordinate>, coordsys: CoordSys) -> Self {
        Self {
            locations,
            coordsys: Some(coordsys),
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::default();
        put(&mut params, "locations", join_locations(&self.locations, '|'));
        put_opt(&mut params, "coordsys", &self.coordsys);
        params
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertResponse {
    /// Converted pairs, `;` separated.
    #[serde(default, deserialize_with = "lenient_string")]
    pub locations: String,
}

impl ConvertResponse {
    pub fn coordinates(&self) -> Result<Vec<Coordinate>, AmapError> {
        parse_locations(&self.locations, ';')
    }
}
