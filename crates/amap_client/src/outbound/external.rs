/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::{
    client::AmapClient,
    common::utils::{require_location, require_param},
    outbound::types::*,
    tools::error::AmapError,
};

pub const GEOCODE_PATH: &str = "geocode/geo";
pub const REGEOCODE_PATH: &str = "geocode/regeo";
pub const WALKING_PATH: &str = "direction/walking";
pub const DRIVING_PATH: &str = "direction/driving";
pub const BICYCLING_PATH: &str = "direction/bicycling";
pub const DISTANCE_PATH: &str = "distance";
pub const CONVERT_PATH: &str = "assistant/coordinate/convert";

impl AmapClient {
    /// Structured address to coordinates.
    pub async fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResponse, AmapError> {
        require_param("geocode", "address", &request.address)?;
        self.do_request(GEOCODE_PATH, request.to_params()).await
    }

    /// Coordinates to address. Radius defaults to 1000 m, extensions to `base`.
    pub async fn regeocode(
        &self,
        request: &ReGeocodeRequest,
    ) -> Result<ReGeocodeResponse, AmapError> {
        require_location("regeocode", "location", &request.location)?;
        self.do_request(REGEOCODE_PATH, request.to_params()).await
    }

    pub async fn walking(&self, request: &WalkingRequest) -> Result<WalkingResponse, AmapError> {
        require_location("walking", "origin", &request.origin)?;
        require_location("walking", "destination", &request.destination)?;
        self.do_request(WALKING_PATH, request.to_params()).await
    }

    pub async fn driving(&self, request: &DrivingRequest) -> Result<DrivingResponse, AmapError> {
        require_location("driving", "origin", &request.origin)?;
        require_location("driving", "destination", &request.destination)?;
        self.do_request(DRIVING_PATH, request.to_params()).await
    }

    pub async fn bicycling(
        &self,
        request: &BicyclingRequest,
    ) -> Result<BicyclingResponse, AmapError> {
        require_location("bicycling", "origin", &request.origin)?;
        require_location("bicycling", "destination", &request.destination)?;
        self.do_request(BICYCLING_PATH, request.to_params()).await
    }

    /// Distance from each of `origins` to `destination`.
    pub async fn distance(&self, request: &DistanceRequest) -> Result<DistanceResponse, AmapError> {
        require_location("distance", "origins", &request.origins)?;
        require_location("distance", "destination", &request.destination)?;
        self.do_request(DISTANCE_PATH, request.to_params()).await
    }

    /// Server-side conversion into GCJ-02, up to 40 pairs per call.
    pub async fn convert(&self, request: &ConvertRequest) -> Result<ConvertResponse, AmapError> {
        if request.locations.is_empty() {
            return Err(AmapError::invalid_config(
                "convert: `locations` must not be empty",
            ));
        }
        if request.locations.len() > MAX_CONVERT_LOCATIONS {
            return Err(AmapError::invalid_config(format!(
                "convert: at most {MAX_CONVERT_LOCATIONS} locations per call, got {}",
                request.locations.len()
            )));
        }
        self.do_request(CONVERT_PATH, request.to_params()).await
    }
}
