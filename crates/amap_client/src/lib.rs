/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


pub mod client;
pub mod environment;
pub mod common {
    pub mod coordinate;
    pub mod types;
    pub mod utils;
}
pub mod outbound {
    pub mod envelope;
    pub mod external;
    pub mod types;
}
pub mod tools {
    pub mod callapi;
    pub mod encode;
    pub mod error;
    pub mod logger;
    pub mod prometheus;
    pub mod sign;
}

pub use client::AmapClient;
pub use common::{
    coordinate::{
        bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, out_of_region,
        wgs84_to_bd09, wgs84_to_gcj02,
    },
    types::{Coordinate, Params},
};
pub use environment::{AmapConfig, AppConfig};
pub use outbound::envelope::Envelope;
pub use tools::error::AmapError;
