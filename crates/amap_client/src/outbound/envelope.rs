/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::tools::error::AmapError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// `status` value reporting success.
pub const STATUS_SUCCESS: &str = "1";

/// The uniform outer object of every reply.
///
/// The payload is endpoint specific, so the raw body is kept alongside the
/// decoded status fields and decoded a second time by [`Envelope::decode`].
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub infocode: String,
    #[serde(skip)]
    raw: Vec<u8>,
}

impl Envelope {
    pub fn from_slice(raw: &[u8]) -> Result<Self, AmapError> {
        let mut envelope = serde_json::from_slice::<Envelope>(raw)
            .map_err(|err| AmapError::Parse(format!("failed to decode response envelope: {err}")))?;
        envelope.raw = raw.to_vec();
        Ok(envelope)
    }

    /// Convenience over the string sentinel. Any value other than `"1"`,
    /// including ones the service has never sent before, counts as failure.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Turns a failure status into [`AmapError::Api`].
    pub fn into_result(self) -> Result<Self, AmapError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AmapError::Api {
                code: self.infocode,
                info: self.info,
            })
        }
    }

    /// Second-stage decode of the same bytes into the endpoint payload.
    /// Errors carry the JSON path of the offending field.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, AmapError> {
        let deserializer = &mut serde_json::Deserializer::from_slice(&self.raw);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            AmapError::Parse(format!(
                "failed to decode response payload at `{}`: {}",
                err.path(),
                err.inner()
            ))
        })
    }
}
