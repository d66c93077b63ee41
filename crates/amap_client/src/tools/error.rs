/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use thiserror::Error;

/// Failure categories surfaced by every client call.
///
/// Each dispatch stage either succeeds or returns one of these immediately.
/// Nothing is retried internally, so callers can branch on the kind: `Api`
/// is usually user-correctable, `Network` is usually transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmapError {
    /// A required input is missing or malformed. Raised before any network activity.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The transport failed to complete the exchange (timeout, refused, DNS).
    #[error("network err: {0}")]
    Network(String),

    /// The body did not decode as an envelope, or the payload did not decode
    /// into the requested type.
    #[error("parser err: {0}")]
    Parse(String),

    /// The envelope decoded but reported a failure status.
    #[error("amap api error [code:{code}]: {info}")]
    Api { code: String, info: String },
}

impl AmapError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        AmapError::InvalidConfig(msg.into())
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, AmapError::InvalidConfig(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AmapError::Network(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, AmapError::Parse(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, AmapError::Api { .. })
    }

    /// Remote `infocode` for API errors.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            AmapError::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Label used for the failure counter.
    pub fn kind(&self) -> &'static str {
        match self {
            AmapError::InvalidConfig(_) => "invalid_config",
            AmapError::Network(_) => "network",
            AmapError::Parse(_) => "parse",
            AmapError::Api { .. } => "api",
        }
    }
}
