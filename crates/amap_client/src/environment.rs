/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::tools::logger::LoggerConfig;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restapi.amap.com/v3/";
pub const DEFAULT_USER_AGENT: &str = "amap-rs/1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Session settings shared by every request a client makes.
///
/// Read-only once handed to [`crate::client::AmapClient::new`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AmapConfig {
    pub key: String,
    /// Secret used to sign requests. Unset or empty disables signing.
    #[serde(default)]
    pub security_key: Option<String>,
    #[serde(
        rename = "timeout_ms",
        default = "default_timeout",
        deserialize_with = "deserialize_millis"
    )]
    pub timeout: Duration,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

impl AmapConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            security_key: None,
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_security_key(mut self, security_key: impl Into<String>) -> Self {
        self.security_key = Some(security_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn signing_secret(&self) -> Option<&str> {
        self.security_key
            .as_deref()
            .filter(|security_key| !security_key.is_empty())
    }

    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy.as_deref().filter(|proxy| !proxy.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub amap_cfg: AmapConfig,
    pub logger_cfg: LoggerConfig,
}
