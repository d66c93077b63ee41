/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::{
    common::{types::*, utils::unix_timestamp},
    environment::AmapConfig,
    failed_request,
    outbound::envelope::Envelope,
    tools::{
        callapi::{build_headers, call_api},
        encode::encode_params_canonical,
        error::AmapError,
        prometheus::FAILED_REQUESTS,
        sign::{sign, SIGNATURE_KEY},
    },
};
use reqwest::{Client, Method, Proxy, Url};
use serde::de::DeserializeOwned;
use tracing::*;

/// Client for the AMap web service.
///
/// Holds the immutable session configuration and a pooled HTTP client, so one
/// instance can serve concurrent requests from many tasks. Every call builds
/// its own parameter set and signature.
#[derive(Debug, Clone)]
pub struct AmapClient {
    config: AmapConfig,
    http_client: Client,
}

impl AmapClient {
    pub fn new(config: AmapConfig) -> Result<Self, AmapError> {
        if config.key.trim().is_empty() {
            return Err(AmapError::invalid_config("API key must not be empty"));
        }
        Url::parse(&config.base_url).map_err(|err| {
            AmapError::invalid_config(format!("base url `{}` : {}", config.base_url, err))
        })?;
        build_headers(vec![("user-agent", config.user_agent.as_str())])?;

        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(proxy) = config.proxy_url() {
            let proxy = Proxy::all(proxy)
                .map_err(|err| AmapError::invalid_config(format!("proxy `{proxy}` : {err}")))?;
            builder = builder.proxy(proxy);
        }
        let http_client = builder
            .build()
            .map_err(|err| AmapError::invalid_config(err.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &AmapConfig {
        &self.config
    }

    /// Session defaults overlaid with the caller's non-empty parameters.
    ///
    /// Callers may override any default, `timestamp` included.
    pub fn build_public_params(&self, params: Params) -> Params {
        let mut public_params = Params::default();
        public_params.insert("key".to_string(), self.config.key.clone());
        public_params.insert("timestamp".to_string(), unix_timestamp());
        public_params.insert("output".to_string(), OutputType::Json.to_string());

        public_params.extend(params.into_iter().filter(|(_, value)| !value.is_empty()));
        public_params
    }

    /// Merge, sign and encode: the full request target for `path`.
    pub fn prepare_request(&self, path: &str, params: Params) -> Result<Url, AmapError> {
        let mut all_params = self.build_public_params(params);

        if let Some(security_key) = self.config.signing_secret() {
            let signature = sign(&all_params, security_key);
            all_params.insert(SIGNATURE_KEY.to_string(), signature);
        }

        let full_url = format!(
            "{}{}?{}",
            self.config.base_url,
            path,
            encode_params_canonical(&all_params)
        );
        Url::parse(&full_url)
            .map_err(|err| AmapError::invalid_config(format!("request url for `{path}` : {err}")))
    }

    /// Runs one exchange and returns the envelope once its status says success.
    pub async fn fetch_envelope(&self, path: &str, params: Params) -> Result<Envelope, AmapError> {
        let url = self.prepare_request(path, params)?;

        let response = call_api(
            &self.http_client,
            Method::GET,
            &url,
            vec![("user-agent", self.config.user_agent.as_str())],
        )
        .await?;

        let envelope = Envelope::from_slice(&response.body)?;
        if !envelope.is_success() {
            warn!(tag = "[AMAP API - FAILURE]", path = %path, infocode = %envelope.infocode, info = %envelope.info);
        }
        envelope.into_result()
    }

    /// Generic request: envelope first, then the payload into `T`.
    ///
    /// A failure status short-circuits before `T` is ever decoded.
    pub async fn do_request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
    ) -> Result<T, AmapError> {
        let result = match self.fetch_envelope(path, params).await {
            Ok(envelope) => envelope.decode::<T>(),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            failed_request!(path, err.kind());
        }
        result
    }
}
