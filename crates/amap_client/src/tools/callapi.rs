/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::{call_external_api, tools::error::AmapError, tools::prometheus::CALL_EXTERNAL_API};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method, StatusCode, Url,
};
use std::{str::FromStr, time::Instant};
use thiserror::Error;
use tracing::{error, info};

/// Query parameters never written to logs in clear text.
const REDACTED_PARAMS: [&str; 2] = ["key", "sig"];

#[derive(Error, Debug)]
pub enum CallApiError {
    #[error("header serialization failed: {0}")]
    HeaderSerializationFailed(String),
    #[error("{0}")]
    ConnectionError(String),
    #[error("failed to read response body: {0}")]
    ResponseReadFailed(String),
}

impl From<CallApiError> for AmapError {
    fn from(err: CallApiError) -> Self {
        match err {
            CallApiError::HeaderSerializationFailed(_) => AmapError::InvalidConfig(err.to_string()),
            CallApiError::ConnectionError(_) | CallApiError::ResponseReadFailed(_) => {
                AmapError::Network(err.to_string())
            }
        }
    }
}

/// Status line and fully buffered body of a reply.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

pub fn build_headers(headers: Vec<(&str, &str)>) -> Result<HeaderMap, CallApiError> {
    let mut header_map = HeaderMap::new();

    for (header_key, header_value) in headers {
        let header_name = HeaderName::from_str(header_key)
            .map_err(|err| CallApiError::HeaderSerializationFailed(err.to_string()))?;
        let header_value = HeaderValue::from_str(header_value)
            .map_err(|err| CallApiError::HeaderSerializationFailed(err.to_string()))?;

        header_map.insert(header_name, header_value);
    }

    Ok(header_map)
}

/// Copy of `url` safe to log: credential and signature values are masked.
pub fn redacted_url(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if REDACTED_PARAMS.contains(&key.as_ref()) {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

/// Issues exactly one request and buffers the whole body.
///
/// Timeouts and connection failures come back as [`CallApiError::ConnectionError`];
/// there is no retry. Non-2xx replies are logged but still returned, since the
/// body carries the service's own status envelope.
pub async fn call_api(
    client: &Client,
    method: Method,
    url: &Url,
    headers: Vec<(&str, &str)>,
) -> Result<RawResponse, CallApiError> {
    let start_time = Instant::now();

    let header_map = build_headers(headers)?;

    let resp = client
        .request(method.to_owned(), url.to_owned())
        .headers(header_map)
        .send()
        .await;

    let host = format!(
        "{}://{}:{}",
        url.scheme(),
        url.host_str().unwrap_or(""),
        url.port_or_known_default().unwrap_or(80)
    );
    let log_url = redacted_url(url);

    let status = match resp.as_ref() {
        Ok(resp) => resp.status().as_str().to_string(),
        Err(err) => err
            .status()
            .map(|status| status.to_string())
            .unwrap_or("UNKNOWN".to_string()),
    };

    call_external_api!(
        method.as_str(),
        host.as_str(),
        url.path(),
        status.as_str(),
        start_time
    );

    match resp {
        Ok(resp) => {
            let status = resp.status();
            let body = resp.bytes().await.map_err(|err| {
                let err = err.without_url();
                error!(tag = "[OUTGOING API - ERROR]", request_method = %method, request_url = %log_url, error = format!("{:?}", err), latency = format!("{:?}ms", start_time.elapsed().as_millis()));
                CallApiError::ResponseReadFailed(err.to_string())
            })?;

            if status.is_success() {
                info!(tag = "[OUTGOING API]", request_method = %method, request_url = %log_url, response_status = %status, response_size = body.len(), latency = format!("{:?}ms", start_time.elapsed().as_millis()));
            } else {
                let response = String::from_utf8_lossy(&body);
                error!(tag = "[OUTGOING API - ERROR]", request_method = %method, request_url = %log_url, response_status = %status, response = %response, latency = format!("{:?}ms", start_time.elapsed().as_millis()));
            }

            Ok(RawResponse {
                status,
                body: body.to_vec(),
            })
        }
        Err(err) => {
            // reqwest renders the full url, credential included, unless told otherwise
            let err = err.without_url();
            error!(tag = "[OUTGOING API - ERROR]", request_method = %method, request_url = %log_url, error = format!("{:?}", err), latency = format!("{:?}ms", start_time.elapsed().as_millis()));
            Err(CallApiError::ConnectionError(err.to_string()))
        }
    }
}
