/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

#![allow(clippy::expect_used)]

use prometheus::{
    opts, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

pub static CALL_EXTERNAL_API: once_cell::sync::Lazy<HistogramVec> =
    once_cell::sync::Lazy::new(|| {
        register_histogram_vec!(
            opts!("external_request_duration", "Call external API requests").into(),
            &["method", "host", "service", "status"]
        )
        .expect("Failed to register call external API metrics")
    });

pub static FAILED_REQUESTS: once_cell::sync::Lazy<IntCounterVec> =
    once_cell::sync::Lazy::new(|| {
        register_int_counter_vec!(
            opts!("amap_failed_requests", "AMap requests that ended in an error"),
            &["service", "kind"]
        )
        .expect("Failed to register failed requests metrics")
    });

#[macro_export]
macro_rules! call_external_api {
    ($method:expr, $host:expr, $path:expr, $status:expr, $start:expr) => {
        let duration = $start.elapsed().as_secs_f64();
        CALL_EXTERNAL_API
            .with_label_values(&[$method, $host, $path, $status])
            .observe(duration);
    };
}

#[macro_export]
macro_rules! failed_request {
    ($path:expr, $kind:expr) => {
        FAILED_REQUESTS.with_label_values(&[$path, $kind]).inc();
    };
}

/// Renders every metric in the default registry in the text exposition format.
///
/// Forces registration of the client metrics first. Families without any
/// observation are still left out by the encoder.
pub fn gather_metrics() -> String {
    once_cell::sync::Lazy::force(&CALL_EXTERNAL_API);
    once_cell::sync::Lazy::force(&FAILED_REQUESTS);

    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&prometheus::gather(), &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8_lossy(&buffer).into_owned()
}
