/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use serde::Deserialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, Deserialize, Clone)]
pub struct LoggerConfig {
    pub level: String,
    pub log_to_file: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

/// Installs the global JSON (bunyan) subscriber.
///
/// `RUST_LOG` wins over the configured level. `log` records emitted by the
/// HTTP stack are bridged into tracing. Keep the returned guard alive for as
/// long as logs should be flushed.
pub fn setup_tracing(logger_cfg: LoggerConfig) -> WorkerGuard {
    let (non_blocking, guard) = if logger_cfg.log_to_file {
        tracing_appender::non_blocking(tracing_appender::rolling::daily(
            logger_cfg.log_dir,
            env!("CARGO_PKG_NAME"),
        ))
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    if let Err(err) = tracing_log::LogTracer::init() {
        eprintln!("Failed to bridge log records into tracing : {:?}", err);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logger_cfg.level));
    let formatting_layer = BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), non_blocking);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global tracing subscriber : {:?}", err);
    }

    guard
}
