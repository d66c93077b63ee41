/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use amap_client::{
    client::AmapClient,
    common::types::Coordinate,
    environment::AppConfig,
    gcj02_to_wgs84,
    outbound::types::{GeocodeRequest, ReGeocodeRequest},
    tools::{logger::setup_tracing, prometheus::gather_metrics},
    wgs84_to_gcj02,
};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::env::{args, var};
use tracing::*;

const USAGE: &str = "usage: amap-client <command> [args]

commands:
  geocode <address> [city]   address to coordinates
  regeo <lng,lat>            coordinates to address
  to-gcj <lng,lat>           WGS-84 to GCJ-02, offline
  to-wgs <lng,lat>           GCJ-02 to WGS-84, offline
  metrics                    print collected metrics";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let dhall_config_path = var("DHALL_CONFIG")
        .unwrap_or_else(|_| "./dhall-configs/dev/amap_client.dhall".to_string());
    let mut app_config = serde_dhall::from_file(&dhall_config_path)
        .parse::<AppConfig>()
        .with_context(|| format!("failed to load config from `{dhall_config_path}`"))?;

    if let Ok(key) = var("AMAP_KEY") {
        app_config.amap_cfg.key = key;
    }
    if let Ok(security_key) = var("AMAP_SECURITY_KEY") {
        app_config.amap_cfg.security_key = Some(security_key);
    }
    Ok(app_config)
}

fn location_arg(arg: Option<&String>) -> Result<Coordinate> {
    match arg {
        Some(location) => Ok(location.parse()?),
        None => bail!("missing `lng,lat` argument\n\n{USAGE}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!(USAGE);
    };

    let app_config = load_config()?;
    let _guard = setup_tracing(app_config.logger_cfg);

    match command.as_str() {
        "to-gcj" => print_json(&wgs84_to_gcj02(location_arg(args.get(1))?)),
        "to-wgs" => print_json(&gcj02_to_wgs84(location_arg(args.get(1))?)),
        "metrics" => {
            print!("{}", gather_metrics());
            Ok(())
        }
        "geocode" => {
            let client = AmapClient::new(app_config.amap_cfg)?;
            let Some(address) = args.get(1) else {
                bail!("missing address\n\n{USAGE}");
            };
            let request = GeocodeRequest {
                city: args.get(2).cloned(),
                ..GeocodeRequest::new(address.as_str())
            };
            let response = client.geocode(&request).await.map_err(|err| {
                error!(tag = "[GEOCODE]", kind = err.kind(), error = %err);
                err
            })?;
            print_json(&response)
        }
        "regeo" => {
            let client = AmapClient::new(app_config.amap_cfg)?;
            let request = ReGeocodeRequest::at(location_arg(args.get(1))?);
            let response = client.regeocode(&request).await.map_err(|err| {
                error!(tag = "[REGEOCODE]", kind = err.kind(), error = %err);
                err
            })?;
            print_json(&response)
        }
        other => bail!("unknown command `{other}`\n\n{USAGE}"),
    }
}
