/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::stub::{spawn_delayed_stub, spawn_stub, unreachable_base_url};
use amap_client::{
    tools::{error::AmapError, prometheus::gather_metrics, sign::sign},
    AmapClient, AmapConfig, Params,
};
use serde::Deserialize;
use std::time::Duration;
use warp::http::StatusCode;

const GEOCODE_OK: &str = r#"{"status":"1","info":"OK","infocode":"10000","count":"1","geocodes":[{"formatted_address":"北京市朝阳区阜通东大街6号","location":"116.482086,39.990496"}]}"#;
const INVALID_KEY: &str = r#"{"status":"0","info":"INVALID_USER_KEY","infocode":"10001"}"#;

#[derive(Deserialize, Debug)]
struct CountPayload {
    count: String,
}

fn params(entries: &[(&str, &str)]) -> Params {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn client_for(base_url: &str) -> AmapClient {
    AmapClient::new(AmapConfig::new("test_key").with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn success_envelope_yields_payload() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::OK, GEOCODE_OK).await;
    let client = client_for(&stub.base_url);

    let payload: CountPayload = client
        .do_request("geocode/geo", params(&[("address", "阜通东大街6号")]))
        .await?;
    assert_eq!(payload.count, "1");

    let request = stub.last_request().unwrap();
    assert_eq!(request.path, "/v3/geocode/geo");
    assert_eq!(request.param("address"), Some("阜通东大街6号"));
    assert_eq!(request.param("output"), Some("JSON"));
    assert_eq!(request.param("key"), Some("test_key"));
    Ok(())
}

#[tokio::test]
async fn failure_status_is_api_error_and_payload_is_not_decoded() {
    let stub = spawn_stub(StatusCode::OK, INVALID_KEY).await;
    let client = client_for(&stub.base_url);

    // `count` is missing, so reaching the payload stage would be a parse error.
    let err = client
        .do_request::<CountPayload>("geocode/geo", params(&[("address", "x")]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AmapError::Api {
            code: "10001".to_string(),
            info: "INVALID_USER_KEY".to_string()
        }
    );
    assert_eq!(err.api_code(), Some("10001"));
    assert!(gather_metrics().contains("amap_failed_requests"));
}

#[tokio::test]
async fn http_status_does_not_decide_the_outcome() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, GEOCODE_OK).await;
    let client = client_for(&stub.base_url);

    let payload: CountPayload = client.do_request("geocode/geo", Params::default()).await?;
    assert_eq!(payload.count, "1");
    Ok(())
}

#[tokio::test]
async fn undecodable_body_is_parse_error() {
    let stub = spawn_stub(StatusCode::OK, "<html>bad gateway</html>").await;
    let client = client_for(&stub.base_url);

    let err = client
        .do_request::<CountPayload>("geocode/geo", Params::default())
        .await
        .unwrap_err();
    assert!(err.is_parse(), "{err}");
}

#[tokio::test]
async fn payload_mismatch_is_parse_error() {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{"status":"1","info":"OK","infocode":"10000","count":{"n":1}}"#,
    )
    .await;
    let client = client_for(&stub.base_url);

    let err = client
        .do_request::<CountPayload>("geocode/geo", Params::default())
        .await
        .unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("count"), "{err}");
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let client = client_for(&unreachable_base_url());

    let err = client
        .do_request::<CountPayload>("geocode/geo", Params::default())
        .await
        .unwrap_err();
    assert!(err.is_network(), "{err}");
    assert!(!err.to_string().contains("test_key"));
}

#[tokio::test]
async fn slow_reply_times_out_as_network_error() {
    let stub = spawn_delayed_stub(StatusCode::OK, GEOCODE_OK, Duration::from_millis(800)).await;
    let client = AmapClient::new(
        AmapConfig::new("test_key")
            .with_base_url(stub.base_url.as_str())
            .with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let err = client
        .do_request::<CountPayload>("geocode/geo", Params::default())
        .await
        .unwrap_err();
    assert!(err.is_network(), "{err}");
}

#[tokio::test]
async fn signed_request_carries_a_verifiable_signature() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::OK, GEOCODE_OK).await;
    let client = AmapClient::new(
        AmapConfig::new("test_key")
            .with_base_url(stub.base_url.as_str())
            .with_security_key("test_security_key"),
    )?;

    client
        .do_request::<CountPayload>(
            "geocode/geo",
            params(&[("address", "北京 朝阳"), ("city", "")]),
        )
        .await?;

    let request = stub.last_request().unwrap();
    let keys: Vec<&str> = request.query.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["address", "key", "output", "sig", "timestamp"]);
    assert_eq!(request.param("address"), Some("北京 朝阳"));

    let signed: Params = request
        .query
        .iter()
        .filter(|(key, _)| key != "sig")
        .cloned()
        .collect();
    assert_eq!(request.param("sig"), Some(sign(&signed, "test_security_key").as_str()));
    Ok(())
}

#[tokio::test]
async fn unsigned_request_has_no_signature() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::OK, GEOCODE_OK).await;
    let client = client_for(&stub.base_url);

    client
        .do_request::<CountPayload>("geocode/geo", params(&[("empty", "")]))
        .await?;

    let request = stub.last_request().unwrap();
    assert_eq!(request.param("sig"), None);
    assert_eq!(request.param("empty"), None);
    Ok(())
}

#[tokio::test]
async fn default_timestamp_is_current_and_user_agent_is_sent() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::OK, GEOCODE_OK).await;
    let client = AmapClient::new(
        AmapConfig::new("test_key")
            .with_base_url(stub.base_url.as_str())
            .with_user_agent("amap-tests/0.1"),
    )?;

    client
        .do_request::<CountPayload>("geocode/geo", Params::default())
        .await?;

    let request = stub.last_request().unwrap();
    let timestamp: i64 = request.param("timestamp").unwrap().parse()?;
    assert!((chrono::Utc::now().timestamp() - timestamp).abs() <= 10);
    assert_eq!(request.user_agent.as_deref(), Some("amap-tests/0.1"));
    Ok(())
}

#[tokio::test]
async fn caller_timestamp_overrides_the_default() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::OK, GEOCODE_OK).await;
    let client = client_for(&stub.base_url);

    client
        .do_request::<CountPayload>("geocode/geo", params(&[("timestamp", "1700000000")]))
        .await?;

    assert_eq!(
        stub.last_request().unwrap().param("timestamp"),
        Some("1700000000")
    );
    Ok(())
}

#[tokio::test]
async fn concurrent_requests_share_one_client() -> anyhow::Result<()> {
    let stub = spawn_stub(StatusCode::OK, GEOCODE_OK).await;
    let client = client_for(&stub.base_url);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .do_request::<CountPayload>("geocode/geo", params(&[("address", i.to_string().as_str())]))
                    .await
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await??.count, "1");
    }
    assert_eq!(stub.requests().len(), 8);
    Ok(())
}

#[tokio::test]
async fn shipped_config_needs_only_a_key() -> anyhow::Result<()> {
    use amap_client::AppConfig;

    let dhall_config_path = "../../dhall-configs/dev/amap_client.dhall".to_string();
    let app_config = serde_dhall::from_file(dhall_config_path).parse::<AppConfig>()?;

    assert_eq!(app_config.amap_cfg.timeout, Duration::from_millis(5000));
    assert!(AmapClient::new(app_config.amap_cfg.clone())
        .unwrap_err()
        .is_invalid_config());

    let mut amap_cfg = app_config.amap_cfg;
    amap_cfg.key = "test_key".to_string();
    assert!(AmapClient::new(amap_cfg).is_ok());
    Ok(())
}
