/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


use crate::stub::spawn_stub;
use amap_client::{
    common::types::{CoordSys, Coordinate, Extensions},
    outbound::types::*,
    AmapClient, AmapConfig,
};
use warp::http::StatusCode;

fn client_for(base_url: &str) -> AmapClient {
    AmapClient::new(AmapConfig::new("test_key").with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn geocode_decodes_typed_reply() -> anyhow::Result<()> {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{
            "status": "1", "info": "OK", "infocode": "10000", "count": "1",
            "geocodes": [{
                "formatted_address": "北京市朝阳区阜通东大街6号",
                "country": "中国", "province": "北京市", "citycode": "010",
                "city": "北京市", "district": "朝阳区", "township": [],
                "street": "阜通东大街", "number": "6号", "adcode": "110105",
                "location": "116.482086,39.990496", "level": "门牌号"
            }]
        }"#,
    )
    .await;
    let client = client_for(&stub.base_url);

    let response = client
        .geocode(&GeocodeRequest {
            city: Some("北京".to_string()),
            ..GeocodeRequest::new("北京市朝阳区阜通东大街6号")
        })
        .await?;

    assert_eq!(response.count, "1");
    let item = &response.geocodes[0];
    assert_eq!(item.adcode, "110105");
    assert_eq!(item.coordinate()?, Coordinate::new(116.482086, 39.990496));

    let request = stub.last_request().unwrap();
    assert_eq!(request.path, "/v3/geocode/geo");
    assert_eq!(request.param("city"), Some("北京"));
    Ok(())
}

#[tokio::test]
async fn regeocode_sends_defaults_and_tolerates_empty_arrays() -> anyhow::Result<()> {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{
            "status": "1", "info": "OK", "infocode": "10000",
            "regeocode": {
                "formatted_address": "北京市朝阳区望京街道方恒国际中心B座",
                "addressComponent": {
                    "country": "中国", "province": "北京市", "city": [],
                    "citycode": "010", "district": "朝阳区", "adcode": "110105",
                    "township": "望京街道", "towncode": "110105026000",
                    "streetNumber": {
                        "street": "阜通东大街", "number": "6号",
                        "location": "116.480724,39.989584",
                        "direction": "西北", "distance": "21.1831"
                    }
                }
            }
        }"#,
    )
    .await;
    let client = client_for(&stub.base_url);

    let response = client
        .regeocode(&ReGeocodeRequest::at(Coordinate::new(116.481028, 39.989643)))
        .await?;

    let component = &response.regeocode.address_component;
    assert_eq!(component.city, "");
    assert_eq!(component.street_number.number, "6号");
    assert!(response.regeocode.pois.is_empty());

    let request = stub.last_request().unwrap();
    assert_eq!(request.path, "/v3/geocode/regeo");
    assert_eq!(request.param("location"), Some("116.481028,39.989643"));
    assert_eq!(request.param("radius"), Some("1000"));
    assert_eq!(request.param("extensions"), Some(Extensions::Base.to_string().as_str()));
    Ok(())
}

#[tokio::test]
async fn route_endpoints_hit_their_paths() -> anyhow::Result<()> {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{
            "status": "1", "info": "OK", "infocode": "10000", "count": "1",
            "route": {
                "origin": "116.434307,39.90909", "destination": "116.434446,39.90816",
                "paths": [{"distance": "120", "duration": "96", "steps": []}]
            }
        }"#,
    )
    .await;
    let client = client_for(&stub.base_url);
    let origin = Coordinate::new(116.434307, 39.90909);
    let destination = Coordinate::new(116.434446, 39.90816);

    let walking = client
        .walking(&WalkingRequest::new(origin, destination))
        .await?;
    assert_eq!(walking.route.paths[0].distance, "120");
    assert_eq!(stub.last_request().unwrap().path, "/v3/direction/walking");

    client
        .driving(&DrivingRequest {
            strategy: Some(2),
            ..DrivingRequest::new(origin, destination)
        })
        .await?;
    let request = stub.last_request().unwrap();
    assert_eq!(request.path, "/v3/direction/driving");
    assert_eq!(request.param("strategy"), Some("2"));

    client
        .bicycling(&BicyclingRequest::new(origin, destination))
        .await?;
    assert_eq!(stub.last_request().unwrap().path, "/v3/direction/bicycling");
    Ok(())
}

#[tokio::test]
async fn distance_reports_each_origin() -> anyhow::Result<()> {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{
            "status": "1", "info": "OK", "infocode": "10000", "count": "2",
            "results": [
                {"origin_id": "1", "dest_id": "1", "distance": "261278", "duration": "14280"},
                {"origin_id": "2", "dest_id": "1", "distance": "260171", "duration": "14338"}
            ]
        }"#,
    )
    .await;
    let client = client_for(&stub.base_url);

    let response = client
        .distance(&DistanceRequest::new(
            &[Coordinate::new(116.481028, 39.989643), Coordinate::new(114.481028, 39.989643)],
            Coordinate::new(114.465302, 40.004717),
        ))
        .await?;

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[1].distance, "260171");
    let request = stub.last_request().unwrap();
    assert_eq!(request.path, "/v3/distance");
    assert_eq!(
        request.param("origins"),
        Some("116.481028,39.989643|114.481028,39.989643")
    );
    Ok(())
}

#[tokio::test]
async fn convert_joins_with_bars_and_parses_semicolons() -> anyhow::Result<()> {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{"status":"1","info":"ok","infocode":"10000","locations":"116.487585,39.991754;116.487585,39.991653"}"#,
    )
    .await;
    let client = client_for(&stub.base_url);

    let response = client
        .convert(&ConvertRequest::new(
            vec![
                Coordinate::new(116.481499, 39.990475),
                Coordinate::new(116.481499, 39.990375),
            ],
            CoordSys::Gps,
        ))
        .await?;

    assert_eq!(
        response.coordinates()?,
        vec![
            Coordinate::new(116.487585, 39.991754),
            Coordinate::new(116.487585, 39.991653)
        ]
    );
    let request = stub.last_request().unwrap();
    assert_eq!(request.path, "/v3/assistant/coordinate/convert");
    assert_eq!(
        request.param("locations"),
        Some("116.481499,39.990475|116.481499,39.990375")
    );
    assert_eq!(request.param("coordsys"), Some("gps"));
    Ok(())
}

#[tokio::test]
async fn endpoint_surfaces_api_error() {
    let stub = spawn_stub(
        StatusCode::OK,
        r#"{"status":"0","info":"DAILY_QUERY_OVER_LIMIT","infocode":"10003"}"#,
    )
    .await;
    let client = client_for(&stub.base_url);

    let err = client
        .geocode(&GeocodeRequest::new("阜通东大街6号"))
        .await
        .unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.api_code(), Some("10003"));
}

#[tokio::test]
async fn invalid_input_never_reaches_the_service() {
    let stub = spawn_stub(StatusCode::OK, "{}").await;
    let client = client_for(&stub.base_url);

    assert!(client
        .walking(&WalkingRequest::default())
        .await
        .unwrap_err()
        .is_invalid_config());
    assert!(client
        .geocode(&GeocodeRequest::new(" "))
        .await
        .unwrap_err()
        .is_invalid_config());
    assert!(stub.requests().is_empty());
}
