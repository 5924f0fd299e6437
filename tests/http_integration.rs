// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and driver using wiremock.

use std::time::Duration;

use modernforms_lib::command::Command;
use modernforms_lib::device::{DeviceKind, HubDevice};
use modernforms_lib::event::{DeviceEvent, EventBus};
use modernforms_lib::protocol::{HttpClient, HttpClientBuilder, Transport};
use modernforms_lib::types::{FanDirection, FanSpeed, LightLevel, SwitchState};
use modernforms_lib::{DriverConfig, FanDriver, FanDriverBuilder, ProtocolError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn address(mock_server: &MockServer) -> String {
    mock_server.uri().replace("http://", "")
}

fn full_state() -> serde_json::Value {
    json!({
        "fanOn": true,
        "fanSpeed": 4,
        "fanDirection": "forward",
        "lightOn": false,
        "lightBrightness": 0,
        "adaptiveLearning": false,
        "awayModeEnabled": false
    })
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn query_posts_json_to_mf() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"queryDynamicShadowData": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_state()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client
            .post(&address(&mock_server), &Command::QueryState)
            .await
            .unwrap();

        assert!(response.body().contains("\"fanSpeed\":4"));
    }

    #[tokio::test]
    async fn command_bodies() {
        let mock_server = MockServer::start().await;

        for body in [
            json!({"fanOn": false}),
            json!({"fanSpeed": 5}),
            json!({"fanDirection": "reverse"}),
            json!({"lightOn": true}),
            json!({"lightBrightness": 40}),
        ] {
            Mock::given(method("POST"))
                .and(path("/mf"))
                .and(body_json(body))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = HttpClient::new().unwrap();
        let addr = address(&mock_server);
        for command in [
            Command::FanOn(false),
            Command::FanSpeed(5),
            Command::FanDirection(FanDirection::Reverse),
            Command::LightOn(true),
            Command::LightBrightness(LightLevel::new(40).unwrap()),
        ] {
            client.post(&addr, &command).await.unwrap();
        }
    }

    #[tokio::test]
    async fn server_error_is_connection_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.post(&address(&mock_server), &Command::QueryState).await;

        match result {
            Err(ProtocolError::ConnectionFailed(message)) => assert!(message.contains("500")),
            other => panic!("expected connection failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_appliance_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(full_state())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpClientBuilder::new()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let err = client
            .post(&address(&mock_server), &Command::QueryState)
            .await
            .unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn reboot_gives_up_after_one_second() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"reboot": true})))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .post(&address(&mock_server), &Command::Reboot)
            .await
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Timeout(1000)));
    }

    #[tokio::test]
    async fn empty_address_is_rejected() {
        let client = HttpClient::new().unwrap();
        let err = client.post("  ", &Command::QueryState).await.unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidAddress(_)));
    }
}

// ============================================================================
// Driver Tests
// ============================================================================

mod driver {
    use super::*;

    fn driver(mock_server: &MockServer) -> FanDriver<HttpClient> {
        let fan = HubDevice::new("mf-1", "Den Fan", DeviceKind::Fan, EventBus::new());
        let config = DriverConfig::from_json(&format!(
            r#"{{"ipAddress":"{}","pollIntervalSecs":300,"logEnable":true}}"#,
            address(mock_server)
        ))
        .unwrap();
        FanDriverBuilder::new(fan, config).build(HttpClient::new().unwrap())
    }

    async fn mount_query(mock_server: &MockServer, state: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"queryDynamicShadowData": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(state))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn install_reports_fan_and_light() {
        let mock_server = MockServer::start().await;
        mount_query(&mock_server, full_state()).await;

        let driver = driver(&mock_server);
        let mut events = driver.subscribe();
        driver.installed().await;

        let fan = driver.fan().attributes();
        assert_eq!(fan.speed(), Some(FanSpeed::Medium));
        assert_eq!(fan.switch(), Some(SwitchState::On));
        assert_eq!(fan.direction(), Some(&FanDirection::Forward));
        assert_eq!(fan.supported_fan_speeds(), Some(&FanSpeed::SELECTABLE[..]));

        let light = driver.light().unwrap();
        assert_eq!(light.label(), "Den Fan Light");
        assert_eq!(light.attributes().switch(), Some(SwitchState::Off));
        assert_eq!(light.attributes().level(), Some(LightLevel::MIN));

        let mut changes = 0;
        let mut children = 0;
        while let Ok(event) = events.try_recv() {
            match event {
                DeviceEvent::AttributeChanged { .. } => changes += 1,
                DeviceEvent::ChildAdded { .. } => children += 1,
            }
        }
        assert_eq!(changes, 6);
        assert_eq!(children, 1);
    }

    #[tokio::test]
    async fn set_speed_posts_code_and_applies_answer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"fanSpeed": 6})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"fanOn": true, "fanSpeed": 6})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let driver = driver(&mock_server);
        driver.set_speed("high").await;

        assert_eq!(driver.fan().attributes().speed(), Some(FanSpeed::High));
    }

    #[tokio::test]
    async fn reverse_direction_posts_then_queries() {
        let mock_server = MockServer::start().await;
        mount_query(&mock_server, full_state()).await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"fanDirection": "reverse"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"fanDirection": "reverse"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let driver = driver(&mock_server);
        driver.refresh().await;
        driver.reverse_direction().await;

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[2].body_json::<serde_json::Value>().unwrap(),
            json!({"queryDynamicShadowData": 1})
        );
    }

    #[tokio::test]
    async fn reboot_emits_no_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"reboot": true})))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let driver = driver(&mock_server);
        let mut events = driver.subscribe();
        driver.reboot().await;

        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn unreachable_appliance_changes_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let driver = driver(&mock_server);
        driver.refresh().await;
        driver.on().await;

        assert_eq!(driver.fan().attributes().switch(), None);
        assert!(driver.light().is_none());
    }
}
