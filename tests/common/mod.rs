#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ouraterm::{DateWindow, OuraClient, OuraWidget, Settings};

pub const TOKEN: &str = "MFKOR3Z4WHJ7XBHURYSJNSZ7DMCYH7P2";

pub fn window() -> DateWindow {
    DateWindow::ending_on(NaiveDate::from_ymd_opt(2021, 9, 7).unwrap(), 3)
}

pub fn client(server: &MockServer) -> OuraClient {
    OuraClient::with_window(TOKEN, window()).with_base_url(format!("{}/v1", server.uri()))
}

pub fn widget(server: &MockServer) -> OuraWidget {
    let settings = Settings {
        my_name: "Me".to_string(),
        ..Settings::default()
    };
    OuraWidget::with_client(settings, client(server))
}

pub fn userinfo() -> Value {
    json!({"age": 34, "weight": 65.5, "gender": "female", "email": "me@example.com"})
}

pub fn sleep(date: &str, score: i32) -> Value {
    json!({
        "summary_date": date, "period_id": 1, "is_longest": 1, "timezone": 120,
        "bedtime_start": "2021-09-04T23:10:00+02:00",
        "bedtime_end": "2021-09-05T07:02:00+02:00",
        "score": score, "score_total": 85, "score_disturbances": 70, "score_efficiency": 90,
        "score_latency": 88, "score_rem": 75, "score_deep": 95, "score_alignment": 60,
        "total": 26400, "duration": 28320, "awake": 1920, "light": 14400,
        "rem": 5400, "deep": 6600, "onset_latency": 480, "restless": 30,
        "efficiency": 93, "midpoint_time": 14000, "hr_lowest": 48, "hr_average": 52.5,
        "rmssd": 60, "breath_average": 14.5, "temperature_delta": -0.1,
        "hypnogram_5min": "443432222211222333321112222222222111133333322221112233333333332232222334",
        "hr_5min": [0, 53, 51, 0, 50, 50, 49],
        "rmssd_5min": [0, 0, 62, 0, 75, 52, 56]
    })
}

pub fn readiness(date: &str, score: i32) -> Value {
    json!({
        "summary_date": date, "period_id": 0, "score": score,
        "score_previous_night": 70, "score_sleep_balance": 75, "score_previous_day": 90,
        "score_activity_balance": 88, "score_resting_hr": 94, "score_hrv_balance": 80,
        "score_recovery_index": 100, "score_temperature": 97, "rest_mode_state": 0
    })
}

pub fn activity(date: &str, steps: u32) -> Value {
    json!({
        "summary_date": date,
        "day_start": "2021-09-05T04:00:00+02:00",
        "day_end": "2021-09-06T03:59:59+02:00",
        "timezone": 120, "score": 87,
        "score_stay_active": 90, "score_move_every_hour": 100, "score_meet_daily_targets": 60,
        "score_training_frequency": 96, "score_training_volume": 95, "score_recovery_time": 100,
        "daily_movement": 7806, "non_wear": 313, "rest": 426, "inactive": 429,
        "inactivity_alerts": 0, "low": 224, "medium": 49, "high": 0, "steps": steps,
        "cal_total": 2540, "cal_active": 416,
        "met_min_inactive": 9, "met_min_low": 167, "met_min_medium_plus": 159,
        "met_min_medium": 159, "met_min_high": 0, "average_met": 1.4375,
        "class_5min": "1112211111111111111111111111111111111111111111233322322223333323322222220000000000000000",
        "met_1min": [1.2, 1.0, 0.9],
        "rest_mode_state": 0
    })
}

pub fn bedtime(date: &str, status: &str) -> Value {
    json!({"date": date, "bedtime_window": {"start": -3600, "end": -1800}, "status": status})
}

pub async fn mount_json(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/{}", resource)))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, resource: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/{}", resource)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts a successful response for every resource.
pub async fn mount_all(server: &MockServer) {
    mount_all_but_bedtime(server).await;
    mount_json(
        server,
        "bedtime",
        json!({"ideal_bedtimes": [bedtime("2021-09-07", "IDEAL_BEDTIME_AVAILABLE")]}),
    )
    .await;
}

pub async fn mount_all_but_bedtime(server: &MockServer) {
    mount_json(server, "userinfo", userinfo()).await;
    mount_json(
        server,
        "sleep",
        json!({"sleep": [sleep("2021-09-05", 71), sleep("2021-09-06", 82), sleep("2021-09-07", 93)]}),
    )
    .await;
    mount_json(
        server,
        "readiness",
        json!({"readiness": [readiness("2021-09-06", 64), readiness("2021-09-07", 77)]}),
    )
    .await;
    mount_json(
        server,
        "activity",
        json!({"activity": [activity("2021-09-06", 9001)]}),
    )
    .await;
}

/// Paths of every request the server has seen, in arrival order.
pub async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}
