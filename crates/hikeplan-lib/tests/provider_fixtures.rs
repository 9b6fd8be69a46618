//! Decoding of recorded provider responses from `docs/fixtures`.

mod common;

use chrono::NaiveDate;

use hikeplan_lib::notification::render_body;
use hikeplan_lib::trail::parse_trail_response;
use hikeplan_lib::weather::select_forecast_day;
use hikeplan_lib::{Error, Forecast, NotificationContext, PlanRequest};

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
}

#[test]
fn recorded_trail_response_resolves() {
    let trail = parse_trail_response("7003603", &common::fixture("trail_7003603.json"))
        .expect("fixture trail parses");
    assert_eq!(trail.name, "Mount Example Trail");
    assert_eq!(trail.url, "https://example.com/trail/1");
    assert_eq!((trail.lat, trail.lon), (40.0, -105.0));
}

#[test]
fn recorded_unknown_trail_is_not_found() {
    let err = parse_trail_response("9999999", &common::fixture("trail_unknown.json"))
        .expect_err("empty trails array");
    assert!(matches!(err, Error::TrailNotFound { .. }));
}

#[test]
fn recorded_forecast_selects_requested_day() {
    let body = common::fixture("forecast_daily.json");

    let forecast = select_forecast_day(&body, june_first()).expect("fixture forecast parses");
    let weather = forecast.weather();
    assert_eq!(weather.description, "Sunny");
    assert_eq!(weather.high_temp, "75");
    assert_eq!(weather.low_temp, "50");
    assert_eq!(weather.avg_temp, "62");

    let next = select_forecast_day(&body, june_first().succ_opt().unwrap()).unwrap();
    assert_eq!(next.weather().description, "Thunderstorm with rain");
    assert_eq!(next.weather().low_temp, "49.1");
}

#[test]
fn recorded_forecast_outside_window() {
    let body = common::fixture("forecast_daily.json");
    let date = NaiveDate::from_ymd_opt(2023, 8, 15).unwrap();
    assert_eq!(
        select_forecast_day(&body, date).unwrap(),
        Forecast::DateNotInWindow
    );
}

#[test]
fn recorded_responses_render_full_email() {
    let trail = parse_trail_response("7003603", &common::fixture("trail_7003603.json")).unwrap();
    let forecast =
        select_forecast_day(&common::fixture("forecast_daily.json"), june_first()).unwrap();
    let context = NotificationContext {
        request: PlanRequest {
            start_date: june_first(),
            trail_id: "7003603".to_string(),
            username: "alice".to_string(),
        },
        trail,
        forecast,
    };

    let body = render_body(&context, "Alice");
    assert!(body.starts_with("Hi Alice,\n\n"));
    assert!(body.contains("Name of the trail: \t\t\t\t\tMount Example Trail\n"));
    assert!(body.contains("Trail weather on 2023-06-01: \t\t\tSunny\n"));
    assert!(body.ends_with("Happy Hiking!"));
}
