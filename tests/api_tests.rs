//! API integration tests
//!
//! These run against a live server with a fresh database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a business with a Monday 09:00-12:00 schedule and a
/// 30-minute offering; returns (business_id, offering_id)
async fn setup_business(client: &Client, slug: &str) -> (i64, i64) {
    let response = client
        .post(format!("{}/businesses", BASE_URL))
        .json(&json!({
            "name": "Test Salon",
            "slug": slug,
            "timezone": "Europe/Paris"
        }))
        .send()
        .await
        .expect("Failed to create business");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse business");
    let business_id = body["id"].as_i64().expect("No business ID");

    let response = client
        .post(format!("{}/businesses/{}/working-hours", BASE_URL, business_id))
        .json(&json!({
            "day_of_week": 1,
            "start_time": "09:00",
            "end_time": "12:00"
        }))
        .send()
        .await
        .expect("Failed to create working hours");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/businesses/{}/offerings", BASE_URL, business_id))
        .json(&json!({
            "name": "Haircut",
            "duration_minutes": 30,
            "price": "25.00"
        }))
        .send()
        .await
        .expect("Failed to create offering");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse offering");
    let offering_id = body["id"].as_i64().expect("No offering ID");

    (business_id, offering_id)
}

/// Next Monday after today, as YYYY-MM-DD
fn next_monday() -> String {
    use chrono::{Datelike, Duration, Utc};
    let today = Utc::now().date_naive();
    let days_ahead = (7 - today.weekday().num_days_from_monday()) % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    (today + Duration::days(days_ahead as i64))
        .format("%Y-%m-%d")
        .to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_business_rejects_bad_timezone() {
    let client = Client::new();

    let response = client
        .post(format!("{}/businesses", BASE_URL))
        .json(&json!({
            "name": "Bad Zone",
            "slug": "bad-zone",
            "timezone": "Mars/Olympus_Mons"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_working_hours_reject_invalid_day() {
    let client = Client::new();
    let (business_id, _) = setup_business(&client, "invalid-day").await;

    let response = client
        .post(format!("{}/businesses/{}/working-hours", BASE_URL, business_id))
        .json(&json!({
            "day_of_week": 0,
            "start_time": "09:00",
            "end_time": "12:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_availability_for_open_monday() {
    let client = Client::new();
    let (business_id, offering_id) = setup_business(&client, "avail-monday").await;
    let monday = next_monday();

    let response = client
        .get(format!("{}/businesses/{}/availability", BASE_URL, business_id))
        .query(&[
            ("offering_id", offering_id.to_string()),
            ("from", monday.clone()),
            ("to", monday.clone()),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slots = body["slots"][&monday].as_array().expect("No slots for Monday");
    // 09:00-12:00 with 30-minute slots: six candidates
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[0], "09:00:00");
    assert_eq!(slots[5], "11:30:00");
}

#[tokio::test]
#[ignore]
async fn test_booking_removes_slot_and_rebooking_conflicts() {
    let client = Client::new();
    let (business_id, offering_id) = setup_business(&client, "double-booking").await;
    let monday = next_monday();

    let booking = json!({
        "offering_id": offering_id,
        "date": monday,
        "time": "10:00",
        "guest": {
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com"
        }
    });

    let response = client
        .post(format!("{}/businesses/{}/appointments", BASE_URL, business_id))
        .json(&booking)
        .send()
        .await
        .expect("Failed to book");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse appointment");
    assert_eq!(body["status"], "confirmed");

    // The 10:00 slot must be gone from availability
    let response = client
        .get(format!("{}/businesses/{}/availability", BASE_URL, business_id))
        .query(&[
            ("offering_id", offering_id.to_string()),
            ("from", monday.clone()),
            ("to", monday.clone()),
        ])
        .send()
        .await
        .expect("Failed to fetch availability");
    let avail: Value = response.json().await.expect("Failed to parse availability");
    let slots = avail["slots"][&monday].as_array().expect("No slots");
    assert!(!slots.iter().any(|s| s == "10:00:00"));

    // Booking the same slot again is rejected
    let response = client
        .post(format!("{}/businesses/{}/appointments", BASE_URL, business_id))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_custom_hours_override_weekly_schedule() {
    let client = Client::new();
    let (business_id, offering_id) = setup_business(&client, "override").await;
    let monday = next_monday();

    let response = client
        .put(format!("{}/businesses/{}/custom-working-hours", BASE_URL, business_id))
        .json(&json!({
            "work_date": monday,
            "start_time": "14:00",
            "end_time": "16:00"
        }))
        .send()
        .await
        .expect("Failed to upsert override");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/businesses/{}/availability", BASE_URL, business_id))
        .query(&[
            ("offering_id", offering_id.to_string()),
            ("from", monday.clone()),
            ("to", monday.clone()),
        ])
        .send()
        .await
        .expect("Failed to fetch availability");
    let body: Value = response.json().await.expect("Failed to parse availability");
    let slots = body["slots"][&monday].as_array().expect("No slots");
    // Only the override window applies, never the 09:00-12:00 schedule
    assert_eq!(slots[0], "14:00:00");
    assert!(slots.iter().all(|s| {
        let s = s.as_str().unwrap();
        s >= "14:00:00" && s < "16:00:00"
    }));
}

#[tokio::test]
#[ignore]
async fn test_past_slot_check_returns_unavailable() {
    let client = Client::new();
    let (business_id, offering_id) = setup_business(&client, "past-slot").await;

    let response = client
        .get(format!("{}/businesses/{}/availability/check", BASE_URL, business_id))
        .query(&[
            ("offering_id", offering_id.to_string()),
            ("date", "2020-01-06".to_string()),
            ("time", "09:00".to_string()),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["available"], false);
}

#[tokio::test]
#[ignore]
async fn test_appointment_lifecycle_and_rating() {
    let client = Client::new();
    let (business_id, offering_id) = setup_business(&client, "lifecycle").await;
    let monday = next_monday();

    let response = client
        .post(format!("{}/businesses/{}/appointments", BASE_URL, business_id))
        .json(&json!({
            "offering_id": offering_id,
            "date": monday,
            "time": "09:00",
            "guest": {
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": "grace@example.com"
            }
        }))
        .send()
        .await
        .expect("Failed to book");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse appointment");
    let appointment_id = body["id"].as_i64().expect("No appointment ID");

    // Rating before completion is rejected
    let response = client
        .post(format!("{}/appointments/{}/rating", BASE_URL, appointment_id))
        .json(&json!({ "score": 5 }))
        .send()
        .await
        .expect("Failed to send rating");
    assert_eq!(response.status(), 422);

    // Complete, then rate
    let response = client
        .post(format!("{}/appointments/{}/complete", BASE_URL, appointment_id))
        .send()
        .await
        .expect("Failed to complete");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/appointments/{}/rating", BASE_URL, appointment_id))
        .json(&json!({ "score": 5, "comment": "Great service" }))
        .send()
        .await
        .expect("Failed to rate");
    assert_eq!(response.status(), 201);

    // Completed is terminal: cancel must fail
    let response = client
        .post(format!("{}/appointments/{}/cancel", BASE_URL, appointment_id))
        .send()
        .await
        .expect("Failed to send cancel");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_cancelled_appointment_frees_the_slot() {
    let client = Client::new();
    let (business_id, offering_id) = setup_business(&client, "cancel-frees").await;
    let monday = next_monday();

    let response = client
        .post(format!("{}/businesses/{}/appointments", BASE_URL, business_id))
        .json(&json!({
            "offering_id": offering_id,
            "date": monday,
            "time": "11:00",
            "guest": {
                "first_name": "Alan",
                "last_name": "Turing",
                "email": "alan@example.com"
            }
        }))
        .send()
        .await
        .expect("Failed to book");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse appointment");
    let appointment_id = body["id"].as_i64().expect("No appointment ID");

    let response = client
        .post(format!("{}/appointments/{}/cancel", BASE_URL, appointment_id))
        .send()
        .await
        .expect("Failed to cancel");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/businesses/{}/availability", BASE_URL, business_id))
        .query(&[
            ("offering_id", offering_id.to_string()),
            ("from", monday.clone()),
            ("to", monday.clone()),
        ])
        .send()
        .await
        .expect("Failed to fetch availability");
    let body: Value = response.json().await.expect("Failed to parse availability");
    let slots = body["slots"][&monday].as_array().expect("No slots");
    assert!(slots.iter().any(|s| s == "11:00:00"));
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();
    let (business_id, _) = setup_business(&client, "stats").await;

    let response = client
        .get(format!("{}/businesses/{}/stats", BASE_URL, business_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["appointments"]["total"].is_number());
    assert!(body["guests"].is_number());
    assert!(body["ratings"]["count"].is_number());
}
