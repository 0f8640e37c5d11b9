mod common;

use deadline_tracker::api::router;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn spawn_server() -> String {
    let (state, _pool) = common::test_state().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_deadline_lifecycle_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/", base))
        .json(&json!({
            "course": "BIOL 130",
            "title": "Cell biology exam",
            "type": "EXAM",
            "due_date": "2026-10-20",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["type"], "exam");
    assert_eq!(created["daysRemaining"], 2);
    assert_eq!(created["overdue"], false);
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{}/{}", base, id))
        .json(&json!({
            "course": "BIOL 130",
            "title": "Cell biology midterm",
            "type": "Midterm",
            "due_date": "2026-10-12",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["type"], "midterm");
    assert_eq!(updated["daysRemaining"], -7);
    assert_eq!(updated["overdue"], true);

    let response = client
        .post(format!("{}/", base))
        .json(&json!({
            "course": "BIOL 130",
            "title": "Pop quiz",
            "type": "quiz",
            "due_date": "2026-10-22",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list: Value = client
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["title"], "Cell biology midterm");

    let response = client
        .delete(format!("{}/{}", base, "00000000-0000-0000-0000-000000000000"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
