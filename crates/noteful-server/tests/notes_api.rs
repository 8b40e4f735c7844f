//! End-to-end tests for the notes API.
//!
//! Each test starts the full application (middleware included) on an
//! ephemeral port and talks to it over real HTTP with `reqwest`.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p noteful-server --test notes_api
//! ```

use noteful_core::{Note, NoteId};
use noteful_server::{build_app, AppState, ServerConfig};
use noteful_store::Store;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

// ============================================================================
// Helpers
// ============================================================================

/// Start a server over `notes` and return its base URL.
async fn spawn_server(notes: Vec<Note>) -> String {
    let store = Store::with_notes(notes).expect("valid seed");
    let app = build_app(AppState::new(store, ServerConfig::default()));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{addr}")
}

fn dog() -> Note {
    Note {
        id: NoteId(1),
        title: "Dog".to_string(),
        content: "Woof".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn create_read_delete_lifecycle() {
    let base = spawn_server(vec![dog()]).await;
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{base}/api/notes"))
        .json(&json!({"title": "Cat"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, format!("{base}/api/notes/2"));
    let created: Value = response.json().await.unwrap();
    assert_eq!(created, json!({"id": 2, "title": "Cat", "content": ""}));

    // Read it back through the Location header
    let response = client.get(&location).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), created);

    // Delete
    let response = client.delete(&location).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    // Gone
    let response = client.get(&location).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Not found");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn search_filters_by_substring() {
    let base = spawn_server(vec![
        dog(),
        Note {
            id: NoteId(2),
            title: "Cat".to_string(),
            content: "Chases the Dog".to_string(),
        },
        Note {
            id: NoteId(3),
            title: "Fish".to_string(),
            content: "Blub".to_string(),
        },
    ])
    .await;
    let client = Client::new();

    let notes: Vec<Note> = client
        .get(format!("{base}/api/notes"))
        .query(&[("searchTerm", "Dog")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<u64> = notes.iter().map(|n| n.id.get()).collect();
    assert_eq!(ids, vec![1, 2]);

    let all: Vec<Note> = client
        .get(format!("{base}/api/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn update_keeps_unsent_fields() {
    let base = spawn_server(vec![dog()]).await;
    let client = Client::new();

    let response = client
        .put(format!("{base}/api/notes/1"))
        .json(&json!({"content": "Bark"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Note = response.json().await.unwrap();
    assert_eq!(updated.title, "Dog");
    assert_eq!(updated.content, "Bark");

    let response = client
        .put(format!("{base}/api/notes/5"))
        .json(&json!({"title": "Ghost"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_errors_are_json() {
    let base = spawn_server(Vec::new()).await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/api/notes"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Missing title in request body");
    assert_eq!(body["error"]["status"], 400);

    let response = client
        .delete(format!("{base}/api/notes"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["notes"], 0);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let base = spawn_server(Vec::new()).await;

    let response = Client::new()
        .get(format!("{base}/api/notes"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
