//! HTTP-level tests for the group client, against a mock backend.

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use recordshop_core::{ClientConfig, ClientError, MemoryTokenStore};
use recordshop_groups::{Group, GroupClient, GroupPayload, UNKNOWN_GENRE};

fn client_for(server: &MockServer) -> GroupClient {
    recordshop_observability::init();
    GroupClient::new(
        ClientConfig::new(server.base_url()),
        Arc::new(MemoryTokenStore::new()),
    )
}

fn rock_payload() -> GroupPayload {
    GroupPayload {
        id: None,
        name: "Rock".to_string(),
        image: Some("rock.png".to_string()),
        genre_id: Some(2),
    }
}

#[tokio::test]
async fn list_resolves_images_and_genre_metadata() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/groups");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{
                    "IdGroup": 1,
                    "NameGroup": "Rock",
                    "ImageGroup": "rock.png",
                    "MusicGenreId": 2,
                    "NameMusicGenre": "Rock",
                    "TotalRecords": 5
                }]
            }));
        })
        .await;

    let groups = client_for(&server).list().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].image_url, "assets/img/rock.png");
    assert_eq!(groups[0].image_file.as_deref(), Some("rock.png"));
    assert_eq!(groups[0].genre_name, "Rock");
    assert_eq!(groups[0].total_records, 5);
}

#[tokio::test]
async fn list_requires_the_success_envelope() {
    for body in [
        json!([{"IdGroup": 1}]),
        json!({"success": false, "data": []}),
        json!({"$values": [{"IdGroup": 1}]}),
    ] {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/groups");
                then.status(200).json_body(body.clone());
            })
            .await;

        assert_eq!(
            client_for(&server).list().await.unwrap(),
            Vec::<Group>::new()
        );
    }
}

#[tokio::test]
async fn list_defaults_missing_genre_name() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/groups");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{"IdGroup": 3, "NameGroup": "Misc", "MusicGenreId": 0}]
            }));
        })
        .await;

    let groups = client_for(&server).list().await.unwrap();
    assert_eq!(groups[0].genre_name, UNKNOWN_GENRE);
}

#[tokio::test]
async fn create_with_missing_name_fails_locally() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/groups");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let payload = GroupPayload {
        name: String::new(),
        genre_id: Some(2),
        ..GroupPayload::default()
    };
    let err = client_for(&server).create(&payload).await.unwrap_err();

    let ClientError::Validation { status, message } = err else {
        panic!("expected Validation, got {err:?}");
    };
    assert_eq!(status, 400);
    assert!(message.contains("Group name"));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn create_names_every_missing_field() {
    let server = MockServer::start_async().await;
    let err = client_for(&server)
        .create(&GroupPayload::default())
        .await
        .unwrap_err();

    let ClientError::Validation { message, .. } = err else {
        panic!("expected Validation");
    };
    assert_eq!(message, "Group name is required, Music genre is required");
}

#[tokio::test]
async fn update_requires_an_id() {
    let server = MockServer::start_async().await;
    let err = client_for(&server)
        .update(&rock_payload())
        .await
        .unwrap_err();

    let ClientError::Validation { message, .. } = err else {
        panic!("expected Validation");
    };
    assert!(message.contains("Group id"));
}

#[tokio::test]
async fn create_unwraps_success_data_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/groups").json_body(json!({
                "NameGroup": "Rock",
                "ImageGroup": "rock.png",
                "MusicGenreId": 2
            }));
            then.status(200).json_body(json!({
                "success": true,
                "data": {"IdGroup": 8, "NameGroup": "Rock", "MusicGenreId": 2}
            }));
        })
        .await;

    let group = client_for(&server).create(&rock_payload()).await.unwrap();
    assert_eq!(group.id, 8);
    assert_eq!(group.name, "Rock");
}

#[tokio::test]
async fn create_falls_back_to_raw_body_then_echo() {
    // Raw entity body, no envelope.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/groups");
            then.status(200)
                .json_body(json!({"IdGroup": 5, "NameGroup": "Rock", "MusicGenreId": 2}));
        })
        .await;
    let group = client_for(&server).create(&rock_payload()).await.unwrap();
    assert_eq!(group.id, 5);

    // Bodyless ack: echo of the submitted entity.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/groups");
            then.status(204);
        })
        .await;
    let group = client_for(&server).create(&rock_payload()).await.unwrap();
    assert_eq!(group.name, "Rock");
    assert_eq!(group.image_url, "assets/img/rock.png");

    // Bare ack object without a group id: still the echo, not a zeroed group.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/groups");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;
    let group = client_for(&server).create(&rock_payload()).await.unwrap();
    assert_eq!(group.name, "Rock");
    assert_eq!(group.genre_id, 2);
}

#[tokio::test]
async fn update_round_trips() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/groups/8");
            then.status(200).json_body(json!({
                "success": true,
                "data": {"IdGroup": 8, "NameGroup": "Hard Rock", "MusicGenreId": 2}
            }));
        })
        .await;

    let payload = GroupPayload {
        id: Some(8),
        name: "Hard Rock".to_string(),
        image: None,
        genre_id: Some(2),
    };
    let group = client_for(&server).update(&payload).await.unwrap();
    mock.assert_async().await;
    assert_eq!(group.name, "Hard Rock");
}

#[tokio::test]
async fn delete_is_a_passthrough() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/groups/3");
            then.status(200).json_body(json!({"success": true, "data": 3}));
        })
        .await;

    let body = client_for(&server).delete(3).await.unwrap();
    assert_eq!(body, json!({"success": true, "data": 3}));
}

#[tokio::test]
async fn group_name_handles_both_known_shapes() {
    let cases = [
        (json!({"nameGroup": "Jazz Legends"}), "Jazz Legends"),
        (json!({"$values": {"nameGroup": "Blues"}}), "Blues"),
        (json!({}), ""),
    ];

    for (body, expected) in cases {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/groups/7");
                then.status(200).json_body(body.clone());
            })
            .await;

        assert_eq!(client_for(&server).group_name(7).await.unwrap(), expected);
    }
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/groups/3");
            then.status(409).body("in use");
        })
        .await;

    let err = client_for(&server).delete(3).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    let ClientError::Api { body, .. } = err else {
        panic!("expected Api error");
    };
    assert_eq!(body, "in use");
}
