use std::time::Instant;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    handlers::{
        games::{create_game, delete_game, get_game, list_games},
        lists::{
            add_game_to_list, check_membership, create_list, delete_list, get_list,
            list_games_in_list, list_lists, move_game_in_list, remove_game_from_list,
        },
        logs::{get_level, put_level},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        // 游戏
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game).delete(delete_game))
        // 列表
        .route("/lists", get(list_lists).post(create_list))
        .route("/lists/{id}", get(get_list).delete(delete_list))
        .route(
            "/lists/{list_id}/games",
            get(list_games_in_list).post(add_game_to_list),
        )
        .route(
            "/lists/{list_id}/games/{game_id}",
            get(check_membership).delete(remove_game_from_list),
        )
        .route("/lists/{list_id}/replacement", post(move_game_in_list))
        // 日志级别（运行时调整）
        .route("/log-level", get(get_level).put(put_level))
        .layer(cors_layer(cors_origins))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// 构建 CORS 配置；未配置来源时允许任意来源
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("忽略无效的 CORS 来源: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}

/// 记录每个请求的方法、路径、状态码和耗时
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::test_support::memory_db;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        create_app(AppState::from_connection(memory_db().await), &[])
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn empty_store_lists_are_empty() {
        let app = test_app().await;

        let (status, games) = send(&app, "GET", "/games", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(games, json!([]));

        let (status, lists) = send(&app, "GET", "/lists", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(lists, json!([]));
    }

    #[tokio::test]
    async fn unknown_game_is_404() {
        let app = test_app().await;
        let (status, body) = send(&app, "GET", "/games/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Game not found: 99");
    }

    #[tokio::test]
    async fn favorites_scenario() {
        let app = test_app().await;

        let (status, a) = send(&app, "POST", "/games", Some(json!({ "title": "A", "year": 2001 }))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, b) = send(&app, "POST", "/games", Some(json!({ "title": "B" }))).await;
        let (status, list) = send(&app, "POST", "/lists", Some(json!({ "name": "Favorites" }))).await;
        assert_eq!(status, StatusCode::CREATED);

        let list_uri = format!("/lists/{}/games", list["id"]);
        let (status, link) = send(&app, "POST", &list_uri, Some(json!({ "gameId": a["id"] }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(link["position"], 0);

        let (status, members) = send(&app, "GET", &list_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            members,
            json!([{
                "id": a["id"],
                "title": "A",
                "year": 2001,
                "imgUrl": null,
                "shortDescription": null
            }])
        );
        assert!(
            members
                .as_array()
                .unwrap()
                .iter()
                .all(|g| g["id"] != b["id"])
        );

        let (status, full) = send(&app, "GET", &format!("/games/{}", a["id"]), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(full["title"], "A");
        assert!(full.get("longDescription").is_some());

        let (status, lists) = send(&app, "GET", "/lists", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(lists, json!([{ "id": list["id"], "name": "Favorites" }]));
    }

    #[tokio::test]
    async fn deleting_member_game_cascades() {
        let app = test_app().await;
        let (_, game) = send(&app, "POST", "/games", Some(json!({ "title": "A" }))).await;
        let (_, list) = send(&app, "POST", "/lists", Some(json!({ "name": "Favorites" }))).await;
        let list_uri = format!("/lists/{}/games", list["id"]);
        send(&app, "POST", &list_uri, Some(json!({ "gameId": game["id"] }))).await;

        let (status, _) = send(&app, "DELETE", &format!("/games/{}", game["id"]), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, members) = send(&app, "GET", &list_uri, None).await;
        assert_eq!(members, json!([]));

        let (status, _) = send(&app, "DELETE", &format!("/games/{}", game["id"]), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn membership_conflicts_are_409() {
        let app = test_app().await;
        let (_, game) = send(&app, "POST", "/games", Some(json!({ "title": "A" }))).await;
        let (_, list) = send(&app, "POST", "/lists", Some(json!({ "name": "Favorites" }))).await;
        let list_uri = format!("/lists/{}/games", list["id"]);

        let (status, _) = send(&app, "POST", &list_uri, Some(json!({ "gameId": game["id"] }))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(&app, "POST", &list_uri, Some(json!({ "gameId": game["id"] }))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, "POST", "/lists/999/games", Some(json!({ "gameId": game["id"] }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn remove_and_replacement_endpoints() {
        let app = test_app().await;
        let (_, list) = send(&app, "POST", "/lists", Some(json!({ "name": "Ranked" }))).await;
        let list_uri = format!("/lists/{}/games", list["id"]);

        let mut ids = Vec::new();
        for title in ["A", "B", "C"] {
            let (_, game) = send(&app, "POST", "/games", Some(json!({ "title": title }))).await;
            send(&app, "POST", &list_uri, Some(json!({ "gameId": game["id"] }))).await;
            ids.push(game["id"].clone());
        }

        let replacement_uri = format!("/lists/{}/replacement", list["id"]);
        let (status, _) = send(
            &app,
            "POST",
            &replacement_uri,
            Some(json!({ "sourceIndex": 0, "destinationIndex": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, members) = send(&app, "GET", &list_uri, None).await;
        let order: Vec<Value> = members.as_array().unwrap().iter().map(|g| g["id"].clone()).collect();
        assert_eq!(order, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);

        let (status, _) = send(
            &app,
            "POST",
            &replacement_uri,
            Some(json!({ "sourceIndex": 5, "destinationIndex": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            &replacement_uri,
            Some(json!({ "sourceIndex": -1, "destinationIndex": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let member_uri = format!("{}/{}", list_uri, ids[1]);
        let (status, body) = send(&app, "GET", &member_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["member"], true);

        let (status, _) = send(&app, "DELETE", &format!("{}/{}", list_uri, ids[1]), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, "GET", &member_uri, None).await;
        assert_eq!(body, json!({ "gameId": ids[1], "listId": list["id"], "member": false }));
        let (status, _) = send(&app, "DELETE", &format!("{}/{}", list_uri, ids[1]), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, members) = send(&app, "GET", &list_uri, None).await;
        assert_eq!(members.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn blank_title_is_400() {
        let app = test_app().await;
        let (status, _) = send(&app, "POST", "/games", Some(json!({ "title": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_log_level_is_400() {
        let app = test_app().await;
        let (status, _) = send(&app, "PUT", "/log-level", Some(json!({ "level": "loud" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/log-level", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["level"].is_string());
    }

    #[tokio::test]
    async fn log_level_off_round_trips() {
        let app = test_app().await;
        let (status, body) = send(&app, "PUT", "/log-level", Some(json!({ "level": "off" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "off");

        let (status, body) = send(&app, "GET", "/log-level", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "off");
    }
}
