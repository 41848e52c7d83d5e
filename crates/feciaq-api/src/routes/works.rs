//! Routes for work submission and area lookup.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use feciaq_core::model::Work;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use feciaq_works::application::{command_handlers, query_handlers};
use feciaq_works::domain::commands::SubmitWork;
use feciaq_works::domain::submission::WorkSubmission;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for POST /works.
#[derive(Debug, Serialize)]
pub struct SubmitWorkResponse {
    /// The persisted work with its authors.
    pub work: Work,
}

/// Response body for GET /works/area/{area_code}.
#[derive(Debug, Serialize)]
pub struct WorksResponse {
    /// Every work registered under the requested area.
    pub works: Vec<Work>,
}

/// POST /works
#[instrument(skip(state, payload))]
async fn submit_work(
    State(state): State<AppState>,
    payload: Result<Json<WorkSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitWorkResponse>), ApiError> {
    let Json(submission) = payload?;
    let command = SubmitWork {
        correlation_id: Uuid::new_v4(),
        submission,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_work command");

    let work = command_handlers::handle_submit_work(
        &command,
        state.clock.as_ref(),
        state.work_repository.as_ref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(SubmitWorkResponse { work })))
}

/// GET /works/area/{area_code}
#[instrument(skip(state))]
async fn list_works_by_area(
    State(state): State<AppState>,
    Path(area_code): Path<String>,
) -> Result<Json<WorksResponse>, ApiError> {
    let works =
        query_handlers::list_works_by_area(&area_code, state.work_repository.as_ref()).await?;

    Ok(Json(WorksResponse { works }))
}

/// Returns the router for works.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/works", post(submit_work))
        .route("/works/area/{area_code}", get(list_works_by_area))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use chrono::Utc;
    use feciaq_core::repository::WorkRepository;
    use feciaq_test_support::{
        FailingWorkRepository, FixedClock, RecordingWorkRepository, fixtures,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(work_repository: Arc<dyn WorkRepository>) -> AppState {
        AppState::new(Arc::new(FixedClock(Utc::now())), work_repository)
    }

    fn test_app_state() -> AppState {
        app_state_with(Arc::new(RecordingWorkRepository::new()))
    }

    fn failing_app_state() -> AppState {
        app_state_with(Arc::new(FailingWorkRepository))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    fn post_works(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/works")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_submit_work_returns_201_with_persisted_work() {
        // Arrange
        let app = router().with_state(test_app_state());

        // Act
        let (status, json) = send(app, post_works(&fixtures::valid_work_payload())).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        Uuid::parse_str(json["work"]["id"].as_str().unwrap()).unwrap();
        assert_eq!(json["work"]["title"], "Effects of X");
        assert_eq!(json["work"]["area"], "CAE");
        assert_eq!(json["work"]["code"], "CAE01");
        let authors = json["work"]["authors"].as_array().unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0]["name"], "Ana Silva");
        assert_eq!(authors[0]["gender"], "F");
        assert_eq!(authors[0]["nationalId"], "12345678901");
        assert!(authors[0]["id"].is_string());
    }

    #[tokio::test]
    async fn test_submit_work_with_no_authors_returns_400() {
        // Arrange
        let app = router().with_state(test_app_state());
        let mut payload = fixtures::valid_work_payload();
        payload["authors"] = serde_json::json!([]);

        // Act
        let (status, json) = send(app, post_works(&payload)).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["errors"],
            serde_json::json!(["work must have between 2 and 7 authors"])
        );
    }

    #[tokio::test]
    async fn test_submit_work_lists_every_violation_in_order() {
        // Arrange
        let app = router().with_state(test_app_state());
        let payload = serde_json::json!({
            "title": "",
            "area": "Saude",
            "code": "cae01",
            "authors": [{ "name": "Maria", "gender": "X", "nationalId": "123" }]
        });

        // Act
        let (status, json) = send(app, post_works(&payload)).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["errors"],
            serde_json::json!([
                "title must not be empty",
                "area must be one of: CAE, CET, CBS, CHCSA, MDIS",
                "code must be the area's 3-letter prefix followed by 2 digits",
                "work must have between 2 and 7 authors",
                "author names must include first and last name",
                "author gender must be M or F",
                "author national id must be exactly 11 digits with no punctuation"
            ])
        );
    }

    #[tokio::test]
    async fn test_submit_work_with_missing_authors_returns_count_message_only() {
        // Arrange
        let app = router().with_state(test_app_state());
        let payload = serde_json::json!({
            "title": "Effects of X",
            "area": "CAE",
            "code": "CAE01",
            "authors": "Ana Silva"
        });

        // Act
        let (status, json) = send(app, post_works(&payload)).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["errors"],
            serde_json::json!(["work must have between 2 and 7 authors"])
        );
    }

    #[tokio::test]
    async fn test_submit_work_with_mistyped_fields_reports_rule_messages() {
        // Arrange
        let app = router().with_state(test_app_state());
        let payload = serde_json::json!({
            "title": "",
            "area": 5,
            "code": "CAE01",
            "authors": [
                null,
                { "name": "Joao Souza", "gender": "M", "nationalId": 10987654321_u64 }
            ]
        });

        // Act
        let (status, json) = send(app, post_works(&payload)).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["errors"],
            serde_json::json!([
                "title must not be empty",
                "area must be one of: CAE, CET, CBS, CHCSA, MDIS",
                "author names must include first and last name",
                "author gender must be M or F",
                "author national id must be exactly 11 digits with no punctuation"
            ])
        );
    }

    #[tokio::test]
    async fn test_submit_work_with_malformed_json_returns_400() {
        // Arrange
        let app = router().with_state(test_app_state());
        let request = Request::builder()
            .method("POST")
            .uri("/works")
            .header("content-type", "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();

        // Act
        let (status, json) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = json["errors"][0].as_str().unwrap();
        assert!(message.starts_with("malformed request body"));
    }

    #[tokio::test]
    async fn test_submit_work_returns_500_when_repository_fails() {
        // Arrange
        let app = router().with_state(failing_app_state());

        // Act
        let (status, json) = send(app, post_works(&fixtures::valid_work_payload())).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["errors"], serde_json::json!(["internal server error"]));
    }

    #[tokio::test]
    async fn test_list_works_by_area_returns_matching_works() {
        // Arrange
        let repo = Arc::new(RecordingWorkRepository::new());
        for work in fixtures::seed_works(3, Utc::now()) {
            repo.create_work(&work).await.unwrap();
        }
        let app = router().with_state(app_state_with(repo));

        // Act
        let (status, json) = send(app, get_request("/works/area/CET")).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let works = json["works"].as_array().unwrap();
        assert_eq!(works.len(), 3);
        assert!(works.iter().all(|work| work["area"] == "CET"));
    }

    #[tokio::test]
    async fn test_list_works_by_area_returns_400_for_unknown_area() {
        // Arrange
        let app = router().with_state(failing_app_state());

        // Act
        let (status, json) = send(app, get_request("/works/area/Sa%C3%BAde")).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"], serde_json::json!(["invalid area"]));
    }

    #[tokio::test]
    async fn test_list_works_by_area_returns_500_when_repository_fails() {
        // Arrange
        let app = router().with_state(failing_app_state());

        // Act
        let (status, json) = send(app, get_request("/works/area/CBS")).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["errors"], serde_json::json!(["internal server error"]));
    }
}
