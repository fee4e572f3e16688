use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

use crate::error::ApiError;
use crate::game_manager::GameManager;
use game_types::{ClearResultsQuery, ClearResultsResponse, ErrorResponse, GuessRequest, LoginRequest};

fn respond<T: Serialize>(result: Result<T, ApiError>, status: StatusCode) -> Response {
    match result {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), status).into_response(),
        Err(err) => err.into_reply().into_response(),
    }
}

pub async fn login(
    request: LoginRequest,
    game_manager: Arc<GameManager>,
) -> Result<Response, Rejection> {
    let result = game_manager
        .login(&request.username, &request.password)
        .await;
    Ok(respond(result, StatusCode::OK))
}

pub async fn current_identity(game_manager: Arc<GameManager>) -> Result<Response, Rejection> {
    Ok(respond(game_manager.current_identity().await, StatusCode::OK))
}

pub async fn logout(game_manager: Arc<GameManager>) -> Result<Response, Rejection> {
    match game_manager.logout().await {
        Ok(()) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(err) => Ok(err.into_reply().into_response()),
    }
}

pub async fn start_game(game_manager: Arc<GameManager>) -> Result<Response, Rejection> {
    Ok(respond(game_manager.start_game().await, StatusCode::CREATED))
}

pub async fn session_view(game_manager: Arc<GameManager>) -> Result<Response, Rejection> {
    Ok(respond(game_manager.session_view().await, StatusCode::OK))
}

pub async fn submit_guess(
    request: GuessRequest,
    game_manager: Arc<GameManager>,
) -> Result<Response, Rejection> {
    Ok(respond(
        game_manager.submit_guess(&request.word).await,
        StatusCode::OK,
    ))
}

pub async fn player_summary(game_manager: Arc<GameManager>) -> Result<Response, Rejection> {
    Ok(respond(game_manager.player_summary().await, StatusCode::OK))
}

pub async fn statistics(game_manager: Arc<GameManager>) -> Result<Response, Rejection> {
    Ok(respond(game_manager.statistics().await, StatusCode::OK))
}

pub async fn clear_results(
    query: ClearResultsQuery,
    game_manager: Arc<GameManager>,
) -> Result<Response, Rejection> {
    let result = game_manager
        .clear_results(query.confirm.unwrap_or(false))
        .await
        .map(|removed| ClearResultsResponse { removed });
    Ok(respond(result, StatusCode::OK))
}

/// Turn warp's own rejections (unknown route, bad body) into JSON errors.
pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, error, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "not_found", "Not found".to_string())
    } else if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, "invalid_body", err.to_string())
    } else if let Some(err) = rejection.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, "invalid_query", err.to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            "Method not allowed".to_string(),
        )
    } else {
        tracing::error!("Unhandled rejection: {:?}", rejection);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Internal server error".to_string(),
        )
    };

    let body = ErrorResponse {
        error: error.to_string(),
        message,
    };
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
