use std::sync::Arc;
use warp::Filter;

use crate::game_manager::GameManager;
use game_types::ClearResultsQuery;

pub mod auth;
pub mod config;
pub mod error;
pub mod game_manager;
pub mod handlers;

pub fn create_routes(
    game_manager: Arc<GameManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let game_manager_filter = warp::any().map({
        let game_manager = game_manager.clone();
        move || game_manager.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Identity slot
    let login = warp::path("session")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(game_manager_filter.clone())
        .and_then(handlers::login);

    let current_identity = warp::path("session")
        .and(warp::path::end())
        .and(warp::get())
        .and(game_manager_filter.clone())
        .and_then(handlers::current_identity);

    let logout = warp::path("session")
        .and(warp::path::end())
        .and(warp::delete())
        .and(game_manager_filter.clone())
        .and_then(handlers::logout);

    // Rounds
    let start_game = warp::path("game")
        .and(warp::path::end())
        .and(warp::post())
        .and(game_manager_filter.clone())
        .and_then(handlers::start_game);

    let session_view = warp::path("game")
        .and(warp::path::end())
        .and(warp::get())
        .and(game_manager_filter.clone())
        .and_then(handlers::session_view);

    let submit_guess = warp::path!("game" / "guess")
        .and(warp::post())
        .and(warp::body::json())
        .and(game_manager_filter.clone())
        .and_then(handlers::submit_guess);

    // Statistics
    let player_summary = warp::path!("stats" / "me")
        .and(warp::get())
        .and(game_manager_filter.clone())
        .and_then(handlers::player_summary);

    let statistics = warp::path!("admin" / "stats")
        .and(warp::get())
        .and(game_manager_filter.clone())
        .and_then(handlers::statistics);

    let clear_results = warp::path!("admin" / "results")
        .and(warp::delete())
        .and(warp::query::<ClearResultsQuery>())
        .and(game_manager_filter.clone())
        .and_then(handlers::clear_results);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    health
        .or(login)
        .or(current_identity)
        .or(logout)
        .or(start_game)
        .or(session_view)
        .or(submit_guess)
        .or(player_summary)
        .or(statistics)
        .or(clear_results)
        .recover(handlers::handle_rejection)
        .with(cors)
        .with(warp::log("word_craft"))
}
