use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .route("/habits/", get(handlers::list_habits).post(handlers::create_habit))
        .route("/habits/:habit_id", delete(handlers::delete_habit))
        .route("/logs/", get(handlers::list_logs).post(handlers::create_log))
        .route("/logs/:log_id", delete(handlers::delete_log))
        .route("/dashboard/", get(handlers::dashboard))
        .route("/streak/:habit_id", get(handlers::habit_streak))
        .route("/progress/month", get(handlers::monthly_progress))
        .route("/quotes/", get(handlers::daily_quote))
        .with_state(state)
}
