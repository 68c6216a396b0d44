use crate::auth;
use crate::errors::AppError;
use crate::models::{
    DashboardResponse, Habit, HabitCreateRequest, HabitLog, LogCreateRequest, LoginRequest,
    MessageResponse, MonthlyProgress, QuoteResponse, RegisterRequest, StreakResponse,
    TokenResponse, User, UserOut,
};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use tracing::info;

const QUOTES: &[&str] = &[
    "Small steps every day lead to big results.",
    "Your future is created by what you do today.",
    "Success is the sum of small efforts repeated daily.",
    "Believe you can and you're halfway there.",
];

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserOut>, AppError> {
    let email = payload.email.trim().to_string();
    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request("email and password are required"));
    }

    let mut data = state.data.lock().await;
    if data.users.iter().any(|user| user.email == email) {
        return Err(AppError::conflict("email already registered"));
    }

    data.next_user_id += 1;
    let user = User {
        id: data.next_user_id,
        email,
        full_name: payload.full_name.trim().to_string(),
        password_hash: auth::hash_password(&payload.password),
        created_at: now_string(),
    };
    data.users.push(user.clone());

    persist_data(&state.data_path, &data).await?;
    info!("registered user {}", user.id);

    Ok(Json(UserOut {
        id: user.id,
        email: user.email,
        full_name: user.full_name,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let mut data = state.data.lock().await;
    let user_id = data
        .users
        .iter()
        .find(|user| user.email == payload.email.trim())
        .filter(|user| auth::verify_password(&payload.password, &user.password_hash))
        .map(|user| user.id)
        .ok_or_else(|| AppError::bad_request("invalid email or password"))?;

    let token = auth::issue_token(&mut data, user_id);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    auth::authenticate(&data, &headers)?;

    if let Some(token) = auth::bearer_token(&headers) {
        let token = token.to_string();
        data.sessions.remove(&token);
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "logged out".to_string(),
    }))
}

pub async fn list_habits(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Habit>>, AppError> {
    let data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;
    Ok(Json(habits_of(&data.habits, user_id)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<HabitCreateRequest>,
) -> Result<Json<Habit>, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let mut data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    data.next_habit_id += 1;
    let habit = Habit {
        id: data.next_habit_id,
        user_id,
        name,
        description: payload
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()),
        created_at: now_string(),
    };
    data.habits.push(habit.clone());

    persist_data(&state.data_path, &data).await?;

    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    if !data
        .habits
        .iter()
        .any(|habit| habit.id == habit_id && habit.user_id == user_id)
    {
        return Err(AppError::not_found("habit not found"));
    }

    data.logs.retain(|log| log.habit_id != habit_id);
    data.habits.retain(|habit| habit.id != habit_id);

    persist_data(&state.data_path, &data).await?;
    info!("deleted habit {habit_id} and its logs");

    Ok(Json(MessageResponse {
        message: "habit deleted".to_string(),
    }))
}

pub async fn list_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<HabitLog>>, AppError> {
    let data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    let mut logs = logs_of(&data.logs, user_id);
    logs.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(Json(logs))
}

pub async fn create_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LogCreateRequest>,
) -> Result<Json<HabitLog>, AppError> {
    let mut data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    if !data
        .habits
        .iter()
        .any(|habit| habit.id == payload.habit_id && habit.user_id == user_id)
    {
        return Err(AppError::not_found("habit not found"));
    }

    let date = match payload.date {
        Some(date) => {
            if stats::day_key(&date).is_none() {
                return Err(AppError::bad_request("date must start with YYYY-MM-DD"));
            }
            date
        }
        None => now_string(),
    };

    data.next_log_id += 1;
    let log = HabitLog {
        id: data.next_log_id,
        habit_id: payload.habit_id,
        user_id,
        date,
    };
    data.logs.push(log.clone());

    persist_data(&state.data_path, &data).await?;

    Ok(Json(log))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path(log_id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    if !data
        .logs
        .iter()
        .any(|log| log.id == log_id && log.user_id == user_id)
    {
        return Err(AppError::not_found("log not found"));
    }

    data.logs.retain(|log| log.id != log_id);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "log deleted".to_string(),
    }))
}

/// The whole derived view-model in one response, so the client needs no
/// fan-out beyond its own habit/log fetches.
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    let habits = habits_of(&data.habits, user_id);
    let logs = logs_of(&data.logs, user_id);
    let today = today();

    Ok(Json(DashboardResponse {
        summary: stats::dashboard_summary(&habits, &logs, today),
        heatmap: stats::heatmap(&logs, today, stats::HEATMAP_WINDOW_DAYS),
        recent: stats::recent_activity(&logs, &habits, stats::RECENT_ACTIVITY_LIMIT),
        weekly: stats::weekly_completion(&logs, today, stats::WEEKLY_WINDOWS),
    }))
}

pub async fn habit_streak(
    State(state): State<AppState>,
    Path(habit_id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<StreakResponse>, AppError> {
    let data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    if !data
        .habits
        .iter()
        .any(|habit| habit.id == habit_id && habit.user_id == user_id)
    {
        return Err(AppError::not_found("habit not found"));
    }

    let logs: Vec<HabitLog> = data
        .logs
        .iter()
        .filter(|log| log.habit_id == habit_id)
        .cloned()
        .collect();

    Ok(Json(StreakResponse {
        current_streak: stats::current_streak(&logs, today()),
    }))
}

/// Completed days vs days elapsed in the current calendar month.
pub async fn monthly_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MonthlyProgress>, AppError> {
    let data = state.data.lock().await;
    let user_id = auth::authenticate(&data, &headers)?;

    let logs = logs_of(&data.logs, user_id);
    let today = today();
    let month_prefix = today.format("%Y-%m-").to_string();
    let completed_days = stats::bucket_by_day(&logs)
        .keys()
        .filter(|key| key.starts_with(&month_prefix))
        .count() as u32;

    Ok(Json(stats::monthly_progress(completed_days, today.day())))
}

pub async fn daily_quote() -> Json<QuoteResponse> {
    let day = today().day() as usize;
    Json(QuoteResponse {
        quote: QUOTES[day % QUOTES.len()].to_string(),
    })
}

fn habits_of(habits: &[Habit], user_id: u64) -> Vec<Habit> {
    habits
        .iter()
        .filter(|habit| habit.user_id == user_id)
        .cloned()
        .collect()
}

fn logs_of(logs: &[HabitLog], user_id: u64) -> Vec<HabitLog> {
    logs.iter()
        .filter(|log| log.user_id == user_id)
        .cloned()
        .collect()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now_string() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
