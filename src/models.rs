use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

/// One completed-habit record. `date` keeps the raw ISO-8601 string the
/// client sent (calendar date or date-time); aggregation truncates it to the
/// calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    pub id: u64,
    pub habit_id: u64,
    pub user_id: u64,
    pub date: String,
}

/// Everything the service persists, serialized as one JSON snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub users: Vec<User>,
    pub habits: Vec<Habit>,
    pub logs: Vec<HabitLog>,
    /// Live bearer tokens, token -> user id. A token stays valid until logout.
    pub sessions: BTreeMap<String, u64>,
    pub next_user_id: u64,
    pub next_habit_id: u64,
    pub next_log_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: u64,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogCreateRequest {
    pub habit_id: u64,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub date: String,
    pub count: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityItem {
    pub habit_name: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProgress {
    pub percent: u8,
    pub completed_days: u32,
    pub total_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyCompletion {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub days_completed: u8,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_habits: usize,
    pub completed_today: usize,
    pub current_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub heatmap: Vec<HeatmapCell>,
    pub recent: Vec<ActivityItem>,
    pub weekly: Vec<WeeklyCompletion>,
}

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub current_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
}
