use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Resolves the snapshot location (`APP_DATA_PATH` override, otherwise
/// `data/habits.json`) and makes sure its directory exists.
pub async fn prepare_data_path() -> Result<PathBuf, std::io::Error> {
    let path = match env::var("APP_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/habits.json"),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    Ok(path)
}

/// Loads the persisted snapshot. A missing file is a fresh install; an
/// unreadable or unparseable one is logged and treated the same way.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse habit data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read habit data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
