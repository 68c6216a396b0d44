use crate::errors::AppError;
use crate::models::AppData;
use axum::http::{header, HeaderMap};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Salted SHA-256 digest stored as `<salt>$<hex digest>`.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest(&salt, password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Opens a session and returns the opaque bearer token for it.
pub fn issue_token(data: &mut AppData, user_id: u64) -> String {
    let token = Uuid::new_v4().to_string();
    data.sessions.insert(token.clone(), user_id);
    token
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the request's bearer token to a user id. A session is valid
/// exactly while its token is in the live set; there is no expiry.
pub fn authenticate(data: &AppData, headers: &HeaderMap) -> Result<u64, AppError> {
    let token =
        bearer_token(headers).ok_or_else(|| AppError::unauthorized("missing bearer token"))?;
    data.sessions
        .get(token)
        .copied()
        .ok_or_else(|| AppError::unauthorized("unknown session token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn hash_then_verify_roundtrip() {
        let stored = hash_password("hunter2");
        assert!(verify_password("hunter2", &stored));
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn hashes_are_salted() {
        assert_ne!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn verify_rejects_malformed_stored_hash() {
        assert!(!verify_password("hunter2", "no-separator-here"));
    }

    #[test]
    fn authenticate_resolves_issued_tokens_only() {
        let mut data = AppData::default();
        let token = issue_token(&mut data, 7);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert_eq!(authenticate(&data, &headers).unwrap(), 7);

        data.sessions.remove(&token);
        assert!(authenticate(&data, &headers).is_err());

        assert!(authenticate(&data, &HeaderMap::new()).is_err());
    }
}
