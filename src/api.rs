use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Json},
};
use base64::{Engine, engine::general_purpose};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SESSION_COOKIE: &str = "admin_session";

#[derive(Deserialize)]
pub struct AuthRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    authorized: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: String,
    timestamp: String,
}

pub fn create_signed_cookie(secret: &str, value: &str) -> Result<String, String> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| "Invalid secret key")?;
    mac.update(value.as_bytes());
    let signature = mac.finalize().into_bytes();
    let signature_b64 = general_purpose::URL_SAFE_NO_PAD.encode(signature);
    Ok(format!("{}:{}", value, signature_b64))
}

pub fn verify_signed_cookie(secret: &str, signed_value: &str) -> bool {
    if let Some((value, signature_b64)) = signed_value.split_once(':')
        && let Ok(signature) = general_purpose::URL_SAFE_NO_PAD.decode(signature_b64)
        && let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes())
    {
        mac.update(value.as_bytes());
        return mac.verify_slice(&signature).is_ok();
    }
    false
}

pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get("cookie")?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key.trim() == name).then(|| value.trim().to_string())
        })
}

pub fn is_admin(headers: &HeaderMap, secret: &str) -> bool {
    get_cookie_value(headers, SESSION_COOKIE)
        .map(|signed_value| verify_signed_cookie(secret, &signed_value))
        .unwrap_or(false)
}

/// Admin console login. On a password match this sets the HMAC-signed
/// session cookie the gallery admin endpoints check.
pub async fn authenticate_handler(
    State(app_state): State<crate::AppState>,
    Json(payload): Json<AuthRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    tracing::info!("Admin authentication attempt received");
    let config = &app_state.config;

    if payload.password == config.app.admin_password {
        tracing::info!("Admin authentication successful");
        match create_signed_cookie(&config.app.session_secret, "admin") {
            Ok(signed_value) => {
                let cookie = format!(
                    "{}={}; Path=/; Max-Age=86400; HttpOnly; SameSite=Lax",
                    SESSION_COOKIE, signed_value
                );

                let mut headers = HeaderMap::new();
                let cookie = cookie
                    .parse()
                    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
                headers.insert(SET_COOKIE, cookie);

                let response = AuthResponse {
                    success: true,
                    message: "Authentication successful".to_string(),
                };

                Ok((headers, Json(response)))
            }
            Err(_) => {
                let response = AuthResponse {
                    success: false,
                    message: "Server error".to_string(),
                };
                Ok((HeaderMap::new(), Json(response)))
            }
        }
    } else {
        tracing::warn!("Admin authentication failed - invalid password");
        let response = AuthResponse {
            success: false,
            message: "Invalid password".to_string(),
        };
        Ok((HeaderMap::new(), Json(response)))
    }
}

pub async fn verify_handler(
    State(app_state): State<crate::AppState>,
    headers: HeaderMap,
) -> Json<VerifyResponse> {
    let authorized = is_admin(&headers, &app_state.config.app.session_secret);
    Json(VerifyResponse { authorized })
}

pub async fn health_handler(State(app_state): State<crate::AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: app_state.config.app.name.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_cookie_round_trips() {
        let signed = create_signed_cookie("secret", "admin").unwrap();
        assert!(verify_signed_cookie("secret", &signed));
    }

    #[test]
    fn tampered_value_fails_verification() {
        let signed = create_signed_cookie("secret", "admin").unwrap();
        let tampered = signed.replacen("admin", "root", 1);
        assert!(!verify_signed_cookie("secret", &tampered));
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let signed = create_signed_cookie("secret", "admin").unwrap();
        assert!(!verify_signed_cookie("other-secret", &signed));
    }

    #[test]
    fn cookie_value_is_extracted_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            "theme=dark; admin_session=abc:def; lang=en".parse().unwrap(),
        );
        assert_eq!(
            get_cookie_value(&headers, SESSION_COOKIE),
            Some("abc:def".to_string())
        );
        assert_eq!(get_cookie_value(&headers, "missing"), None);
    }
}
