//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use herhealth_core::error::CoreError;
use herhealth_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(email = %user.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's email (from `claims.email`).
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{HeaderValue, Request};
    use herhealth_core::store::MemoryUserStore;

    use super::*;
    use crate::auth::jwt::{generate_access_token, JwtConfig};
    use crate::config::ServerConfig;

    fn state() -> AppState {
        AppState {
            store: Arc::new(MemoryUserStore::new()),
            config: Arc::new(ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
                cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
                request_timeout_secs: 30,
                database_url: "postgres://unused".into(),
                db_max_connections: 1,
                jwt: JwtConfig {
                    secret: "extractor-test-secret".into(),
                    access_token_expiry_mins: 5,
                },
            }),
        }
    }

    fn parts(authorization: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/api/assessments");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn bearer_token_yields_user_id_and_email() {
        let state = state();
        let token = generate_access_token(42, "sana@example.com", &state.config.jwt).unwrap();

        let user = AuthUser::from_request_parts(&mut parts(Some(format!("Bearer {token}"))), &state)
            .await
            .unwrap();

        assert_eq!(user.user_id, 42);
        assert_eq!(user.email, "sana@example.com");
    }

    #[tokio::test]
    async fn missing_or_malformed_header_is_rejected() {
        let state = state();
        for header in [None, Some("Token abc".to_string()), Some("Bearer nope".to_string())] {
            let result = AuthUser::from_request_parts(&mut parts(header), &state).await;
            assert!(matches!(result, Err(AppError::Core(CoreError::Unauthorized(_)))));
        }
    }
}
