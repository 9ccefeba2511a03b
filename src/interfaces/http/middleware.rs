//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::common::ApiResponse;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Caller identity inserted into request extensions by `auth_middleware`.
///
/// Carries no admin flag: admin checks read the stored user row.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: &TokenClaims) -> Option<Self> {
        Some(Self {
            user_id: claims.user_id()?,
            email: claims.email.clone(),
        })
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer JWT authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    let claims = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => claims,
        Err(e) => {
            return match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    auth_error_response(AuthError::ExpiredToken)
                }
                _ => auth_error_response(AuthError::InvalidToken),
            }
        }
    };
    if claims.is_expired() {
        return auth_error_response(AuthError::ExpiredToken);
    }

    let Some(user) = AuthenticatedUser::from_claims(&claims) else {
        return auth_error_response(AuthError::InvalidToken);
    };
    request.extensions_mut().insert(user);
    next.run(request).await
}

fn auth_error_response(error: AuthError) -> Response {
    let message = match error {
        AuthError::MissingToken => "Missing authentication token",
        AuthError::InvalidToken => "Invalid authentication token",
        AuthError::ExpiredToken => "Token has expired",
    };

    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use tower::ServiceExt;

    use crate::infrastructure::crypto::jwt::create_token;

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{}:{}", user.user_id, user.email)
    }

    fn app() -> Router {
        let state = AuthState {
            jwt_config: JwtConfig::default(),
        };
        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn_with_state(state, auth_middleware))
    }

    async fn call(auth: Option<String>) -> StatusCode {
        let mut req = Request::builder().uri("/whoami");
        if let Some(value) = auth {
            req = req.header(header::AUTHORIZATION, value);
        }
        app()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Basic abc"), None);
        assert_eq!(extract_token("Bearer "), None);
    }

    #[tokio::test]
    async fn valid_token_passes() {
        let token = create_token(7, "u@mail.com", false, &JwtConfig::default()).unwrap();
        assert_eq!(call(Some(format!("Bearer {}", token))).await, StatusCode::OK);
    }

    #[test]
    fn identity_comes_from_subject_and_email() {
        let claims = TokenClaims::new(7, "u@mail.com", true, &JwtConfig::default());
        let user = AuthenticatedUser::from_claims(&claims).unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.email, "u@mail.com");

        let mut bad = claims.clone();
        bad.sub = "not-a-number".into();
        assert!(AuthenticatedUser::from_claims(&bad).is_none());
    }

    #[tokio::test]
    async fn missing_or_bad_token_is_401() {
        assert_eq!(call(None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(
            call(Some("Bearer not-a-jwt".into())).await,
            StatusCode::UNAUTHORIZED
        );

        let foreign = JwtConfig {
            secret: "someone-elses-secret".into(),
            ..JwtConfig::default()
        };
        let token = create_token(7, "u@mail.com", false, &foreign).unwrap();
        assert_eq!(
            call(Some(format!("Bearer {}", token))).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn expired_token_is_401() {
        let expired = JwtConfig {
            expiration_hours: -2,
            ..JwtConfig::default()
        };
        let token = create_token(7, "u@mail.com", false, &expired).unwrap();
        assert_eq!(
            call(Some(format!("Bearer {}", token))).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
