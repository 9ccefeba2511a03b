//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{PlanService, SubscriptionService, TeamService, UserService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::modules::{auth, health, plans, subscriptions, teams};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        auth::get_current_user,
        auth::change_password,
        teams::list_teams,
        teams::create_team,
        teams::rename_team,
        teams::delete_team,
        plans::list_plans,
        plans::create_plan,
        plans::update_plan,
        plans::upgrade_price,
        subscriptions::list_subscriptions,
        subscriptions::subscribe,
        subscriptions::get_subscription,
        subscriptions::quote_upgrade,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::UserInfo,
            auth::ChangePasswordRequest,
            teams::TeamRequest,
            teams::TeamResponse,
            plans::PlanRequest,
            plans::PlanResponse,
            plans::UpgradePriceResponse,
            subscriptions::SubscribeRequest,
            subscriptions::SubscriptionResponse,
            subscriptions::SubscriptionDetailResponse,
            subscriptions::OrderResponse,
            subscriptions::ActivationResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Authentication", description = "Registration, login (JWT), profile and password change"),
        (name = "Teams", description = "Teams owned by the caller"),
        (name = "Plans", description = "Plan catalogue and prorated upgrade pricing"),
        (name = "Subscriptions", description = "Subscriptions, their orders and activations"),
    ),
    info(
        title = "Subscription Service API",
        version = "1.0.0",
        description = "Plans, subscriptions and prorated plan-change pricing",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt_config: JwtConfig) -> Router {
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    let auth_layer_state = AuthState {
        jwt_config: jwt_config.clone(),
    };
    let require_auth = middleware::from_fn_with_state(auth_layer_state, auth_middleware);

    // ── Health (public) ─────────────────────────────────────────

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    // ── Auth ────────────────────────────────────────────────────

    let auth_state = auth::AuthHandlerState {
        users: Arc::new(UserService::new(repos.clone(), jwt_config)),
    };

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .with_state(auth_state.clone());

    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/change-password", put(auth::change_password))
        .layer(require_auth.clone())
        .with_state(auth_state);

    // ── Teams (protected) ───────────────────────────────────────

    let team_routes = Router::new()
        .route("/", get(teams::list_teams).post(teams::create_team))
        .route("/{id}", put(teams::rename_team).delete(teams::delete_team))
        .layer(require_auth.clone())
        .with_state(teams::TeamHandlerState {
            teams: Arc::new(TeamService::new(repos.clone())),
        });

    // ── Plans (reads public, writes protected) ──────────────────

    let plan_routes = Router::new()
        .route(
            "/",
            get(plans::list_plans).merge(post(plans::create_plan).route_layer(require_auth.clone())),
        )
        .route("/upgrade-price", get(plans::upgrade_price))
        .route(
            "/{id}",
            put(plans::update_plan).route_layer(require_auth.clone()),
        )
        .with_state(plans::PlanHandlerState {
            plans: Arc::new(PlanService::new(repos.clone())),
        });

    // ── Subscriptions (protected) ───────────────────────────────

    let subscription_routes = Router::new()
        .route(
            "/",
            get(subscriptions::list_subscriptions).post(subscriptions::subscribe),
        )
        .route("/{id}", get(subscriptions::get_subscription))
        .route("/{id}/upgrade-price", get(subscriptions::quote_upgrade))
        .layer(require_auth)
        .with_state(subscriptions::SubscriptionHandlerState {
            subscriptions: Arc::new(SubscriptionService::new(repos)),
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .nest("/api/v1/auth", auth_routes.merge(auth_protected_routes))
        .nest("/api/v1/teams", team_routes)
        .nest("/api/v1/plans", plan_routes)
        .nest("/api/v1/subscriptions", subscription_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
