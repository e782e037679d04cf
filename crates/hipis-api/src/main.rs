use std::env;
use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod demo;
mod error;
mod middleware;
mod notify;
mod routes;
mod state;

use hipis_auth::token::TokenService;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    // Refuse to start without a signing secret.
    let tokens = TokenService::from_env().map_err(|e| eyre::eyre!(e))?;

    let bucket = env::var("HIPIS_BUCKET").unwrap_or_else(|_| "hipis".to_string());
    let demo_mode = env::var("HIPIS_DEMO")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let s3 = hipis_storage::client::build_client().await;

    let state = AppState {
        s3,
        bucket,
        tokens: Arc::new(tokens),
        demo: demo_mode,
    };

    let auth_state = state.clone();
    let auth = move || axum_mw::from_fn_with_state(auth_state.clone(), middleware::auth::require_auth);

    let counsellor_routes = Router::new()
        .route(
            "/clients",
            get(routes::counsellor::get_clients).post(routes::counsellor::add_client),
        )
        .route(
            "/clients/{client_id}",
            get(routes::counsellor::get_client_details),
        )
        .route(
            "/appointments/today",
            get(routes::counsellor::todays_appointments),
        )
        .route(
            "/appointments/upcoming",
            get(routes::counsellor::upcoming_appointments),
        )
        .route(
            "/notes",
            get(routes::counsellor::recent_notes).post(routes::counsellor::create_note),
        )
        .route("/stats", get(routes::counsellor::stats))
        .layer(auth());

    let admin_routes = Router::new()
        .route("/stats", get(routes::admin::stats))
        .route("/users", get(routes::admin::users))
        .route("/wellness", get(routes::admin::wellness_metrics))
        .route("/appointments", get(routes::admin::appointment_analytics))
        .route("/resources", get(routes::admin::resource_engagement))
        .route("/forum", get(routes::admin::forum_activity))
        .route("/flags", get(routes::admin::high_risk_flags))
        .route("/alerts", get(routes::admin::system_alerts))
        .route(
            "/users/{user_id}/status",
            patch(routes::admin::update_user_status),
        )
        .route("/assign-counselor", post(routes::admin::assign_counsellor))
        // Gate 2 runs after Gate 1: outermost layer first.
        .layer(axum_mw::from_fn(middleware::auth::require_admin))
        .layer(auth());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/api/ping", get(routes::health::ping))
        // Auth
        .route("/api/auth/signup", post(routes::auth::signup))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/profile", get(routes::auth::profile).layer(auth()))
        // Questionnaires (no auth — public schema data)
        .route(
            "/api/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/api/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        // Resource library: reads are public, creation requires identity
        .route(
            "/api/resources",
            get(routes::resources::list_resources)
                .merge(post(routes::resources::create_resource).layer(auth())),
        )
        .route("/api/resources/{id}", get(routes::resources::get_resource))
        .route(
            "/api/resources/{id}/likes",
            patch(routes::resources::update_likes),
        )
        .route(
            "/api/comments/{resource_id}",
            get(routes::comments::list_comments),
        )
        .route(
            "/api/comments",
            post(routes::comments::create_comment).layer(auth()),
        )
        // Wellness / mood tracking
        .route(
            "/api/wellness/{id}",
            get(routes::wellness::list_mood_entries)
                .delete(routes::wellness::delete_mood_entry)
                .layer(auth()),
        )
        .route(
            "/api/wellness",
            post(routes::wellness::create_mood_entry).layer(auth()),
        )
        // Appointments
        .route(
            "/api/appointments/{user_id}",
            get(routes::appointments::list_appointments).layer(auth()),
        )
        .route(
            "/api/appointments",
            post(routes::appointments::create_appointment).layer(auth()),
        )
        .route(
            "/api/appointments/{id}/cancel",
            patch(routes::appointments::cancel_appointment).layer(auth()),
        )
        // Assessments
        .route(
            "/api/assessments/{user_id}",
            get(routes::assessments::list_assessments).layer(auth()),
        )
        .route(
            "/api/assessments",
            post(routes::assessments::create_assessment).layer(auth()),
        )
        // Support
        .route(
            "/api/support/contact",
            post(routes::support::create_contact_request).layer(auth()),
        )
        // Notifications
        .route(
            "/api/notifications/{user_id}",
            get(routes::notifications::list_notifications).layer(auth()),
        )
        .route(
            "/api/notifications/{user_id}/read",
            post(routes::notifications::mark_all_read).layer(auth()),
        )
        .route(
            "/api/notifications/read/{id}",
            post(routes::notifications::mark_one_read).layer(auth()),
        )
        // Forum: listing and view counts are public
        .route(
            "/api/forum",
            get(routes::forum::list_posts)
                .merge(post(routes::forum::create_post).layer(auth())),
        )
        .route("/api/forum/{id}/like", post(routes::forum::like_post).layer(auth()))
        .route(
            "/api/forum/{id}/replies",
            post(routes::forum::add_reply).layer(auth()),
        )
        .route("/api/forum/{id}/view", post(routes::forum::increment_view))
        .nest("/api/counselor", counsellor_routes)
        .nest("/api/admin", admin_routes)
        .layer(axum_mw::from_fn(middleware::audit::request_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
