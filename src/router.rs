use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::role::require_admin;
use crate::modules::announcements::router::init_announcements_router;
use crate::modules::assignments::router::init_assignments_router;
use crate::modules::attendance::router::init_attendance_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::contact::router::{init_appointments_router, init_contact_router};
use crate::modules::course_enrollments::router::init_course_enrollments_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::gallery::router::init_gallery_router;
use crate::modules::grades::router::init_grades_router;
use crate::modules::materials::router::init_materials_router;
use crate::modules::schedule::router::init_schedule_router;
use crate::modules::sessions::router::init_sessions_router;
use crate::modules::testimonials::router::init_testimonials_router;
use crate::modules::users::router::init_users_router;
use crate::modules::videos::router::init_videos_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/users",
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest("/courses", init_courses_router())
                .nest("/enrollments", init_enrollments_router())
                .nest("/course-enrollments", init_course_enrollments_router())
                .nest("/attendance", init_attendance_router())
                .nest("/grades", init_grades_router())
                .nest("/assignments", init_assignments_router())
                .nest("/schedule", init_schedule_router())
                .nest("/sessions", init_sessions_router())
                .nest("/videos", init_videos_router())
                .nest("/materials", init_materials_router())
                .nest("/gallery", init_gallery_router())
                .nest("/testimonials", init_testimonials_router())
                .nest("/announcements", init_announcements_router())
                .nest("/contact", init_contact_router())
                .nest("/appointments", init_appointments_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http())
}
