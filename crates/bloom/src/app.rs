use std::time::Duration;

use axum::{
    http::{Method, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        admin::{admin_login, admin_stats},
        contact::{
            create_contact_message, delete_contact_message, list_contact_messages,
            mark_contact_message_read,
        },
        events::{create_event, delete_event, get_event, list_events, update_event},
        gallery::{
            create_gallery_item, delete_gallery_item, get_gallery_item, list_gallery_items,
            update_gallery_item,
        },
        root::root,
        seed::{init_tables, seed_database},
        status::{create_status_check, list_status_checks},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/", get(root))
        .route("/status", get(list_status_checks).post(create_status_check))
        // Gallery routes
        .route("/gallery", get(list_gallery_items).post(create_gallery_item))
        .route(
            "/gallery/{id}",
            get(get_gallery_item)
                .put(update_gallery_item)
                .delete(delete_gallery_item),
        )
        // Event routes
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        // Contact routes
        .route(
            "/contact",
            get(list_contact_messages).post(create_contact_message),
        )
        .route("/contact/{id}", delete(delete_contact_message))
        .route("/contact/{id}/read", put(mark_contact_message_read))
        // Admin routes
        .route("/admin/login", post(admin_login))
        .route("/admin/stats", get(admin_stats))
        // Bootstrap
        .route("/seed", post(seed_database))
        .route("/init-tables", post(init_tables))
        .layer(cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
