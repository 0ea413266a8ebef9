use crate::{
    db::{models::ErrorResponse, DbClient},
    CONFIG,
};
use axum::{
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    BoxError, Json, Router,
};
use std::time::Duration;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorError,
    GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use super::{handlers::*, index::index};

/// Origins listed in CORS_ORIGINS, `None` when any origin is allowed
fn parse_origins(origins: &str) -> Option<Vec<HeaderValue>> {
    if origins.trim() == "*" {
        return None;
    }

    let list: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    (!list.is_empty()).then_some(list)
}

fn allowed_origins(origins: &str) -> AllowOrigin {
    match parse_origins(origins) {
        Some(list) => AllowOrigin::list(list),
        None => AllowOrigin::from(Any),
    }
}

/// Throttled requests get 429 with the governor's retry headers, anything else 500
fn layer_error_response(err: BoxError) -> Response {
    if let Some(GovernorError::TooManyRequests { wait_time, headers }) =
        err.downcast_ref::<GovernorError>()
    {
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(format!(
                "Too many requests, retry in {}s",
                wait_time
            ))),
        )
            .into_response();
        if let Some(headers) = headers {
            response.headers_mut().extend(headers.clone());
        }
        return response;
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unhandled error: {}", err),
    )
        .into_response()
}

pub fn initialize_router(db: DbClient) -> Router {
    let error_handler = || {
        ServiceBuilder::new().layer(HandleErrorLayer::new(|err: BoxError| async move {
            layer_error_response(err)
        }))
    };

    let global_rate_limit = |req_per_sec: u64| {
        ServiceBuilder::new()
            .layer(error_handler())
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(req_per_sec, Duration::from_secs(1)))
    };

    let rate_limit_per_ip = |timeout: u64, limit: u32| {
        let config = Box::new(
            GovernorConfigBuilder::default()
                .per_second(timeout)
                .burst_size(limit)
                .use_headers()
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("rate limit period and burst size are non-zero"),
        );

        ServiceBuilder::new()
            .layer(error_handler())
            .layer(GovernorLayer {
                config: Box::leak(config),
            })
    };

    let cors = |method: Method| {
        ServiceBuilder::new().layer(
            CorsLayer::new()
                .allow_methods(method)
                .allow_headers(Any)
                .allow_origin(allowed_origins(&CONFIG.cors_origins)),
        )
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Each group gets its own buckets, visitors are keyed by X-Forwarded-For or peer address
    let lead_routes = Router::new()
        .route("/contact", post(submit_contact_form))
        .route("/sell-request", post(submit_sell_request))
        .route("/swap-request", post(submit_swap_request))
        .route("/repair-booking", post(submit_repair_booking))
        .route("/price-quote", post(submit_price_quote))
        .layer(
            global_rate_limit(50)
                .layer(rate_limit_per_ip(2, 10))
                .layer(cors(Method::POST))
                .layer(CompressionLayer::new().zstd(true)),
        );

    let read_routes = Router::new()
        .route("/products", get(get_products))
        .route("/products/:product_id", get(get_product))
        .route("/categories", get(get_categories))
        .route("/testimonials", get(get_testimonials))
        .route("/repair-services", get(get_repair_services))
        .route("/sell-requests", get(get_sell_requests))
        .route("/swap-requests", get(get_swap_requests))
        .route("/repair-bookings", get(get_repair_bookings))
        .layer(
            global_rate_limit(10000)
                .layer(rate_limit_per_ip(1, 100))
                .layer(cors(Method::GET))
                .layer(CompressionLayer::new().zstd(true)),
        );

    let api = Router::new()
        .route("/", get(|| async { index() }))
        .route("/health", get(health_check))
        .merge(lead_routes)
        .merge(read_routes);

    Router::new()
        .nest("/api", api)
        .layer(trace_layer)
        .with_state(db)
}
