use crate::db::DbClient;
use axum::{extract::State, http::StatusCode, Json};

/// Health check endpoint reporting the Postgres and Redis connections
pub async fn health_check(State(db): State<DbClient>) -> (StatusCode, Json<serde_json::Value>) {
    let database_status = match db.get_db_conn().await {
        Err(e) => serde_json::json!({
            "status": "error",
            "message": e.to_string()
        }),
        Ok(_) => serde_json::json!("connected"),
    };

    let redis_status = match db.ping_redis().await {
        Err(e) => serde_json::json!({
            "status": "error",
            "message": e.to_string()
        }),
        Ok(_) => serde_json::json!("connected"),
    };

    let health_status = serde_json::json!({
        "status": "healthy",
        "database": database_status,
        "redis": redis_status,
        "timestamp": chrono::Utc::now()
    });

    (StatusCode::OK, Json(health_status))
}
