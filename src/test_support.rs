use actix_web::middleware::NormalizePath;
use actix_web::{App, web};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use crate::api::employee::CreateEmployee;
use crate::{db, routes};

/// Fresh in-memory database with migrations applied. One connection, so every
/// query sees the same memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid memory url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    db::migrate(&pool).await.expect("Failed to migrate test database");
    pool
}

pub async fn attendance_count(pool: &SqlitePool, employee_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance_records WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count attendance records")
}

pub fn create_app(
    pool: SqlitePool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(routes::cors())
        .wrap(NormalizePath::trim())
        .app_data(web::Data::new(pool))
        .configure(|cfg| routes::configure(cfg, "/api"))
}

pub fn sample_employee(code: &str) -> CreateEmployee {
    CreateEmployee {
        name: format!("Employee {code}"),
        employee_id: code.to_string(),
        position: "Engineer".to_string(),
        is_active: true,
        avatar: None,
    }
}
