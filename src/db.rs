use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::api::employee::CreateEmployee;
use crate::repo;
use crate::utils::avatar;

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url: {database_url}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    migrate(&pool).await?;
    info!(url = %database_url, "Database ready");

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")
}

/// Demo staff inserted by `seed_demo_employees`: (name, personnel code, position)
const DEMO_EMPLOYEES: [(&str, &str, &str); 7] = [
    ("Ali Mohammadi", "10001", "Senior Developer"),
    ("Sara Ahmadi", "10002", "UI Designer"),
    ("Hossein Karimi", "10003", "Product Manager"),
    ("Maryam Rezaei", "10004", "Marketing Specialist"),
    ("Mohammad Jafari", "10005", "Mobile Developer"),
    ("Zahra Hosseini", "10006", "Project Manager"),
    ("Amir Abbasi", "10007", "Data Analyst"),
];

fn demo_employees() -> Vec<CreateEmployee> {
    DEMO_EMPLOYEES
        .iter()
        .enumerate()
        .map(|(i, (name, code, position))| CreateEmployee {
            name: name.to_string(),
            employee_id: code.to_string(),
            position: position.to_string(),
            is_active: true,
            avatar: Some(avatar::default_avatar(i)),
        })
        .collect()
}

/// Fills an empty directory with the demo staff. Returns how many rows were added;
/// a directory that already has employees is left alone.
pub async fn seed_demo_employees(pool: &SqlitePool) -> Result<usize> {
    seed_employees(pool, &demo_employees()).await
}

/// All rows go in under one transaction: either every employee is added or none.
async fn seed_employees(pool: &SqlitePool, employees: &[CreateEmployee]) -> Result<usize> {
    if repo::employee::count(pool).await? > 0 {
        info!("Employees present, skipping demo seed");
        return Ok(0);
    }

    let mut tx = pool.begin().await.context("Failed to start seed transaction")?;
    for data in employees {
        repo::employee::insert(&mut *tx, data)
            .await
            .with_context(|| format!("Failed to seed employee {}", data.employee_id))?;
    }
    tx.commit().await.context("Failed to commit demo seed")?;

    info!(count = employees.len(), "Demo employees seeded");
    Ok(employees.len())
}
