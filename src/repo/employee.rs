use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use super::{RepoError, RepoResult, map_unique_violation};
use crate::api::employee::{CreateEmployee, UpdateEmployee};
use crate::model::employee::Employee;

const COLUMNS: &str = "id, name, employee_id, position, is_active, avatar";

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees WHERE is_active = 1 ORDER BY id");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees WHERE employee_id = ? LIMIT 1");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Inserts a new employee. The personnel code must not be held by any
/// employee, active or not.
pub async fn create(pool: &SqlitePool, data: &CreateEmployee) -> RepoResult<Employee> {
    if find_by_code(pool, &data.employee_id).await?.is_some() {
        return Err(RepoError::Duplicate);
    }

    let mut conn = pool.acquire().await?;
    insert(&mut *conn, data).await
}

/// Plain INSERT on a caller-held connection or transaction. Code uniqueness is
/// left to the UNIQUE constraint.
pub async fn insert(conn: &mut SqliteConnection, data: &CreateEmployee) -> RepoResult<Employee> {
    let sql = format!(
        "INSERT INTO employees (name, employee_id, position, is_active, avatar) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(&data.name)
        .bind(&data.employee_id)
        .bind(&data.position)
        .bind(data.is_active)
        .bind(&data.avatar)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_unique_violation)?;

    debug!(id = employee.id, code = %employee.employee_id, "Employee created");
    Ok(employee)
}

/// Replaces every field except the avatar, which only changes when a new one is given.
pub async fn update(pool: &SqlitePool, id: i64, data: &UpdateEmployee) -> RepoResult<Employee> {
    if find_by_id(pool, id).await?.is_none() {
        return Err(RepoError::NotFound);
    }

    if let Some(holder) = find_by_code(pool, &data.employee_id).await? {
        if holder.id != id {
            return Err(RepoError::Duplicate);
        }
    }

    let sql = format!(
        "UPDATE employees \
         SET name = ?, employee_id = ?, position = ?, is_active = ?, avatar = COALESCE(?, avatar) \
         WHERE id = ? RETURNING {COLUMNS}"
    );
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(&data.name)
        .bind(&data.employee_id)
        .bind(&data.position)
        .bind(data.is_active)
        .bind(&data.avatar)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_unique_violation)?
        .ok_or(RepoError::NotFound)?;

    debug!(id, is_active = employee.is_active, "Employee updated");
    Ok(employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_employee, test_pool};

    #[actix_web::test]
    async fn create_assigns_sequential_ids() {
        let pool = test_pool().await;

        let first = create(&pool, &sample_employee("10001")).await.unwrap();
        let second = create(&pool, &sample_employee("10002")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(find_by_id(&pool, 2).await.unwrap(), Some(second));
    }

    #[actix_web::test]
    async fn duplicate_code_is_rejected_even_when_holder_is_inactive() {
        let pool = test_pool().await;
        let mut inactive = sample_employee("10001");
        inactive.is_active = false;
        create(&pool, &inactive).await.unwrap();

        let err = create(&pool, &sample_employee("10001")).await.unwrap_err();

        assert!(matches!(err, RepoError::Duplicate));
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn find_active_skips_inactive_rows() {
        let pool = test_pool().await;
        create(&pool, &sample_employee("10001")).await.unwrap();
        let mut inactive = sample_employee("10002");
        inactive.is_active = false;
        create(&pool, &inactive).await.unwrap();

        let active = find_active(&pool).await.unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].employee_id, "10001");
    }

    #[actix_web::test]
    async fn update_keeps_avatar_when_none_given() {
        let pool = test_pool().await;
        let mut data = sample_employee("10001");
        data.avatar = Some("data:image/png;base64,AAAA".to_string());
        let created = create(&pool, &data).await.unwrap();

        let updated = update(
            &pool,
            created.id,
            &UpdateEmployee {
                name: "Renamed".to_string(),
                employee_id: "10001".to_string(),
                position: "Lead".to_string(),
                is_active: true,
                avatar: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.avatar.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[actix_web::test]
    async fn update_rejects_code_held_by_another_employee() {
        let pool = test_pool().await;
        create(&pool, &sample_employee("10001")).await.unwrap();
        let second = create(&pool, &sample_employee("10002")).await.unwrap();

        let err = update(
            &pool,
            second.id,
            &UpdateEmployee {
                name: second.name.clone(),
                employee_id: "10001".to_string(),
                position: second.position.clone(),
                is_active: true,
                avatar: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, RepoError::Duplicate));
    }

    #[actix_web::test]
    async fn update_of_missing_employee_is_not_found() {
        let pool = test_pool().await;

        let err = update(
            &pool,
            42,
            &UpdateEmployee {
                name: "Nobody".to_string(),
                employee_id: "99999".to_string(),
                position: "None".to_string(),
                is_active: true,
                avatar: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }
}
