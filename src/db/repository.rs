use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Deadline, NewDeadline};

pub async fn fetch_deadlines(db: &SqlitePool) -> Result<Vec<Deadline>, sqlx::Error> {
    sqlx::query_as::<_, Deadline>(
        r#"
        SELECT id, course, title, "type", due_date, created_at, updated_at
        FROM deadlines
        ORDER BY due_date ASC, created_at ASC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn insert_deadline(db: &SqlitePool, fields: NewDeadline) -> Result<Deadline, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO deadlines
            (id, course, title, "type", due_date, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(&id)
    .bind(&fields.course)
    .bind(&fields.title)
    .bind(fields.kind.as_str())
    .bind(fields.due_date)
    .bind(&now)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Deadline {
        id,
        course: fields.course,
        title: fields.title,
        kind: fields.kind,
        due_date: fields.due_date,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Replaces every client-owned field. Returns `None` when no row has `id`.
pub async fn update_deadline(
    db: &SqlitePool,
    id: &str,
    fields: NewDeadline,
) -> Result<Option<Deadline>, sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    sqlx::query_as::<_, Deadline>(
        r#"
        UPDATE deadlines
        SET course = ?1,
            title = ?2,
            "type" = ?3,
            due_date = ?4,
            updated_at = ?5
        WHERE id = ?6
        RETURNING id, course, title, "type", due_date, created_at, updated_at
        "#,
    )
    .bind(&fields.course)
    .bind(&fields.title)
    .bind(fields.kind.as_str())
    .bind(fields.due_date)
    .bind(&now)
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn delete_deadline(db: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM deadlines WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
