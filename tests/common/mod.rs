#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use deadline_tracker::clock::FixedClock;
use deadline_tracker::db::{self, SqliteDeadlineStore};
use deadline_tracker::state::AppState;
use sqlx::SqlitePool;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub async fn test_pool() -> SqlitePool {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to create database");
    db::migrate(&pool).await.expect("Failed to run migrations");
    pool
}

pub async fn test_state() -> (AppState, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState {
        store: Arc::new(SqliteDeadlineStore::new(pool.clone())),
        clock: Arc::new(FixedClock(today())),
    };
    (state, pool)
}
