use kanbee_db::DbPool;

/// Fresh in-memory database with all migrations applied.
///
/// The pool is capped at one connection: every connection to `sqlite::memory:`
/// opens a separate, empty database.
pub async fn test_pool() -> DbPool {
    let pool = kanbee_db::create_pool("sqlite::memory:", 1).await.unwrap();
    kanbee_db::run_migrations(&pool).await.unwrap();
    pool
}
