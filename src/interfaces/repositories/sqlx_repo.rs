use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: SqlitePool,
}
