#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseBackend as DbBackend, DbErr, QueryResult, Statement};
use storefront_schema::{
    config,
    db::{self, DbConfig, DbPool},
    schema::{self, TableDefinition},
};
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// One column as reported by `PRAGMA table_info`.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub ty: String,
    pub not_null: bool,
    pub default: Option<String>,
}

/// A file-backed SQLite database that lives as long as the value.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("shop.db").display());

        let cfg = DbConfig {
            url,
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
            sqlx_logging: false,
        };
        let pool = db::establish_connection_with_config(&cfg)
            .await
            .expect("failed to open test database");

        Self { pool, _dir: dir }
    }

    pub async fn exec(&self, sql: &str) -> Result<(), DbErr> {
        self.pool
            .execute(Statement::from_string(DbBackend::Sqlite, sql.to_string()))
            .await
            .map(|_| ())
    }

    pub async fn count(&self, table: &str) -> i64 {
        self.scalar_i64(&format!("SELECT COUNT(*) FROM {table}")).await
    }

    /// First column of the first row, as an integer
    pub async fn scalar_i64(&self, sql: &str) -> i64 {
        let row = self.first_row(sql).await;
        row.try_get_by_index::<i64>(0).expect(sql)
    }

    pub async fn scalar_string(&self, sql: &str) -> String {
        let row = self.first_row(sql).await;
        row.try_get_by_index::<String>(0).expect(sql)
    }

    async fn first_row(&self, sql: &str) -> QueryResult {
        self.pool
            .query_one(Statement::from_string(DbBackend::Sqlite, sql.to_string()))
            .await
            .expect(sql)
            .unwrap_or_else(|| panic!("no row for {sql}"))
    }

    pub async fn table_names(&self) -> Vec<String> {
        schema::status(&self.pool)
            .await
            .expect("status query failed")
            .into_iter()
            .filter(|s| s.present)
            .map(|s| s.table)
            .collect()
    }

    pub async fn has_table(&self, table: &str) -> bool {
        self.table_names().await.iter().any(|t| t == table)
    }

    pub async fn columns(&self, table: &str) -> Vec<ColumnInfo> {
        let rows = self
            .pool
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                format!("PRAGMA table_info({table})"),
            ))
            .await
            .expect("table_info failed");

        rows.iter()
            .map(|row| ColumnInfo {
                name: row.try_get("", "name").expect("name"),
                ty: row.try_get("", "type").expect("type"),
                not_null: row.try_get::<i32>("", "notnull").expect("notnull") == 1,
                default: row.try_get("", "dflt_value").expect("dflt_value"),
            })
            .collect()
    }

    pub async fn column(&self, table: &str, name: &str) -> ColumnInfo {
        self.columns(table)
            .await
            .into_iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("{table}.{name} missing"))
    }

    /// Makes `CREATE TABLE <name>` fail on SQLite even with `IF NOT EXISTS`
    /// by taking the name with an index.
    pub async fn block_table_name(&self, name: &str) {
        self.exec("CREATE TABLE IF NOT EXISTS placeholder (id INTEGER)")
            .await
            .expect("placeholder table");
        self.exec(&format!("CREATE INDEX {name} ON placeholder (id)"))
            .await
            .expect("blocking index");
    }
}

pub fn catalog_table(name: &str) -> TableDefinition {
    schema::catalog()
        .into_iter()
        .find(|t| t.name() == name)
        .unwrap_or_else(|| panic!("no catalog table named {name}"))
}

pub const ALL_TABLES: [&str; 10] = [
    "users",
    "vendors",
    "categories",
    "products",
    "product_variations",
    "product_images",
    "coupons",
    "orders",
    "order_items",
    "banners",
];

/// Inserts one user, vendor, category, product and variation.
pub async fn seed_catalog(db: &TestDb) {
    for sql in [
        "INSERT INTO users (id, username, email, password) VALUES (1, 'ana', 'ana@example.com', 'x')",
        "INSERT INTO vendors (id, user_id, shop_name) VALUES (1, 1, 'Ana Lamps')",
        "INSERT INTO categories (id, name, slug) VALUES (1, 'Lighting', 'lighting')",
        "INSERT INTO products (id, vendor_id, category_id, name, slug, price) VALUES (1, 1, 1, 'Desk lamp', 'desk-lamp', 24.50)",
        "INSERT INTO product_variations (id, product_id, name, price) VALUES (1, 1, 'Brass', 29.00)",
    ] {
        db.exec(sql).await.expect(sql);
    }
}

/// Log lines captured from a `tracing` subscriber installed on this thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Installs a plain-text subscriber with the binary's default filter at
    /// `level` for as long as the guard lives.
    pub fn install(level: &str) -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(config::default_log_filter(level)))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
