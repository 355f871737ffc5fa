use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Table creation statements for the six business tables.
///
/// `order_details.total` is a stored generated column: callers can never set
/// it, the store always recomputes it from quantity and unit price.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role INTEGER NOT NULL,
        phone_number TEXT,
        email TEXT,
        address TEXT,
        created_date TEXT,
        status INTEGER
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS product_categories (
        category_id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_name TEXT NOT NULL,
        description TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        product_id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_id INTEGER REFERENCES product_categories (category_id),
        product_name TEXT NOT NULL,
        unit TEXT NOT NULL,
        selling_price REAL NOT NULL,
        description TEXT,
        quantity INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS imported_stock (
        import_id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL REFERENCES products (product_id),
        stock_before_update INTEGER NOT NULL,
        updated_stock_quantity INTEGER NOT NULL,
        stock_after_update INTEGER NOT NULL,
        notes TEXT,
        updated_by INTEGER NOT NULL REFERENCES accounts (account_id),
        updated_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        order_id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER REFERENCES accounts (account_id),
        staff_id INTEGER REFERENCES accounts (account_id),
        order_date TEXT NOT NULL,
        total_amount REAL NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_details (
        detail_id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL REFERENCES orders (order_id),
        product_id INTEGER REFERENCES products (product_id),
        quantity INTEGER NOT NULL,
        unit_price REAL NOT NULL,
        total REAL GENERATED ALWAYS AS (quantity * unit_price) STORED
    );
    "#,
    "CREATE INDEX IF NOT EXISTS ix_accounts_username ON accounts (username);",
    "CREATE INDEX IF NOT EXISTS ix_products_category_id ON products (category_id);",
    "CREATE INDEX IF NOT EXISTS ix_orders_order_date ON orders (order_date);",
    "CREATE INDEX IF NOT EXISTS ix_order_details_order_id ON order_details (order_id);",
    "CREATE INDEX IF NOT EXISTS ix_imported_stock_product_id ON imported_stock (product_id);",
];

/// Create the business tables if they do not exist yet. Idempotent.
pub async fn create_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    for ddl in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/farm_products.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Foreign keys are opt-in per connection in SQLite
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "PRAGMA foreign_keys = ON;".to_string(),
    ))
    .await?;

    create_schema(&conn).await?;
    tracing::info!("Database schema ready at {}", absolute_path.display());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
