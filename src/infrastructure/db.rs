use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

const SCHEMA: &[&str] = &[
    "PRAGMA foreign_keys = ON",
    r#"
    CREATE TABLE IF NOT EXISTS roles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS artists (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        birth_date TEXT,
        biography TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        release_year INTEGER NOT NULL,
        genre TEXT NOT NULL,
        duration INTEGER NOT NULL,
        price INTEGER NOT NULL CHECK (price >= 0),
        poster TEXT,
        description TEXT NOT NULL DEFAULT '',
        trailer TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movie_crew (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
        artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
        role_id INTEGER NOT NULL REFERENCES roles(id) ON DELETE CASCADE,
        character_name TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_movie_crew_movie ON movie_crew(movie_id)",
    "CREATE INDEX IF NOT EXISTS idx_movie_crew_artist ON movie_crew(artist_id)",
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        phone_number TEXT,
        email TEXT,
        registration_date TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
        unit_price INTEGER NOT NULL,
        sale_date TEXT NOT NULL
    )
    "#,
    // One sale per (user, movie); closes the check-then-insert race
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_sales_user_movie ON sales(user_id, movie_id)",
    "CREATE INDEX IF NOT EXISTS idx_sales_user_date ON sales(user_id, sale_date)",
];

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    for sql in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await?;
    }

    tracing::debug!("Schema ready ({} statements)", SCHEMA.len());
    Ok(())
}
