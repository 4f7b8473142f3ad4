use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: Option<String>,
    pub app_name: String,
    pub keycloak_ui_id: String,
    pub keycloak_url: String,
    pub keycloak_realm: String,
    pub deployment: String,
    pub admin_role: String,
    pub tests_running: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load from .env file if available
        let db_url = env::var("DB_URL").ok().or_else(|| {
            Some(format!(
                "{}://{}:{}@{}:{}/{}",
                env::var("DB_PREFIX").unwrap_or_else(|_| "postgresql".to_string()),
                env::var("DB_USER").expect("DB_USER must be set"),
                env::var("DB_PASSWORD").expect("DB_PASSWORD must be set"),
                env::var("DB_HOST").expect("DB_HOST must be set"),
                env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                env::var("DB_NAME").expect("DB_NAME must be set"),
            ))
        });

        Config {
            app_name: env::var("APP_NAME").expect("APP_NAME must be set"),
            keycloak_ui_id: env::var("KEYCLOAK_UI_ID").expect("KEYCLOAK_UI_ID must be set"),
            keycloak_url: env::var("KEYCLOAK_URL").expect("KEYCLOAK_URL must be set"),
            keycloak_realm: env::var("KEYCLOAK_REALM").expect("KEYCLOAK_REALM must be set"),
            deployment: env::var("DEPLOYMENT")
                .expect("DEPLOYMENT must be set, this can be local, dev, stage, or prod"),
            admin_role: "wellops-admin".to_string(), // Admin role name in Keycloak
            tests_running: false,
            db_url,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            app_name: "wellops-api-test".to_string(),
            keycloak_ui_id: "test-ui".to_string(),
            keycloak_url: "http://localhost:8080".to_string(),
            keycloak_realm: "test-realm".to_string(),
            deployment: "test".to_string(),
            admin_role: "wellops-admin".to_string(),
            tests_running: true,
            db_url: None,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::routes::build_router;
    use axum::Router;
    use sea_orm::{Database, DatabaseConnection};
    use std::sync::{Arc, Mutex, Once};
    use tokio::sync::OnceCell;

    static INIT: Once = Once::new();
    static DB_SETUP: OnceCell<Arc<Mutex<bool>>> = OnceCell::const_new();

    pub fn init_test_env() {
        INIT.call_once(|| {
            // Initialize test configuration
            Config::for_tests();
        });
    }

    pub async fn setup_test_db() -> DatabaseConnection {
        init_test_env();

        let database_url = format!(
            "{}://{}:{}@{}:{}/{}",
            env::var("DB_PREFIX").unwrap_or_else(|_| "postgresql".to_string()),
            env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            env::var("DB_PASSWORD").unwrap_or_else(|_| "psql".to_string()),
            env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
            env::var("DB_NAME").unwrap_or_else(|_| "wellops_test".to_string())
        );

        let db = Database::connect(database_url)
            .await
            .expect("Failed to connect to test database");

        // Ensure migrations run only once across all tests
        let setup_flag = DB_SETUP
            .get_or_try_init(|| async {
                Ok::<Arc<Mutex<bool>>, std::convert::Infallible>(Arc::new(Mutex::new(false)))
            })
            .await
            .unwrap()
            .clone();
        let should_run_migrations = {
            let mut setup_done = setup_flag.lock().unwrap();
            if *setup_done {
                false
            } else {
                *setup_done = true;
                true
            }
        };

        if should_run_migrations {
            // Run migrations to ensure all tables exist
            use migration::{Migrator, MigratorTrait};
            Migrator::up(&db, None)
                .await
                .expect("Failed to run database migrations");
        }

        db
    }

    pub async fn setup_test_app() -> Router {
        let db = setup_test_db().await;
        let mut config = Config::for_tests();
        // Disable Keycloak for tests by setting the URL to empty
        config.keycloak_url = String::new();
        build_router(&db, &config)
    }

    // Helper function to clean up test data after each test
    pub async fn cleanup_test_data(db: &DatabaseConnection) {
        use sea_orm::EntityTrait;

        // Clean up all test data in reverse dependency order
        let _ = crate::reports::models::Entity::delete_many()
            .exec(db)
            .await;
        let _ = crate::wells::production::models::Entity::delete_many()
            .exec(db)
            .await;
        let _ = crate::wells::progress::models::Entity::delete_many()
            .exec(db)
            .await;
        let _ = crate::wells::plans::models::Entity::delete_many()
            .exec(db)
            .await;
        let _ = crate::wells::models::Entity::delete_many().exec(db).await;
        let _ = crate::fields::models::Entity::delete_many().exec(db).await;
        let _ = crate::contracts::activities::models::Entity::delete_many()
            .exec(db)
            .await;
        let _ = crate::contracts::models::Entity::delete_many()
            .exec(db)
            .await;
        let _ = crate::clients::models::Entity::delete_many().exec(db).await;
        let _ = crate::users::models::Entity::delete_many().exec(db).await;
    }
}
