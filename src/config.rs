// src/config.rs
//
// Database connection parameters, each overridable from the environment and
// falling back to fixed local defaults. The schema name doubles as the
// session search_path (set when connections are opened, see database.rs).

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub schema: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "admin".to_string(),
            user: "admin".to_string(),
            password: "admin".to_string(),
            schema: "admin".to_string(),
        }
    }
}

impl DbConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("DB_HOST", defaults.host),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database: env_or("DB_NAME", defaults.database),
            user: env_or("DB_USER", defaults.user),
            password: env_or("DB_PASSWORD", defaults.password),
            schema: env_or("DB_SCHEMA", defaults.schema),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_postgres() {
        let cfg = DbConfig::default();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.database, "admin");
        assert_eq!(cfg.user, "admin");
        assert_eq!(cfg.password, "admin");
        assert_eq!(cfg.schema, "admin");
    }
}
