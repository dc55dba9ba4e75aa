use std::env;

/// Which data-access strategy backs the /api routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBackend {
    Sql,
    Graphql,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub backend: DataBackend,
    pub graphql_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let backend = match env::var("APP_BACKEND").as_deref() {
            Ok("graphql") => DataBackend::Graphql,
            Err(_) | Ok("sql") => DataBackend::Sql,
            Ok(other) => {
                anyhow::bail!("unknown APP_BACKEND {other:?}, expected \"sql\" or \"graphql\"")
            }
        };
        let graphql_url = env::var("GRAPHQL_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/graphql/".to_string());
        Ok(Self {
            database_url,
            host,
            port,
            backend,
            graphql_url,
        })
    }
}
