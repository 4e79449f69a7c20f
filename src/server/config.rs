static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/springfield.db?mode=rwc";
static DEFAULT_CATALOG_API_URL: &str = "https://thesimpsonsapi.com/api";
static DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub catalog_api_url: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment. Every setting has a
    /// default: a local file-backed SQLite store, the public Simpsons
    /// catalog, and port 3000.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            catalog_api_url: std::env::var("CATALOG_API_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_API_URL.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}
