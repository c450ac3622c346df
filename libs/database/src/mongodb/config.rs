#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or};

/// Database used when none is configured
pub const DEFAULT_DATABASE: &str = "toyParadise";

/// Atlas cluster host used when credentials are given without `DB_HOST`
pub const DEFAULT_CLUSTER_HOST: &str = "cluster0.gacal02.mongodb.net";

/// MongoDB connection settings.
///
/// Built by hand or loaded from environment variables (with the `config` feature).
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "toyParadise")
///     .with_app_name("toy-paradise-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL
    /// Format: mongodb[+srv]://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,

    /// Pin the Stable API v1 (strict, deprecation errors on)
    pub stable_api: bool,
}

impl MongoConfig {
    /// Config for `url` using the default database
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, DEFAULT_DATABASE)
    }

    /// Config for `url` using a specific database
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
            stable_api: false,
        }
    }

    /// Assemble an Atlas SRV URL from credentials and a cluster host.
    ///
    /// Username and password are percent-encoded so that reserved characters
    /// survive URI parsing.
    pub fn atlas_url(user: &str, password: &str, host: &str) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            urlencoding::encode(user),
            urlencoding::encode(password),
            host
        )
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Enable the Stable API v1
    pub fn with_stable_api(mut self) -> Self {
        self.stable_api = true;
        self
    }

    /// Get a reference to the MongoDB URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The URL with any password replaced by `***`, for logging
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.split_once('@') {
            Some((userinfo, host)) => {
                let user = userinfo.split(':').next().unwrap_or_default();
                format!("{scheme}://{user}:***@{host}")
            }
            None => self.url.clone(),
        }
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// Connection string, first match wins:
/// - `MONGODB_URL` or `MONGO_URL`
/// - `DB_USER` + `DB_PASSWORD` (+ optional `DB_HOST`), assembled into an Atlas SRV URL
///
/// Everything else is optional:
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: `toyParadise`)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default: 100), `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
/// - `MONGODB_STABLE_API` (default: false)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = match std::env::var("MONGODB_URL").or_else(|_| std::env::var("MONGO_URL")) {
            Ok(url) => url,
            Err(_) => {
                let (Ok(user), Ok(password)) =
                    (std::env::var("DB_USER"), std::env::var("DB_PASSWORD"))
                else {
                    return Err(ConfigError::MissingEnvVar(
                        "MONGODB_URL (or DB_USER and DB_PASSWORD)".to_string(),
                    ));
                };
                let host = std::env::var("DB_HOST")
                    .unwrap_or_else(|_| DEFAULT_CLUSTER_HOST.to_string());
                Self::atlas_url(&user, &password, &host)
            }
        };

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", 100)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", 5)?,
            connect_timeout_secs: env_parse_or("MONGODB_CONNECT_TIMEOUT_SECS", 10)?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                30,
            )?,
            stable_api: env_parse_or("MONGODB_STABLE_API", false)?,
        })
    }
}
