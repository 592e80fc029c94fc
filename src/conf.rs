use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    Supabase,
}

/// Read from `JOBTRACK_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub max_workers: usize,
    pub store: StoreBackend,
    pub database_path: String,
    pub schema_path: String,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("JOBTRACK").try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("bind_addr", "127.0.0.1:3000")?
            .set_default("max_workers", 8)?
            .set_default("store", "sqlite")?
            .set_default("database_path", "jobtrack.sqlite3")?
            .set_default("schema_path", "sql/schema.sql")?
            .add_source(env)
            .build()?;

        let s: Settings = conf.try_deserialize()?;
        s.check()?;
        Ok(s)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.store == StoreBackend::Supabase {
            let missing = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
            if missing(&self.supabase_url) || missing(&self.supabase_key) {
                return Err(ConfigError::Message(
                    "JOBTRACK_SUPABASE_URL and JOBTRACK_SUPABASE_KEY are required when JOBTRACK_STORE=supabase".into(),
                ));
            }
        }
        Ok(())
    }
}
