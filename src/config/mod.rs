use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub roster: RosterFiles,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let employees_csv = path_var("APP_EMPLOYEES_CSV");
        let leaves_csv = path_var("APP_LEAVES_CSV");
        if leaves_csv.is_some() && employees_csv.is_none() {
            return Err(ConfigError::LeavesWithoutEmployees);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            roster: RosterFiles {
                employees_csv,
                leaves_csv,
            },
        })
    }
}

/// Blank values count as unset so an empty assignment in a .env file does
/// not turn into a file named "".
fn path_var(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Default CSV sources for the roster, used when a command does not name
/// its own files. Leave data cannot stand alone: the rows bind to the
/// employee directory by email.
#[derive(Debug, Clone, Default)]
pub struct RosterFiles {
    pub employees_csv: Option<PathBuf>,
    pub leaves_csv: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    LeavesWithoutEmployees,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LeavesWithoutEmployees => {
                write!(f, "a leave CSV was configured without an employee CSV")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_EMPLOYEES_CSV");
        env::remove_var("APP_LEAVES_CSV");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.roster.employees_csv.is_none());
        assert!(config.roster.leaves_csv.is_none());
    }

    #[test]
    fn recognizes_environment_aliases() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "PROD");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);

        env::set_var("APP_ENV", "ci");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        reset_env();
    }

    #[test]
    fn picks_up_roster_files_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_EMPLOYEES_CSV", "data/employees.csv");
        env::set_var("APP_LEAVES_CSV", "data/leaves.csv");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.roster.employees_csv,
            Some(PathBuf::from("data/employees.csv"))
        );
        assert_eq!(
            config.roster.leaves_csv,
            Some(PathBuf::from("data/leaves.csv"))
        );
        reset_env();
    }

    #[test]
    fn rejects_leaves_without_employees() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LEAVES_CSV", "data/leaves.csv");
        let err = AppConfig::load().expect_err("leave file alone is invalid");
        assert_eq!(
            err.to_string(),
            "a leave CSV was configured without an employee CSV"
        );
        reset_env();
    }

    #[test]
    fn blank_path_values_count_as_unset() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_EMPLOYEES_CSV", "   ");
        let config = AppConfig::load().expect("config loads");
        assert!(config.roster.employees_csv.is_none());
        reset_env();
    }
}
