//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRAVEL_*` environment variables, and
//! optional configuration files, in increasing order of precedence for the
//! CLI.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/travel";
const DEFAULT_STATIC_DIR: &str = "public";

/// Runtime settings for the travel backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAVEL")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Directory of static assets served under `/`.
    pub static_dir: Option<PathBuf>,
    /// Apply embedded migrations on startup.
    #[ortho_config(default = true)]
    pub apply_schema: bool,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
    }

    pub fn apply_schema(&self) -> bool {
        self.apply_schema
    }

    /// Resolve the listening socket address.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the host and port do not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("no address for {}:{}", self.host(), self.port()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "TRAVEL_HOST",
        "TRAVEL_PORT",
        "TRAVEL_DATABASE_URL",
        "TRAVEL_STATIC_DIR",
        "TRAVEL_APPLY_SCHEMA",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("travel-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(settings.static_dir(), PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(settings.apply_schema());
        assert_eq!(
            settings.bind_addr().expect("default address resolves"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRAVEL_HOST", Some("127.0.0.1".to_owned())),
            ("TRAVEL_PORT", Some("8088".to_owned())),
            (
                "TRAVEL_DATABASE_URL",
                Some("postgres://db.internal:5432/trips".to_owned()),
            ),
            ("TRAVEL_STATIC_DIR", Some("/srv/travel".to_owned())),
            ("TRAVEL_APPLY_SCHEMA", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8088);
        assert_eq!(settings.database_url(), "postgres://db.internal:5432/trips");
        assert_eq!(settings.static_dir(), PathBuf::from("/srv/travel"));
        assert!(settings.apply_schema());
        assert_eq!(
            settings.bind_addr().expect("address resolves"),
            SocketAddr::from(([127, 0, 0, 1], 8088))
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some("true"))]
    fn schema_bootstrap_is_enabled_by_default_and_from_env(#[case] value: Option<&str>) {
        let _guard = lock_env([("TRAVEL_APPLY_SCHEMA", value.map(str::to_owned))]);

        let settings = load_from_empty_args();
        assert!(settings.apply_schema);
        assert!(settings.apply_schema());
    }
}
