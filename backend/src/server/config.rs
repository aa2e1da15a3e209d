//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEE_MANAGEMENT_*` environment variables,
//! and configuration files, in OrthoConfig's usual precedence. Every field
//! is optional; accessors supply the defaults.
//!
//! Switches are value-taking (`--expose-docs true`); omitting one leaves the
//! environment and file layers in charge.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_NAME: &str = "EmployeeManagement";
const DEFAULT_EMPLOYEES_COLLECTION: &str = "Employees";
const DEFAULT_DEPARTMENTS_COLLECTION: &str = "Departments";

/// A boolean setting parsed from an explicit `true`/`false` value.
///
/// Fields spelled `bool` become presence flags under OrthoConfig.
pub type Switch = bool;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerSettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host {host:?}: {message}")]
    InvalidHost { host: String, message: String },
}

/// Settings controlling the HTTP listener and the document store layout.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE_MANAGEMENT")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// MongoDB connection string. Without one, records live in memory.
    pub connection_string: Option<String>,
    /// Name of the document database.
    pub database_name: Option<String>,
    /// Collection holding employee documents.
    pub employees_collection: Option<String>,
    /// Collection holding department documents.
    pub departments_collection: Option<String>,
    /// Serve Swagger UI at `/docs`. Defaults to on in debug builds only.
    pub expose_docs: Option<Switch>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ServerSettingsError::InvalidHost`] when the host is not a
    /// literal IPv4 or IPv6 address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerSettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err: std::net::AddrParseError| {
            ServerSettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Return the MongoDB connection string, if one is configured.
    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }

    /// Return the database name.
    pub fn database_name(&self) -> &str {
        self.database_name
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_NAME)
    }

    /// Return the employees collection name.
    pub fn employees_collection(&self) -> &str {
        self.employees_collection
            .as_deref()
            .unwrap_or(DEFAULT_EMPLOYEES_COLLECTION)
    }

    /// Return the departments collection name.
    pub fn departments_collection(&self) -> &str {
        self.departments_collection
            .as_deref()
            .unwrap_or(DEFAULT_DEPARTMENTS_COLLECTION)
    }

    /// Whether Swagger UI should be mounted.
    pub fn expose_docs(&self) -> bool {
        self.expose_docs.unwrap_or(cfg!(debug_assertions))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "EMPLOYEE_MANAGEMENT_HOST",
        "EMPLOYEE_MANAGEMENT_PORT",
        "EMPLOYEE_MANAGEMENT_CONNECTION_STRING",
        "EMPLOYEE_MANAGEMENT_DATABASE_NAME",
        "EMPLOYEE_MANAGEMENT_EMPLOYEES_COLLECTION",
        "EMPLOYEE_MANAGEMENT_DEPARTMENTS_COLLECTION",
        "EMPLOYEE_MANAGEMENT_EXPOSE_DOCS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("employee-management")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default host parses"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.connection_string(), None);
        assert_eq!(settings.database_name(), "EmployeeManagement");
        assert_eq!(settings.employees_collection(), "Employees");
        assert_eq!(settings.departments_collection(), "Departments");
        assert_eq!(settings.expose_docs(), cfg!(debug_assertions));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EMPLOYEE_MANAGEMENT_HOST", Some("127.0.0.1".to_owned())),
            ("EMPLOYEE_MANAGEMENT_PORT", Some("9090".to_owned())),
            (
                "EMPLOYEE_MANAGEMENT_CONNECTION_STRING",
                Some("mongodb://db.internal:27017".to_owned()),
            ),
            ("EMPLOYEE_MANAGEMENT_DATABASE_NAME", Some("Staff".to_owned())),
            (
                "EMPLOYEE_MANAGEMENT_EMPLOYEES_COLLECTION",
                Some("People".to_owned()),
            ),
            (
                "EMPLOYEE_MANAGEMENT_DEPARTMENTS_COLLECTION",
                Some("Teams".to_owned()),
            ),
            ("EMPLOYEE_MANAGEMENT_EXPOSE_DOCS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("host parses"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        assert_eq!(
            settings.connection_string(),
            Some("mongodb://db.internal:27017")
        );
        assert_eq!(settings.database_name(), "Staff");
        assert_eq!(settings.employees_collection(), "People");
        assert_eq!(settings.departments_collection(), "Teams");
        assert!(settings.expose_docs());
    }

    #[rstest]
    #[case("true", "false", false)]
    #[case("false", "true", true)]
    fn command_line_values_beat_the_environment(
        #[case] cli_docs: &str,
        #[case] env_docs: &str,
        #[case] env_expected: bool,
    ) {
        let _guard = lock_env([
            ("EMPLOYEE_MANAGEMENT_HOST", None),
            ("EMPLOYEE_MANAGEMENT_PORT", Some("9090".to_owned())),
            ("EMPLOYEE_MANAGEMENT_EXPOSE_DOCS", Some(env_docs.to_owned())),
        ]);

        let env_only = load_from_empty_args();
        assert_eq!(env_only.expose_docs(), env_expected);

        let settings = ServerSettings::load_from_iter(
            ["employee-management", "--expose-docs", cli_docs, "--port", "9191"]
                .map(OsString::from),
        )
        .expect("config should load");
        assert_eq!(settings.expose_docs(), cli_docs == "true");
        assert_eq!(
            settings.bind_addr().expect("default host parses").port(),
            9191
        );
    }

    #[rstest]
    fn omitted_switch_leaves_the_environment_in_charge() {
        let _guard = lock_env([
            ("EMPLOYEE_MANAGEMENT_HOST", None),
            ("EMPLOYEE_MANAGEMENT_PORT", None),
            ("EMPLOYEE_MANAGEMENT_EXPOSE_DOCS", Some("true".to_owned())),
        ]);

        let settings = ServerSettings::load_from_iter(
            ["employee-management", "--port", "7070"].map(OsString::from),
        )
        .expect("config should load");
        assert!(settings.expose_docs());
        assert_eq!(
            settings.bind_addr().expect("default host parses").port(),
            7070
        );
    }

    #[rstest]
    #[case(Some("  "), None)]
    #[case(Some(" mongodb://localhost "), Some("mongodb://localhost"))]
    #[case(None, None)]
    fn blank_connection_strings_are_ignored(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let settings = ServerSettings {
            host: None,
            port: None,
            connection_string: raw.map(str::to_owned),
            database_name: None,
            employees_collection: None,
            departments_collection: None,
            expose_docs: None,
        };
        assert_eq!(settings.connection_string(), expected);
    }

    #[rstest]
    fn hostname_is_rejected_as_bind_host() {
        let settings = ServerSettings {
            host: Some("localhost".to_owned()),
            port: None,
            connection_string: None,
            database_name: None,
            employees_collection: None,
            departments_collection: None,
            expose_docs: None,
        };

        let err = settings.bind_addr().expect_err("hostnames are not resolved");
        assert!(matches!(err, ServerSettingsError::InvalidHost { .. }));
    }
}
