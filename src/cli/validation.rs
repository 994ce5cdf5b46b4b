//! Value parsers for CLI arguments.
//!
//! These run inside clap's parsing phase so invalid values are rejected
//! with a usage error before any configuration is loaded.

use std::path::PathBuf;

/// Validates that a configuration file path exists and is a readable file.
pub fn validate_config_file_path(path: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        return Err(format!("Configuration file does not exist: {}", path));
    }
    if !path_buf.is_file() {
        return Err(format!("Configuration path is not a file: {}", path));
    }
    if path_buf.extension().and_then(|e| e.to_str()) != Some("toml") {
        return Err(format!(
            "Configuration file must have a .toml extension: {}",
            path
        ));
    }

    Ok(path_buf)
}

/// Validates a host address: an IPv4 address, a hostname, or "localhost".
pub fn validate_host_address(host: &str) -> Result<String, String> {
    let trimmed = host.trim();

    if trimmed.is_empty() {
        return Err("Host address must not be empty".to_string());
    }

    if trimmed == "localhost" || trimmed.parse::<std::net::IpAddr>().is_ok() {
        return Ok(trimmed.to_string());
    }

    // Hostname check: alphanumeric labels separated by dots or hyphens
    let valid_hostname = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !trimmed.starts_with('-')
        && !trimmed.ends_with('-');

    if valid_hostname {
        Ok(trimmed.to_string())
    } else {
        Err(format!(
            "Invalid host address '{}'. Use an IP address, hostname, or 'localhost'",
            host
        ))
    }
}

/// Validates a port number in the range 1..=65535.
pub fn validate_port(port: &str) -> Result<u16, String> {
    match port.parse::<u16>() {
        Ok(0) => Err("Port must be between 1 and 65535".to_string()),
        Ok(p) => Ok(p),
        Err(_) => Err(format!(
            "Invalid port '{}'. Port must be a number between 1 and 65535",
            port
        )),
    }
}

/// Validates rollback step count in the range 1..=100.
pub fn validate_rollback_steps(steps: &str) -> Result<u32, String> {
    match steps.parse::<u32>() {
        Ok(0) => Err("Rollback steps must be at least 1".to_string()),
        Ok(s) if s > 100 => Err("Rollback steps must not exceed 100".to_string()),
        Ok(s) => Ok(s),
        Err(_) => Err(format!(
            "Invalid step count '{}'. Must be a number between 1 and 100",
            steps
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port() {
        assert_eq!(validate_port("8080"), Ok(8080));
        assert!(validate_port("0").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("abc").is_err());
    }

    #[test]
    fn test_validate_host_address() {
        assert_eq!(
            validate_host_address("localhost"),
            Ok("localhost".to_string())
        );
        assert_eq!(validate_host_address("0.0.0.0"), Ok("0.0.0.0".to_string()));
        assert_eq!(validate_host_address("::1"), Ok("::1".to_string()));
        assert_eq!(
            validate_host_address("db.internal"),
            Ok("db.internal".to_string())
        );
        assert!(validate_host_address("").is_err());
        assert!(validate_host_address("-bad-").is_err());
    }

    #[test]
    fn test_validate_rollback_steps() {
        assert_eq!(validate_rollback_steps("3"), Ok(3));
        assert!(validate_rollback_steps("0").is_err());
        assert!(validate_rollback_steps("101").is_err());
        assert!(validate_rollback_steps("many").is_err());
    }

    #[test]
    fn test_validate_config_file_path() {
        assert!(validate_config_file_path("does-not-exist.toml").is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();
        assert!(validate_config_file_path(path.to_str().unwrap()).is_ok());

        let not_toml = dir.path().join("config.yaml");
        std::fs::write(&not_toml, "").unwrap();
        assert!(validate_config_file_path(not_toml.to_str().unwrap()).is_err());
    }
}
