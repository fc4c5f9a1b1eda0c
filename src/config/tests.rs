//! Configuration Tests
//!
//! Validates port parsing and the error reporting for missing variables.
//! Parsing is tested through the pure helper so no test mutates the
//! process environment.

#[cfg(test)]
mod tests {
    use crate::config::{parse_port, port_from_env};

    #[test]
    fn test_parse_port_accepts_valid_port() {
        assert_eq!(parse_port("KVSTORE_PORT", "5000").unwrap(), 5000);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let err = parse_port("KVSTORE_PORT", "not-a-port").unwrap_err();
        assert!(err.to_string().contains("not a valid port"));
    }

    #[test]
    fn test_parse_port_rejects_out_of_range() {
        assert!(parse_port("KVSTORE_PORT", "70000").is_err());
    }

    #[test]
    fn test_port_from_env_reports_missing_variable() {
        let err = port_from_env("KVSTORE_MISSING_PORT").unwrap_err();
        assert!(err.to_string().contains("KVSTORE_MISSING_PORT"));
    }
}
