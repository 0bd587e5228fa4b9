use log::trace;
use std::net::TcpListener;

use super::ServerError;
use crate::config::DebugServerConfig;

/// First free port of the configured range
pub fn pick_port(config: &DebugServerConfig) -> Result<u16, ServerError> {
    find_free_port(&config.address, config.port_start, config.port_end).ok_or_else(|| {
        ServerError::NoFreePort {
            address: config.address.clone(),
            start: config.port_start,
            end: config.port_end,
        }
    })
}

/// First port in `start..=end` that can be bound on `address`
pub fn find_free_port(address: &str, start: u16, end: u16) -> Option<u16> {
    (start..=end).find(|&port| is_port_free(address, port))
}

pub fn is_port_free(address: &str, port: u16) -> bool {
    match TcpListener::bind((address, port)) {
        Ok(_) => true,
        Err(e) => {
            trace!("{}:{} unavailable: {}", address, port, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_port_is_skipped() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(!is_port_free("127.0.0.1", port));
        assert_eq!(find_free_port("127.0.0.1", port, port), None);
    }

    #[test]
    fn test_pick_port_exhausted_range() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = DebugServerConfig {
            address: "127.0.0.1".to_string(),
            port_start: port,
            port_end: port,
            ..Default::default()
        };

        let err = pick_port(&config).unwrap_err();
        assert!(matches!(
            err,
            ServerError::NoFreePort { start, end, .. } if start == port && end == port
        ));
        assert_eq!(
            err.to_string(),
            format!("no free port in {}..={} on 127.0.0.1", port, port)
        );
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(find_free_port("127.0.0.1", 1600, 1599), None);
    }
}
