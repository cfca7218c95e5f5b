//! Port allocation for the dev server.
//!
//! The requested port is probed on the loopback interface; when it is taken
//! the next few ports are tried, and finally the OS picks one.

use std::net::{Ipv4Addr, TcpListener};

use crate::error::ResolveError;

/// How many ports after the requested one are tried before falling back to an
/// OS-assigned port.
pub const PORT_SEARCH_SPAN: u16 = 10;

/// Ports below this need elevated privileges on most systems.
const FIRST_UNPRIVILEGED_PORT: u16 = 1024;

/// Return a port that is free right now, preferring `preferred`.
///
/// A `preferred` of 0 asks the OS for an ephemeral port directly.
///
/// # Errors
///
/// Returns [`ResolveError::NoAvailablePort`] when not even an ephemeral port
/// can be bound.
pub fn allocate_port(preferred: u16) -> Result<u16, ResolveError> {
    if preferred != 0 && preferred < FIRST_UNPRIVILEGED_PORT {
        tracing::warn!(
            port = preferred,
            "ports below {FIRST_UNPRIVILEGED_PORT} usually need elevated privileges"
        );
    }

    if preferred != 0 {
        let candidates = (0..=PORT_SEARCH_SPAN).filter_map(|offset| preferred.checked_add(offset));
        for port in candidates {
            if is_port_free(port) {
                if port != preferred {
                    tracing::info!(requested = preferred, port, "requested port is in use");
                }
                return Ok(port);
            }
            tracing::debug!(port, "port in use");
        }
    }

    ephemeral_port().ok_or(ResolveError::NoAvailablePort {
        requested: preferred,
    })
}

/// Whether `port` can currently be bound on the loopback interface.
pub fn is_port_free(port: u16) -> bool {
    TcpListener::bind((Ipv4Addr::LOCALHOST, port)).is_ok()
}

fn ephemeral_port() -> Option<u16> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).ok()?;
    let port = listener.local_addr().ok()?.port();
    tracing::debug!(port, "using OS-assigned port");
    Some(port)
}
