use ferrous_lookup_domain::ResolveError;
use std::net::{IpAddr, SocketAddr};
use tokio::net::lookup_host;
use tracing::debug;

/// Turn the root server argument into a socket address. Literal addresses
/// are taken as-is; host names go through the system resolver once, with
/// IPv4 results preferred.
pub async fn resolve_root_server(host: &str, port: u16) -> Result<SocketAddr, ResolveError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let addrs: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|e| ResolveError::HostUnresolvable(format!("{}: {}", host, e)))?
        .collect();

    let chosen = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| ResolveError::HostUnresolvable(host.to_string()))?;

    debug!(host, addr = %chosen, candidates = addrs.len(), "Root server resolved");
    Ok(chosen)
}
