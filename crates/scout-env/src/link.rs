//! Tunnel interface management via netlink
//!
//! The experiment binary batches packets over the tunnel device, so the
//! device MTU must leave room for the per-packet batching overhead. This
//! module resolves an interface by name and sets its MTU through rtnetlink.

use futures::TryStreamExt;
use rtnetlink::{new_connection, Handle};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Netlink request failed: {0}")]
    Netlink(rtnetlink::Error),

    #[error("Interface '{0}' not found")]
    NotFound(String),

    #[error("Failed to set MTU: {0}")]
    SetMtuFailed(rtnetlink::Error),
}

/// Set the MTU of a network interface in the current namespace.
pub async fn set_interface_mtu(interface_name: &str, mtu: u32) -> Result<(), LinkError> {
    debug!("Setting MTU {} for interface {}", mtu, interface_name);

    let (connection, handle, _) = new_connection()?;
    tokio::spawn(connection);

    let index = interface_index(&handle, interface_name).await?;

    handle
        .link()
        .set(index)
        .mtu(mtu)
        .execute()
        .await
        .map_err(LinkError::SetMtuFailed)?;

    info!("Set MTU {} for interface {}", mtu, interface_name);
    Ok(())
}

/// Resolve an interface's link index by name.
async fn interface_index(handle: &Handle, name: &str) -> Result<u32, LinkError> {
    let mut links = handle
        .link()
        .get()
        .match_name(name.to_string())
        .execute();

    if let Some(link) = links.try_next().await.map_err(LinkError::Netlink)? {
        Ok(link.header.index)
    } else {
        Err(LinkError::NotFound(name.to_string()))
    }
}
