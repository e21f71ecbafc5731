//! Profile-related API operations

use crate::ProfileStoreClient;
use fitquest_core::{PlayerSnapshot, RemoteProfile, Result};

/// Fetch the remote profile document for an actor
pub async fn fetch_profile(client: &ProfileStoreClient, actor_id: &str) -> Result<RemoteProfile> {
    client.fetch_profile(actor_id).await
}

/// Push the remote-visible slice of a local snapshot
pub async fn push_snapshot(client: &ProfileStoreClient, snapshot: &PlayerSnapshot) -> Result<()> {
    let profile = RemoteProfile::from_snapshot(snapshot);
    client.push_profile(&snapshot.actor_id, &profile).await
}
