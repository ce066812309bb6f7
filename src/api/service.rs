use crate::core::error::RpcError;
use crate::models::transfer::Transfer;

/// Capabilities the sweeper needs from the remote transfer manager
#[allow(async_fn_in_trait)]
pub trait TransferService {
    /// Fetch a fresh snapshot of every transfer the service knows about
    async fn list_transfers(&mut self) -> Result<Vec<Transfer>, RpcError>;

    /// Stop (pause) a single transfer. Stopping an already stopped transfer is a no-op.
    async fn stop(&mut self, id: i64) -> Result<(), RpcError>;
}
