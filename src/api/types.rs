use serde::{Deserialize, Serialize};

// ============================================================================
// Data Types
// ============================================================================

/// Balance of one account, as returned by `GET /balance/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub address: String,
    pub lamports: u64,
}

/// One entry of `GET /txs/{address}`, most recent first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignature {
    pub signature: String,
}
