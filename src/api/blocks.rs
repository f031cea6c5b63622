use super::utils::fetch_json;
use super::{ApiResult, Endpoint, ListParams};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Stacks block.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Set to `true` if block corresponds to the canonical chain tip
    pub canonical: bool,
    /// Height of the block
    pub height: u64,
    /// Hash representing the block
    pub hash: String,
    /// The only hash that can uniquely identify an anchored block or an unconfirmed state trie
    #[serde(default)]
    pub index_block_hash: Option<String>,
    /// Hash of the parent block
    pub parent_block_hash: String,
    /// Index block hash of the parent block
    #[serde(default)]
    pub parent_index_block_hash: Option<String>,
    /// Unix timestamp (in seconds) indicating when this block was mined
    pub burn_block_time: u64,
    /// An ISO 8601 (YYYY-MM-DDTHH:mm:ss.sssZ) indicating when this block was mined
    pub burn_block_time_iso: String,
    /// Hash of the anchor chain block
    pub burn_block_hash: String,
    /// Height of the anchor chain block
    pub burn_block_height: u64,
    /// Anchor chain transaction ID
    pub miner_txid: String,
    /// The hash of the last streamed block that precedes this block to which this block is to be appended
    pub parent_microblock_hash: String,
    /// The sequence number of the last streamed block that precedes this block
    pub parent_microblock_sequence: i64,
    /// List of transactions included in the block
    pub txs: Vec<String>,
    /// List of microblocks that were accepted in this anchor block
    pub microblocks_accepted: Vec<String>,
    /// List of microblocks that were streamed/produced by this anchor block's miner
    pub microblocks_streamed: Vec<String>,
    /// Execution cost read count
    pub execution_cost_read_count: u64,
    /// Execution cost read length
    pub execution_cost_read_length: u64,
    /// Execution cost runtime
    pub execution_cost_runtime: u64,
    /// Execution cost write count
    pub execution_cost_write_count: u64,
    /// Execution cost write length
    pub execution_cost_write_length: u64,
    /// Number of transactions included in each accepted microblock
    #[serde(default)]
    pub microblock_tx_count: Option<HashMap<String, u64>>,
}

/// A page of recent blocks.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlockListResponse {
    /// The number of blocks to return
    pub limit: u32,
    /// The number to blocks to skip (starting at `0`)
    pub offset: u32,
    /// The number of blocks available
    pub total: u64,
    /// Blocks on this page
    pub results: Vec<Block>,
}

pub async fn fetch_blocks(params: &ListParams) -> ApiResult<BlockListResponse> {
    //! Get recent blocks.
    //!
    //! `limit` and `offset` are sent only when set.
    fetch_json(Endpoint::Blocks.url_with(&params.url, &[], &params.query())?).await
}

pub async fn fetch_block(url: &str, hash: &str) -> ApiResult<Block> {
    //! Get a block by its hash.
    fetch_json(Endpoint::Blocks.url_with(url, &[hash], &[])?).await
}

pub async fn fetch_block_by_height(url: &str, height: u64) -> ApiResult<Block> {
    //! Get a block by its height.
    let height = height.to_string();
    fetch_json(Endpoint::Blocks.url_with(url, &["by_height", height.as_str()], &[])?).await
}

pub async fn fetch_block_by_burn_block_hash(url: &str, burn_block_hash: &str) -> ApiResult<Block> {
    //! Get a block by the hash of its anchor chain block.
    fetch_json(Endpoint::Blocks.url_with(url, &["by_burn_block_hash", burn_block_hash], &[])?).await
}

pub async fn fetch_block_by_burn_block_height(
    url: &str,
    burn_block_height: u64,
) -> ApiResult<Block> {
    //! Get a block by the height of its anchor chain block.
    let height = burn_block_height.to_string();
    fetch_json(Endpoint::Blocks.url_with(url, &["by_burn_block_height", height.as_str()], &[])?)
        .await
}
