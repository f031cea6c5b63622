use super::utils::{fetch_json, fetch_text};
use super::{ApiResult, Endpoint};
use crate::network::Chain;
use serde::{Deserialize, Serialize};

/// Core node information.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoreNodeInfoResponse {
    /// Identifies the version number for the networking communication
    pub peer_version: u64,
    /// Latest PoX consensus hash
    pub pox_consensus: String,
    /// Latest anchor chain height seen by the node
    pub burn_block_height: u64,
    /// Stable PoX consensus hash
    pub stable_pox_consensus: String,
    /// Stable anchor chain height
    pub stable_burn_block_height: u64,
    /// Node software version
    pub server_version: String,
    /// Network identifier
    pub network_id: u32,
    /// Parent network identifier
    pub parent_network_id: u32,
    /// Height of the chain tip
    pub stacks_tip_height: u64,
    /// Hash of the chain tip
    pub stacks_tip: String,
    /// Consensus hash of the chain tip
    pub stacks_tip_consensus_hash: String,
    /// Index block hash of the unanchored tip
    #[serde(default)]
    pub unanchored_tip: Option<String>,
    /// Block height at which the node will exit
    #[serde(default)]
    pub exit_at_block_height: Option<u64>,
    /// Hash of the genesis chain state
    #[serde(default)]
    pub genesis_chainstate_hash: Option<String>,
}

/// Current chain tip as seen by the API server.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChainTip {
    /// The current block height
    pub block_height: u64,
    /// The current block hash
    pub block_hash: String,
    /// The current index block hash
    pub index_block_hash: String,
    /// The current microblock hash
    #[serde(default)]
    pub microblock_hash: Option<String>,
    /// The current microblock sequence number
    #[serde(default)]
    pub microblock_sequence: Option<u64>,
}

/// API server status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ServerStatusResponse {
    /// The server version that is currently running
    #[serde(default)]
    pub server_version: Option<String>,
    /// The current server status
    pub status: String,
    /// Height at which PoX v1 locked funds unlock
    #[serde(default)]
    pub pox_v1_unlock_height: Option<u64>,
    /// Height at which PoX v2 locked funds unlock
    #[serde(default)]
    pub pox_v2_unlock_height: Option<u64>,
    /// Current chain tip
    #[serde(default)]
    pub chain_tip: Option<ChainTip>,
}

/// Target block time of a single network.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetworkBlockTimeResponse {
    /// Target block time in seconds
    pub target_block_time: u64,
}

/// Target block times of all known networks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetworkBlockTimesResponse {
    /// Mainnet block time
    pub mainnet: NetworkBlockTimeResponse,
    /// Testnet block time
    pub testnet: NetworkBlockTimeResponse,
}

/// Total and unlocked STX supply.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StxSupplyResponse {
    /// String quoted decimal number of the percentage of STX that have unlocked
    pub unlocked_percent: String,
    /// String quoted decimal number of the total circulating number of STX (at the input block height if provided, otherwise the current block height)
    pub total_stx: String,
    /// String quoted decimal number of the STX that have been mined or unlocked
    pub unlocked_stx: String,
    /// The block height at which this information was queried
    pub block_height: u64,
}

/// Total and unlocked STX supply in the legacy 1.0 API format.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StxSupplyLegacyFormatResponse {
    /// String quoted decimal number of the percentage of STX that have unlocked
    pub unlocked_percent: String,
    /// String quoted decimal number of the total circulating number of STX
    pub total_stacks: String,
    /// Same as `total_stacks` but formatted with comma thousands separators
    pub total_stacks_formatted: String,
    /// String quoted decimal number of the STX that have been mined or unlocked
    pub unlocked_supply: String,
    /// Same as `unlocked_supply` but formatted with comma thousands separators
    pub unlocked_supply_formatted: String,
    /// The block height at which this information was queried
    pub block_height: String,
}

/// Current PoX cycle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoxCurrentCycle {
    /// Cycle number
    pub id: u64,
    /// Minimal amount to participate
    pub min_threshold_ustx: u64,
    /// Total amount stacked in this cycle
    pub stacked_ustx: u64,
    /// Is PoX active in this cycle?
    pub is_pox_active: bool,
}

/// Upcoming PoX cycle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoxNextCycle {
    /// Cycle number
    pub id: u64,
    /// Minimal amount to participate
    pub min_threshold_ustx: u64,
    /// Minimal increment of the stacked amount
    #[serde(default)]
    pub min_increment_ustx: Option<u64>,
    /// Amount stacked for this cycle so far
    pub stacked_ustx: u64,
    /// Anchor chain height where the prepare phase starts
    pub prepare_phase_start_block_height: u64,
    /// Blocks left before the prepare phase
    pub blocks_until_prepare_phase: i64,
    /// Anchor chain height where the reward phase starts
    pub reward_phase_start_block_height: u64,
    /// Blocks left before the reward phase
    pub blocks_until_reward_phase: u64,
    /// Amount left to reject PoX for this cycle, `null` since rejection voting was removed
    #[serde(default)]
    pub ustx_until_pox_rejection: Option<u64>,
}

/// Proof-of-Transfer parameters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoreNodePoxResponse {
    /// Identifier of the PoX contract
    pub contract_id: String,
    /// Anchor chain height of the first PoX cycle
    pub first_burnchain_block_height: u64,
    /// Minimal amount to participate in the current cycle
    pub min_amount_ustx: u64,
    /// Length of the prepare phase in blocks
    #[serde(default)]
    pub prepare_cycle_length: Option<u64>,
    /// Fraction of liquid supply required to reject PoX
    #[serde(default)]
    pub rejection_fraction: Option<u64>,
    /// Current reward cycle number
    pub reward_cycle_id: u64,
    /// Length of a reward cycle in blocks
    pub reward_cycle_length: u64,
    /// Votes still required to reject PoX
    #[serde(default)]
    pub rejection_votes_left_required: Option<u64>,
    /// Total liquid supply in micro-STX
    pub total_liquid_supply_ustx: u64,
    /// Blocks until the next reward cycle
    #[serde(default)]
    pub next_reward_cycle_in: Option<u64>,
    /// Current anchor chain height
    #[serde(default)]
    pub current_burnchain_block_height: Option<u64>,
    /// Stacked amount required to activate PoX
    #[serde(default)]
    pub pox_activation_threshold_ustx: Option<u64>,
    /// Length of the prepare phase in blocks
    #[serde(default)]
    pub prepare_phase_block_length: Option<u64>,
    /// Length of the reward phase in blocks
    #[serde(default)]
    pub reward_phase_block_length: Option<u64>,
    /// Number of reward slots in a cycle
    #[serde(default)]
    pub reward_slots: Option<u64>,
    /// Current cycle details
    #[serde(default)]
    pub current_cycle: Option<PoxCurrentCycle>,
    /// Next cycle details
    #[serde(default)]
    pub next_cycle: Option<PoxNextCycle>,
}

fn height_query(height: Option<u64>) -> [(&'static str, Option<String>); 1] {
    [("height", height.map(|h| h.to_string()))]
}

pub async fn fetch_core_api_info(url: &str) -> ApiResult<CoreNodeInfoResponse> {
    //! Get core node information.
    fetch_json(Endpoint::Info.url(url)?).await
}

pub async fn fetch_status(url: &str) -> ApiResult<ServerStatusResponse> {
    //! Get API server status.
    fetch_json(Endpoint::Status.url(url)?).await
}

pub async fn fetch_network_block_times(url: &str) -> ApiResult<NetworkBlockTimesResponse> {
    //! Get target block times of mainnet and testnet.
    fetch_json(Endpoint::NetworkBlockTimes.url(url)?).await
}

pub async fn fetch_network_block_time(
    url: &str,
    chain: Chain,
) -> ApiResult<NetworkBlockTimeResponse> {
    //! Get target block time of the given chain.
    fetch_json(Endpoint::NetworkBlockTime.url_with(url, &[chain.as_str()], &[])?).await
}

pub async fn fetch_stx_supply(url: &str, height: Option<u64>) -> ApiResult<StxSupplyResponse> {
    //! Get total and unlocked STX supply.
    //!
    //! Pass a block height to query historical supply; `None` queries the tip.
    fetch_json(Endpoint::StxSupply.url_with(url, &[], &height_query(height))?).await
}

pub async fn fetch_stx_supply_plain(url: &str) -> ApiResult<String> {
    //! Get total STX supply as plain text.
    //!
    //! The body is returned verbatim: this endpoint does not speak JSON.
    fetch_text(Endpoint::StxSupplyTotalPlain.url(url)?).await
}

pub async fn fetch_stx_supply_circulating_plain(url: &str) -> ApiResult<String> {
    //! Get circulating STX supply as plain text.
    fetch_text(Endpoint::StxSupplyCirculatingPlain.url(url)?).await
}

pub async fn fetch_stx_supply_legacy_format(
    url: &str,
    height: Option<u64>,
) -> ApiResult<StxSupplyLegacyFormatResponse> {
    //! Get total and unlocked STX supply in the legacy 1.0 API format.
    fetch_json(Endpoint::StxSupplyLegacyFormat.url_with(url, &[], &height_query(height))?).await
}

pub async fn fetch_pox(url: &str) -> ApiResult<CoreNodePoxResponse> {
    //! Get Proof-of-Transfer parameters.
    fetch_json(Endpoint::Pox.url(url)?).await
}
