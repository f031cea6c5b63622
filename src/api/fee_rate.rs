use super::utils::fetch_json_post;
use super::{ApiResult, Endpoint};
use serde::{Deserialize, Serialize};

/// Fee rate estimation request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeeRateRequest {
    /// Hex-encoded serialized transaction
    pub transaction: String,
}

/// Estimated fee rate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeeRate {
    /// Fee rate in micro-STX per byte
    pub fee_rate: u64,
}

pub async fn fetch_fee_rate(url: &str, transaction: &str) -> ApiResult<FeeRate> {
    //! Estimate the fee rate for a raw transaction payload.
    let request = FeeRateRequest {
        transaction: transaction.to_string(),
    };
    fetch_json_post(Endpoint::FeeRate.url(url)?, &request).await
}
