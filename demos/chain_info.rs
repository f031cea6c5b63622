//! Network communication requires `http` crate feature.
//!
//! `STACKS_API_URL` is required: it must point at a server exposing the
//! resources this crate requests (`/blocks`, `/info`, `/pox`, ...) directly
//! under it. The network presets only carry host URLs, and the public Hiro
//! API serves the same data under other paths (`/extended/v1/block`,
//! `/v2/info`, `/v2/pox`), so pointing this demo at a bare preset host will
//! fail with HTTP 404.
//!
//! `STACKS_NETWORK` (`mainnet`, `testnet`, `regtest` or `mocknet`, default
//! `testnet`) selects the chain whose block time is queried.

use stacks_devkit::api::*;
use stacks_devkit::network::StacksNetwork;

async fn print_chain_info() -> ApiResult<()> {
    let network: StacksNetwork = std::env::var("STACKS_NETWORK")
        .unwrap_or_else(|_| "testnet".to_string())
        .parse()
        .expect("Unknown network name");
    let network = network.with_url(
        std::env::var("STACKS_API_URL").expect("STACKS_API_URL must be set"),
    );
    let url = network.core_api_url();
    println!("Querying {} at {}", network.name(), url);

    let status = fetch_status(url).await?;
    println!("API status: {}", status.status);

    let info = fetch_core_api_info(url).await?;
    println!(
        "Tip: #{} ({}), anchored at burn height {}",
        info.stacks_tip_height, info.stacks_tip, info.burn_block_height
    );

    let blocks = fetch_blocks(&ListParams::new(url).limit(3)).await?;
    for block in blocks.results {
        println!("  block #{} {} ({} txs)", block.height, block.hash, block.txs.len());
    }

    let block_time = fetch_network_block_time(url, network.chain()).await?;
    println!("Target block time: {}s", block_time.target_block_time);

    let supply = fetch_stx_supply(url, None).await?;
    println!(
        "STX supply: {} total, {} unlocked ({}%)",
        supply.total_stx, supply.unlocked_stx, supply.unlocked_percent
    );

    let pox = fetch_pox(url).await?;
    println!(
        "PoX: cycle {}, min {} uSTX",
        pox.reward_cycle_id, pox.min_amount_ustx
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = print_chain_info().await {
        eprintln!("Failed: {e}");
        std::process::exit(1);
    }
}
