#[cfg(feature = "http")]
#[cfg(test)]
mod test_api_info {
    use serde_json::json;
    use stacks_devkit::api::*;
    use stacks_devkit::network::{Chain, StacksNetwork};
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_json(route: &str, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetch_core_api_info() {
        let server = serve_json(
            "/info",
            json!({
                "peer_version": 402_653_184,
                "pox_consensus": "89d752034e73ed10d3b97e6bcf3cff53367b4166",
                "burn_block_height": 2_000_000,
                "stable_pox_consensus": "7cf2b5b2f5f3bbd1a2d1e0c4d4e1e1f7c5d6c7c8",
                "stable_burn_block_height": 1_999_993,
                "server_version": "stacks-node 2.05.0.0.0",
                "network_id": 2_147_483_648u32,
                "parent_network_id": 118_034_699,
                "stacks_tip_height": 50_000,
                "stacks_tip": "0x1a2b",
                "stacks_tip_consensus_hash": "0x3c4d",
                "unanchored_tip": null,
                "exit_at_block_height": null
            }),
        )
        .await;

        let info = fetch_core_api_info(&server.uri())
            .await
            .expect("Must be fetched");
        assert_eq!(info.stacks_tip_height, 50_000);
        assert_eq!(info.network_id, 2_147_483_648);
        assert_eq!(info.unanchored_tip, None);
        assert_eq!(info.exit_at_block_height, None);
        assert_eq!(info.genesis_chainstate_hash, None);
    }

    #[tokio::test]
    async fn test_fetch_status() {
        let server = serve_json(
            "/status",
            json!({
                "server_version": "stacks-blockchain-api v0.71.2",
                "status": "ready",
                "chain_tip": {
                    "block_height": 50_000,
                    "block_hash": "0xabc",
                    "index_block_hash": "0xdef"
                }
            }),
        )
        .await;

        let status = fetch_status(&server.uri()).await.expect("Must be fetched");
        assert_eq!(status.status, "ready");
        let tip = status.chain_tip.expect("Tip must be present");
        assert_eq!(tip.block_height, 50_000);
        assert_eq!(tip.microblock_hash, None);
    }

    #[tokio::test]
    async fn test_fetch_network_block_times() {
        let server = serve_json(
            "/network_block_times",
            json!({
                "mainnet": {"target_block_time": 600},
                "testnet": {"target_block_time": 120}
            }),
        )
        .await;

        let times = fetch_network_block_times(&server.uri())
            .await
            .expect("Must be fetched");
        assert_eq!(times.mainnet.target_block_time, 600);
        assert_eq!(times.testnet.target_block_time, 120);
    }

    #[tokio::test]
    async fn test_fetch_network_block_time_per_chain() {
        let server = MockServer::start().await;
        for (chain, time) in [("mainnet", 600), ("testnet", 120)] {
            Mock::given(method("GET"))
                .and(path(format!("/network_block_time/{chain}")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"target_block_time": time})),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let mainnet = fetch_network_block_time(&server.uri(), Chain::Mainnet)
            .await
            .expect("Must be fetched");
        let testnet = fetch_network_block_time(&server.uri(), Chain::Testnet)
            .await
            .expect("Must be fetched");
        assert_eq!(mainnet.target_block_time, 600);
        assert_eq!(testnet.target_block_time, 120);
    }

    #[tokio::test]
    async fn test_block_time_for_preset_chain() {
        let server = serve_json(
            "/network_block_time/testnet",
            json!({"target_block_time": 120}),
        )
        .await;

        let network = StacksNetwork::mocknet().with_url(server.uri());
        let time = fetch_network_block_time(network.core_api_url(), network.chain())
            .await
            .expect("Must be fetched");
        assert_eq!(time.target_block_time, 120);
    }

    fn supply_json() -> serde_json::Value {
        json!({
            "unlocked_percent": "77.64",
            "total_stx": "1352464600.000000",
            "unlocked_stx": "1050000000.000000",
            "block_height": 50_000
        })
    }

    #[tokio::test]
    async fn test_fetch_stx_supply_at_tip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stx_supply"))
            .and(query_param_is_missing("height"))
            .respond_with(ResponseTemplate::new(200).set_body_json(supply_json()))
            .expect(1)
            .mount(&server)
            .await;

        let supply = fetch_stx_supply(&server.uri(), None)
            .await
            .expect("Must be fetched");
        assert_eq!(supply.total_stx, "1352464600.000000");
        assert_eq!(supply.block_height, 50_000);
    }

    #[tokio::test]
    async fn test_fetch_stx_supply_at_height() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stx_supply"))
            .and(query_param("height", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(supply_json()))
            .expect(1)
            .mount(&server)
            .await;

        fetch_stx_supply(&server.uri(), Some(42))
            .await
            .expect("Must be fetched");
    }

    #[tokio::test]
    async fn test_fetch_stx_supply_plain_is_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stx_supply/total/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1352464600.000000"))
            .expect(1)
            .mount(&server)
            .await;

        let supply = fetch_stx_supply_plain(&server.uri())
            .await
            .expect("Must be fetched");
        assert_eq!(supply, "1352464600.000000");
    }

    #[tokio::test]
    async fn test_fetch_stx_supply_circulating_plain_is_text() {
        let server = MockServer::start().await;
        // Not valid JSON: a JSON decoder would reject this body.
        Mock::given(method("GET"))
            .and(path("/stx_supply/circulating/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1050000000.000000 STX\n"))
            .expect(1)
            .mount(&server)
            .await;

        let supply = fetch_stx_supply_circulating_plain(&server.uri())
            .await
            .expect("Must be fetched");
        assert_eq!(supply, "1050000000.000000 STX\n");
    }

    #[tokio::test]
    async fn test_fetch_stx_supply_legacy_format() {
        let server = serve_json(
            "/stx_supply/legacy_format",
            json!({
                "unlockedPercent": "77.64",
                "totalStacks": "1352464600.000000",
                "totalStacksFormatted": "1,352,464,600.000000",
                "unlockedSupply": "1050000000.000000",
                "unlockedSupplyFormatted": "1,050,000,000.000000",
                "blockHeight": "50000"
            }),
        )
        .await;

        let supply = fetch_stx_supply_legacy_format(&server.uri(), None)
            .await
            .expect("Must be fetched");
        assert_eq!(supply.total_stacks_formatted, "1,352,464,600.000000");
        assert_eq!(supply.block_height, "50000");
    }

    #[tokio::test]
    async fn test_fetch_pox() {
        let server = serve_json(
            "/pox",
            json!({
                "contract_id": "SP000000000000000000002Q6VF78.pox",
                "first_burnchain_block_height": 666_050,
                "min_amount_ustx": 70_000_000_000u64,
                "prepare_cycle_length": 100,
                "rejection_fraction": 25,
                "reward_cycle_id": 12,
                "reward_cycle_length": 2100,
                "rejection_votes_left_required": 261_000_000_000_000u64,
                "total_liquid_supply_ustx": 1_044_000_000_000_000u64,
                "next_reward_cycle_in": 450
            }),
        )
        .await;

        let pox = fetch_pox(&server.uri()).await.expect("Must be fetched");
        assert_eq!(pox.contract_id, "SP000000000000000000002Q6VF78.pox");
        assert_eq!(pox.reward_cycle_id, 12);
        assert_eq!(pox.next_reward_cycle_in, Some(450));
        assert_eq!(pox.current_cycle, None);
    }

    #[tokio::test]
    async fn test_fetch_pox_with_cycles() {
        let server = serve_json(
            "/pox",
            json!({
                "contract_id": "SP000000000000000000002Q6VF78.pox-4",
                "pox_activation_threshold_ustx": 700_000_000_000u64,
                "first_burnchain_block_height": 666_050,
                "current_burnchain_block_height": 870_123,
                "prepare_phase_block_length": 100,
                "reward_phase_block_length": 2000,
                "reward_slots": 4000,
                "rejection_fraction": null,
                "total_liquid_supply_ustx": 1_400_000_000_000_000u64,
                "current_cycle": {
                    "id": 95,
                    "min_threshold_ustx": 160_000_000_000u64,
                    "stacked_ustx": 400_000_000_000_000u64,
                    "is_pox_active": true
                },
                "next_cycle": {
                    "id": 96,
                    "min_threshold_ustx": 170_000_000_000u64,
                    "min_increment_ustx": 175_000_000_000u64,
                    "stacked_ustx": 380_000_000_000_000u64,
                    "prepare_phase_start_block_height": 870_100,
                    "blocks_until_prepare_phase": -23,
                    "reward_phase_start_block_height": 870_200,
                    "blocks_until_reward_phase": 77,
                    "ustx_until_pox_rejection": null
                },
                "min_amount_ustx": 170_000_000_000u64,
                "prepare_cycle_length": 100,
                "reward_cycle_id": 95,
                "reward_cycle_length": 2100,
                "rejection_votes_left_required": null,
                "next_reward_cycle_in": 77
            }),
        )
        .await;

        let pox = fetch_pox(&server.uri()).await.expect("Must be fetched");
        assert_eq!(pox.rejection_fraction, None);
        assert_eq!(pox.rejection_votes_left_required, None);
        assert_eq!(pox.reward_slots, Some(4000));
        assert_eq!(
            pox.current_cycle,
            Some(PoxCurrentCycle {
                id: 95,
                min_threshold_ustx: 160_000_000_000,
                stacked_ustx: 400_000_000_000_000,
                is_pox_active: true,
            })
        );
        assert_eq!(
            pox.next_cycle,
            Some(PoxNextCycle {
                id: 96,
                min_threshold_ustx: 170_000_000_000,
                min_increment_ustx: Some(175_000_000_000),
                stacked_ustx: 380_000_000_000_000,
                prepare_phase_start_block_height: 870_100,
                blocks_until_prepare_phase: -23,
                reward_phase_start_block_height: 870_200,
                blocks_until_reward_phase: 77,
                ustx_until_pox_rejection: None,
            })
        );
    }

    #[tokio::test]
    async fn test_preset_repointed_under_path_prefix() {
        let server = serve_json(
            "/stacks/network_block_time/testnet",
            json!({"target_block_time": 120}),
        )
        .await;

        let network = StacksNetwork::testnet().with_url(format!("{}/stacks/", server.uri()));
        let time = fetch_network_block_time(network.core_api_url(), network.chain())
            .await
            .expect("Must be fetched");
        assert_eq!(time.target_block_time, 120);
    }

    #[tokio::test]
    async fn test_server_error_is_reported_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pox"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .expect(1)
            .mount(&server)
            .await;

        let err = fetch_pox(&server.uri()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.body(), Some("busy"));
        assert!(err.to_string().contains("503"));
    }
}
