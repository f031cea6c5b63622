#![doc(html_root_url = "https://docs.rs/stacks-devkit/0.1.0")]
#![warn(rust_2018_idioms, missing_docs)]
#![deny(dead_code, unused_imports, unused_mut)]

//! Rust library to aid coding with Stacks: a typed client for the Stacks
//! blockchain API and verification of signed messages.
//!
//! The crate is a thin layer over several underlying
//! libraries: HTTP and JSON handling is delegated to `reqwest` and `serde`,
//! elliptic-curve math to `secp256k1`.
//!
//! ## Usage
//!
//! Fetching data needs nothing but the base URL of an API instance that
//! serves the resources directly under it (see [`network`]):
//!
//! ```rust,no_run
//! use stacks_devkit::api::{fetch_pox, fetch_stx_supply_plain};
//! use stacks_devkit::network::StacksNetwork;
//!
//! # async fn run() -> stacks_devkit::api::ApiResult<()> {
//! let network = StacksNetwork::mainnet().with_url("http://localhost:3999/stacks");
//! let pox = fetch_pox(network.core_api_url()).await?;
//! let supply = fetch_stx_supply_plain(network.core_api_url()).await?;
//! println!("cycle {}, total supply {}", pox.reward_cycle_id, supply);
//! # Ok(())
//! # }
//! ```
//!
//! Checking a message signed by a known key:
//!
//! ```rust
//! use stacks_devkit::message::{hash_message, verify_signed_message_with_key, SignatureMode};
//! use stacks_devkit::{PrivateKey, PublicKey};
//! use secp256k1::{Message, Secp256k1};
//!
//! let secp = Secp256k1::new();
//! let key = PrivateKey::from_slice(&[0x42; 32]).expect("Valid key");
//! let hash = hash_message("Hello, Stacks!");
//! let signature = stacks_devkit::message::RecoverableSignature::from(
//!     secp.sign_ecdsa_recoverable(&Message::from_slice(&hash).unwrap(), &key),
//! );
//! let signer = PublicKey::from_secret_key(&secp, &key);
//! let valid = verify_signed_message_with_key(
//!     &hash,
//!     &signature.to_hex(SignatureMode::Rsv),
//!     SignatureMode::Rsv,
//!     &signer,
//! );
//! assert_eq!(valid, Ok(true));
//! ```
//!
//! ## Features
//!
//! * `http` (default): the [`api`] module.
//! * `serde`: serialization of network presets.
//!
//! ## Examples
//!
//! A runnable sample lives in the `demos/` folder of the repository:
//! `cargo run --example chain_info`.
//!
//! ## License
//!
//! This project is licensed under the Lesser GNU General Public License v3.

#[cfg(feature = "http")]
pub mod api;
pub mod message;
pub mod network;
mod utils;
pub use secp256k1::{PublicKey, SecretKey as PrivateKey};
pub use utils::sha256;
