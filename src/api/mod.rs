//! Client for the Stacks blockchain HTTP API.
//!
//! Every function takes the base URL of an API instance (see
//! [`StacksNetwork`](crate::network::StacksNetwork) for well-known ones)
//! plus the parameters identifying a resource, performs a single request
//! and decodes the response. Nothing is cached or retried.
//!
//! ```rust,no_run
//! use stacks_devkit::api::{fetch_block_by_height, fetch_blocks, ListParams};
//! use stacks_devkit::network::StacksNetwork;
//!
//! # async fn run() -> stacks_devkit::api::ApiResult<()> {
//! let network = StacksNetwork::testnet();
//! let recent = fetch_blocks(&ListParams::new(network.core_api_url()).limit(5)).await?;
//! let block = fetch_block_by_height(network.core_api_url(), 100).await?;
//! println!("{} blocks, #100 is {}", recent.results.len(), block.hash);
//! # Ok(())
//! # }
//! ```

mod blocks;
mod fee_rate;
mod info;
mod utils;

pub use blocks::*;
pub use fee_rate::*;
pub use info::*;

use reqwest::Url;

/// Generic result of all asynchronous calls in this module.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Coarse classification of [`ApiError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Transport failure or non-success HTTP status.
    Network,
    /// Response body did not match the expected shape.
    Decode,
    /// Base URL cannot be used to build a request.
    InvalidUrl,
}

/// API call failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("{url} responded with HTTP {status}: {}", .body.trim_end())]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// Response body is not valid JSON of the expected shape.
    #[error("failed to decode response: {source}")]
    Decode {
        /// Underlying parser error
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },
    /// Base URL is not usable.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidUrl {
        /// URL as given
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ApiError {
    pub const fn kind(&self) -> ErrorKind {
        //! Classify this error.
        match self {
            Self::Network(_) | Self::Status { .. } => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
        }
    }

    pub fn body(&self) -> Option<&str> {
        //! Raw response body, if one was received.
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Base URL with optional pagination bounds.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ListParams {
    /// API base url
    pub url: String,
    /// Maximal number of results
    pub limit: Option<u32>,
    /// Number of results to skip
    pub offset: Option<u32>,
}

impl ListParams {
    pub fn new<S: Into<String>>(url: S) -> Self {
        //! Parameters without pagination bounds.
        Self {
            url: url.into(),
            limit: None,
            offset: None,
        }
    }
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        //! Set maximal number of results.
        self.limit = Some(limit);
        self
    }
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        //! Set number of results to skip.
        self.offset = Some(offset);
        self
    }

    fn query(&self) -> [(&'static str, Option<String>); 2] {
        [
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
        ]
    }
}

/// Fixed API resources, relative to the base URL.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Endpoint {
    /// `/blocks`
    Blocks,
    /// `/fee_rate`
    FeeRate,
    /// `/info`
    Info,
    /// `/status`
    Status,
    /// `/network_block_times`
    NetworkBlockTimes,
    /// `/network_block_time`
    NetworkBlockTime,
    /// `/stx_supply`
    StxSupply,
    /// `/stx_supply/total/plain`
    StxSupplyTotalPlain,
    /// `/stx_supply/circulating/plain`
    StxSupplyCirculatingPlain,
    /// `/stx_supply/legacy_format`
    StxSupplyLegacyFormat,
    /// `/pox`
    Pox,
}

impl Endpoint {
    pub const fn segments(&self) -> &'static [&'static str] {
        //! Path segments of this resource.
        match self {
            Self::Blocks => &["blocks"],
            Self::FeeRate => &["fee_rate"],
            Self::Info => &["info"],
            Self::Status => &["status"],
            Self::NetworkBlockTimes => &["network_block_times"],
            Self::NetworkBlockTime => &["network_block_time"],
            Self::StxSupply => &["stx_supply"],
            Self::StxSupplyTotalPlain => &["stx_supply", "total", "plain"],
            Self::StxSupplyCirculatingPlain => &["stx_supply", "circulating", "plain"],
            Self::StxSupplyLegacyFormat => &["stx_supply", "legacy_format"],
            Self::Pox => &["pox"],
        }
    }

    pub fn url(&self, base: &str) -> ApiResult<Url> {
        //! Fully-qualified URL of this resource.
        self.url_with(base, &[], &[])
    }

    pub fn url_with(
        &self,
        base: &str,
        extra_segments: &[&str],
        query: &[(&str, Option<String>)],
    ) -> ApiResult<Url> {
        //! URL of a sub-resource with optional query parameters.
        //!
        //! See [`generate_url`] for the rules.
        let segments: Vec<&str> = self
            .segments()
            .iter()
            .chain(extra_segments)
            .copied()
            .collect();
        generate_url(base, &segments, query)
    }
}

pub fn generate_url(
    base: &str,
    segments: &[&str],
    query: &[(&str, Option<String>)],
) -> ApiResult<Url> {
    //! Build a request URL.
    //!
    //! Each segment is appended to the base path as a separate,
    //! percent-encoded path component; a trailing slash on the base is
    //! ignored. Query parameters set to [`None`] are left out entirely.
    let invalid = |reason: String| ApiError::InvalidUrl {
        url: base.to_string(),
        reason,
    };
    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot have a path".to_string()))?
        .pop_if_empty()
        .extend(segments);

    let mut present = query
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
        .peekable();
    if present.peek().is_some() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in present {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}
