//! This module contains the implementation of the [crate::OutputSource] trait for fetching output roots from a
//! trusted rollup node.

use crate::OutputSource;
use alloy_primitives::{B256, U64};
use alloy_rpc_client::RpcClient;
use alloy_transport::TransportResult;
use alloy_transport_http::Http;
use anyhow::Result;
use reqwest::Client;
use url::Url;

/// The [RollupOutputSource] is an [OutputSource] that serves canonical output roots from the
/// `optimism_outputAtBlock` RPC method of a trusted rollup node.
pub struct RollupOutputSource {
    pub rpc_client: RpcClient<Http<Client>>,
}

/// A minified response of the `optimism_outputAtBlock` RPC method from the rollup node, containing only the output root
/// requested.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputAtBlockResponse {
    pub output_root: B256,
}

impl RollupOutputSource {
    pub fn try_new(rollup_rpc_url: impl AsRef<str>) -> Result<Self> {
        let rpc_client = RpcClient::builder().http(Url::parse(rollup_rpc_url.as_ref())?);
        Ok(Self { rpc_client })
    }
}

#[async_trait::async_trait]
impl OutputSource for RollupOutputSource {
    async fn output_at_block(&self, block_number: u64) -> Result<B256> {
        // The rollup node expects the block number as a hex quantity.
        let result: TransportResult<OutputAtBlockResponse> = self
            .rpc_client
            .request("optimism_outputAtBlock", (U64::from(block_number),))
            .await;
        Ok(result?.output_root)
    }
}
