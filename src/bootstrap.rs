// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry point: read an address and a day count from stdin,
//! retrieve the address's transactions, print what came back.
//!
//! Environment (a `.env` file is loaded when present):
//!
//! - `RPC_URL`: JSON-RPC endpoint for the chain tip (required)
//! - `ETHERSCAN_API_KEY`: history API key (required)
//! - `ETHERSCAN_URL`: history API endpoint (default: Etherscan V2)
//! - `CHAIN_ID`: numeric chain id (default: 1)
//! - `RPC_RATE_LIMIT`: JSON-RPC requests per second (default: unlimited)

use std::time::{Duration, Instant};

use alloy_chains::NamedChain;
use anyhow::{anyhow, bail, Context};
use dotenvy::dotenv;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::{
    create_http_provider, ApiKey, EtherscanClient, EtherscanConfig, HttpProvider, ProviderConfig,
    RpcBlockOracle, TransactionAggregator, TransactionList, TxScanConfig,
};

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rpc_url: String,
    pub rpc_rate_limit: Option<u32>,
    pub api_key: ApiKey,
    pub etherscan_url: Option<String>,
    pub chain: NamedChain,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Reads settings through `lookup`, which returns `None` for unset names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let rpc_url = lookup("RPC_URL").context("RPC_URL must be set")?;
        let api_key = lookup("ETHERSCAN_API_KEY").context("ETHERSCAN_API_KEY must be set")?;

        let chain = match lookup("CHAIN_ID") {
            Some(id) => {
                let id: u64 = id.trim().parse().context("CHAIN_ID must be a number")?;
                NamedChain::try_from(id).map_err(|_| anyhow!("Unknown CHAIN_ID {id}"))?
            }
            None => NamedChain::Mainnet,
        };

        let rpc_rate_limit = lookup("RPC_RATE_LIMIT")
            .map(|rps| rps.trim().parse::<u32>())
            .transpose()
            .context("RPC_RATE_LIMIT must be a number")?;

        Ok(Self {
            rpc_url,
            rpc_rate_limit,
            api_key: ApiKey::new(api_key),
            etherscan_url: lookup("ETHERSCAN_URL"),
            chain,
        })
    }

    pub fn etherscan_config(&self) -> anyhow::Result<EtherscanConfig> {
        let config = EtherscanConfig::new(self.api_key.clone()).with_chain(self.chain);
        match &self.etherscan_url {
            Some(url) => config
                .with_base_url(url)
                .with_context(|| format!("Invalid ETHERSCAN_URL {url}")),
            None => Ok(config),
        }
    }

    pub fn aggregator(
        &self,
    ) -> anyhow::Result<TransactionAggregator<RpcBlockOracle<HttpProvider>, EtherscanClient>> {
        let provider = create_http_provider(
            ProviderConfig::new(&self.rpc_url)
                .with_rate_limit_opt(self.rpc_rate_limit)
                .with_logging(true),
        )?;
        let source = EtherscanClient::new(self.etherscan_config()?)?;
        let config = TxScanConfig::default().for_chain(self.chain);

        Ok(TransactionAggregator::new(
            RpcBlockOracle::new(provider),
            source,
            config,
        ))
    }
}

/// Reads `<address> <days>` from `reader`, across lines if needed.
pub async fn read_request<R>(reader: R) -> anyhow::Result<(String, u64)>
where
    R: AsyncBufRead + Unpin,
{
    let mut tokens = Vec::with_capacity(2);
    let mut lines = reader.lines();

    while tokens.len() < 2 {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }

    let mut tokens = tokens.into_iter();
    let (Some(address), Some(days)) = (tokens.next(), tokens.next()) else {
        bail!("Expected an address and a number of days");
    };
    let days = days
        .parse()
        .with_context(|| format!("Invalid number of days: {days}"))?;

    Ok((address, days))
}

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let settings = Settings::from_env()?;
    let aggregator = settings.aggregator()?;

    println!("Enter an address and a number of days:");
    let (address, days) = read_request(BufReader::new(tokio::io::stdin())).await?;
    info!(%address, days, chain = %settings.chain, "Starting retrieval");

    let started = Instant::now();
    let result = aggregator.get_transactions(&address, days).await;
    let elapsed = started.elapsed();

    match result {
        Ok(transactions) => print_transactions(&transactions, elapsed),
        Err(e) => println!("{}", failure_summary(&anyhow::Error::new(e), elapsed)),
    }

    Ok(())
}

fn print_transactions(transactions: &TransactionList, elapsed: Duration) {
    for tx in transactions {
        let to = tx
            .to
            .or(tx.contract_address)
            .map(|a| a.to_string())
            .unwrap_or_default();
        println!(
            "{} block={} from={} to={} value={}{}",
            tx.hash,
            tx.block_number,
            tx.from,
            to,
            tx.value,
            if tx.succeeded() { "" } else { " (failed)" }
        );
    }
    println!("{}", summary(transactions.len(), elapsed));
}

fn summary(count: usize, elapsed: Duration) -> String {
    format!("{count} transactions in {elapsed:?}")
}

/// A failed retrieval reports an empty result alongside the cause.
fn failure_summary(error: &anyhow::Error, elapsed: Duration) -> String {
    format!("{}. Retrieval failed: {error:#}", summary(0, elapsed))
}
