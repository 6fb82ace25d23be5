// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::server;
use crate::storage::FinanceStore;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

pub fn handle(store: Arc<dyn FinanceStore>, config: Config, m: &clap::ArgMatches) -> Result<()> {
    let mut config = config;
    if let Some(addr) = m.get_one::<String>("addr") {
        config.listen_addr = addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid --addr '{}'", addr))?;
    }
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::run(&config, store))
}
