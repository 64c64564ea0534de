// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod args;
mod command;
mod settings;

use clap::Parser;
use core_api_client::{ClientConfig, ConfigError, CoreApiClient};
use tracing::debug;

use crate::args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // the logger comes first so configuration errors are reported through it
    settings::init_logging(&args.log_level, &args.log_type)?;

    let config = load_config(&args)?;
    debug!(base_path = %config.base_path, network = %config.network, "Loaded configuration");

    if !args.command.is_remote() {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let client = CoreApiClient::from_config(&config)?;
    if !args.skip_network_check {
        client.check_network().await?;
    }

    let output = args.command.run(&client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn read_config(
    args: &Args,
    profile: Option<&str>,
) -> Result<ClientConfig, ConfigError> {
    match &args.config {
        Some(path) => ClientConfig::load(Some(path.as_path()), profile),
        None => ClientConfig::load_default(profile),
    }
}

/// `--network` selects a profile when one is defined under that name, and
/// otherwise only renames the logical network. `--base-path` wins over both.
fn load_config(args: &Args) -> Result<ClientConfig, ConfigError> {
    let mut config = match &args.network {
        Some(network) => match read_config(args, Some(network.as_str())) {
            Err(ConfigError::UnknownNetwork(_)) => {
                let mut config = read_config(args, None)?;
                config.network = network.clone();
                config
            }
            loaded => loaded?,
        },
        None => read_config(args, None)?,
    };

    if let Some(base_path) = &args.base_path {
        config.base_path = base_path.clone();
    }
    config.validate()?;
    Ok(config)
}
