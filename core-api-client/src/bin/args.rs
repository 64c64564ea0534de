// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::path::PathBuf;

use clap::Parser;

use crate::command::Command;
use crate::settings::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Query a Babylon node through its Core API.",
    author = "Dusk Network B.V."
)]
pub(crate) struct Args {
    /// Config file [default: `$HOME/.config/core-api/config.toml`]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Network profile or logical network name
    #[arg(short, long)]
    pub network: Option<String>,

    /// Core API base path, overriding the configured one
    #[arg(long)]
    pub base_path: Option<String>,

    /// Do not compare the node's network with the configured one
    #[arg(long)]
    pub skip_network_check: bool,

    /// Output log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Logging output type
    #[arg(long, value_enum, default_value_t = LogFormat::Coloured)]
    pub log_type: LogFormat,

    /// Command
    #[command(subcommand)]
    pub command: Command,
}
