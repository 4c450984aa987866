// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use blogr::Cli;
use clap::Parser;

fn main() {
    blogr::logging::init();

    let cli = Cli::parse();
    if let Err(e) = blogr::run(cli) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
