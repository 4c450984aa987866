// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use blogr_core::SCHEMA;

use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", SCHEMA);
    Ok(())
}
