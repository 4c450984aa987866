// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::BLOGR_INSTANCE_PATH, "BLOGR_INSTANCE_PATH");
    assert_eq!(vars::RUST_LOG, "RUST_LOG");
}
