// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The browser is where the palette actually runs in production; the binding
//! lives behind the `wasm` feature so native builds don't pull in
//! wasm-bindgen.

#[cfg(feature = "wasm")]
pub mod wasm;
