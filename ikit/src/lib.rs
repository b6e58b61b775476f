// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ikit — Small Helpers, Typed
//!
//! A grab bag of independent helpers that every integration project ends
//! up rewriting: legacy crypto formats partner APIs insist on, a lottery
//! style weighted picker, and filesystem conveniences.
//!
//! ## Modules
//!
//! - **crypto** — 3DES-ECB, HMAC-SHA1/SHA256, chunked RSA PKCS#1 v1.5
//!   encryption and signatures, PEM key handling.
//! - **random** — weighted index selection and bounded integers. Not for secrets.
//! - **fsutil** — suffix-filtered listings, recursive walks, path resolution,
//!   file copy.
//! - **config** — constants and key-generation settings.
//! - **logging** — opt-in `tracing` subscriber setup.
//!
//! The modules share nothing. Pull in the one you need and ignore the rest.
//!
//! ## Ground rules
//!
//! 1. Every fallible call returns a `Result`. Bad input never panics.
//! 2. No state survives a call, except the shared RNG in [`random`].
//! 3. Key material and plaintext are never logged.

pub mod config;
pub mod crypto;
pub mod fsutil;
pub mod logging;
pub mod random;
