//! # cr-client
//!
//! A Clash Royale API client for Rust.
//!
//! ## Features
//!
//! - **Tag normalization**: raw user input (`#c0g20pr2`, `PYOVC98C`) is
//!   canonicalized and validated against the SuperCell tag alphabet before
//!   any network I/O
//! - **Resilient fetch**: one GET per operation with a bounded wait; every
//!   failure is classified into a small typed taxonomy (timeout, response/
//!   transport error, invalid tag)
//! - **Structural models**: responses are wrapped in navigable entity models
//!   (profile, clan, members, deck, constants) that keep the raw payload
//!   reachable and round-trippable
//! - **Async/Await**: built on tokio and reqwest
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cr_client::ClashRoyaleClient;
//! use cr_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClashRoyaleClient::new(Config::default())?;
//!
//!     let profile = client.get_profile("#C0G20PR2").await?;
//!     println!("{} is in {}", profile.name.as_deref().unwrap_or("?"), profile.clan_name());
//!
//!     let clans = client.get_clans(&["2CCCP", "8UU2"]).await?;
//!     println!("Fetched {} clans in one request", clans.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cr_core::Error>`. The client never retries
//! and never returns partial data: callers see exactly one of timeout,
//! response/transport error, invalid tag, or success.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod transport;

// Re-export the main client and common types
pub use client::ClashRoyaleClient;
pub use cr_core::{Config, Error, Result, Tag};
pub use cr_models::*;
