//! nearcity-cli
//! ============
//!
//! Command-line interface for the `nearcity-core` proximity index.
//!
//! This crate primarily provides a binary (`nearcity-cli`). The library
//! target only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install nearcity-cli
//! nearcity-cli --help
//! nearcity-cli stats
//! nearcity-cli nearest 33.6846 -117.8265 -k 3
//! nearcity-cli within 33.6846 -117.8265 --radius 250
//! nearcity-cli --json summary irvine-ca
//! ```
//!
//! For programmatic access use the [`nearcity-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
