//! Rackfilter Integration Test Infrastructure
//!
//! This crate holds the cross-module tests for the rackfilter crates:
//!
//! - **Form equivalence**: every direct-form topology realizes the same
//!   transfer function
//! - **Lattice fixtures**: reference sequences for the lattice cascades
//! - **Ladder stability**: bounded output near self-oscillation
//! - **Design documents**: JSON → validation → processor
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rackfilter-tests
//!
//! # Property tests only
//! cargo test -p rackfilter-tests --test proptest_filters
//! ```

pub mod fixtures;
pub mod harness;
