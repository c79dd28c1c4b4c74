//! Top-level module for the Markov sentence generation system.
//!
//! This crate provides a variable-order Markov sentence generator, including:
//! - Fixed-width token tuples (`TokenTuple`)
//! - A prefix-indexed tuple corpus (`MarkovChain`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for building a corpus and generating sentences.
///
/// Exposes sentence ingestion, parallel corpus construction from files,
/// and bounded random-walk generation.
pub mod generator;

/// Prefix-indexed corpus of token tuples.
///
/// Handles sentence ingestion, uniform random head and successor
/// selection, and corpus merging.
pub mod markov_chain;

/// Fixed-width ordered token tuple (`rank + 1` tokens).
///
/// Carries the overlap contract between consecutive tuples and the
/// sentence-end checks.
pub mod token_tuple;
