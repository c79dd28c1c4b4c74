//! Markov-chain sentence generation library.
//!
//! This crate builds a variable-order Markov chain over tokenized text and
//! synthesizes new sentences by random walk, including:
//! - Sentence ingestion into overlapping token tuples
//! - A prefix-indexed corpus with uniform random candidate selection
//! - A bounded random walker and surface-text renderer
//! - A tokenizer trait so morphological analysis stays pluggable
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain models and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal corpus representations private.
pub mod model;

/// Token value type and the external tokenizer contract.
///
/// Includes a naive regex-based implementation for corpora without a
/// dedicated morphological analyzer.
pub mod tokenizer;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;
