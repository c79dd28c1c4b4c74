use rand::prelude::{IndexedRandom, IteratorRandom};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::token_tuple::TokenTuple;
use crate::tokenizer::{Token, Tokenizer};

/// Sentinel appended to every ingested line before tokenization.
///
/// Guarantees every sentence's tuple stream ends in a recognizable boundary
/// token even when the source text lacks terminal punctuation.
pub const TERMINATOR: &str = "¥";

/// Prefix-indexed corpus of token tuples for one chain order.
///
/// The `MarkovChain` stores every tuple cut from ingested sentences and an
/// index from first-`rank` surfaces to the tuples carrying that prefix, so
/// head and successor selection draw uniformly from the matching candidates
/// instead of reordering the whole corpus per step.
///
/// # Responsibilities
/// - Cut ingested sentences into `rank + 1` token windows
/// - Select a random noun-headed starting tuple
/// - Select a random successor for a given tuple
/// - Merge with another chain of the same rank
///
/// # Invariants
/// - `rank` is always >= 1
/// - Every stored tuple has exactly `rank + 1` tokens
/// - `index` maps each tuple's first `rank` surfaces to its position
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MarkovChain {
	/// The chain order (number of overlap tokens between tuples)
	rank: usize, // must be >= 1

	/// All tuples cut from ingested sentences, in insertion order
	tuples: Vec<TokenTuple>,

	/// Mapping from a prefix (first `rank` surfaces) to tuple positions
	index: HashMap<Vec<String>, Vec<usize>>,
}

impl MarkovChain {
	/// Creates a new empty chain of order `rank`.
	///
	/// # Errors
	/// Returns an error if `rank < 1`.
	pub fn new(rank: usize) -> Result<Self, String> {
		if rank < 1 {
			return Err("rank must be >= 1".to_owned());
		}
		Ok(Self { rank, tuples: Vec::new(), index: HashMap::new() })
	}

	/// Returns the chain order.
	pub fn rank(&self) -> usize {
		self.rank
	}

	/// Number of stored tuples.
	pub fn len(&self) -> usize {
		self.tuples.len()
	}

	/// Whether the corpus holds no tuples yet.
	pub fn is_empty(&self) -> bool {
		self.tuples.is_empty()
	}

	/// Returns the stored tuples in insertion order.
	pub fn tuples(&self) -> &[TokenTuple] {
		&self.tuples
	}

	/// Adds one sentence to the corpus.
	///
	/// Tokenizes `sentence` with the terminator sentinel appended, drops
	/// blank tokens, and stores every window of `rank + 1` consecutive
	/// tokens.
	///
	/// # Notes
	/// - A line yielding fewer than `rank + 1` tokens produces no tuples.
	///   This is not an error.
	pub fn add_sentence<T: Tokenizer>(&mut self, tokenizer: &T, sentence: &str) {
		let mut tokens = tokenizer.tokenize(&format!("{sentence}{TERMINATOR}"));
		tokens.retain(|t| !t.is_blank());

		let width = self.rank + 1;
		if tokens.len() < width {
			// Sentence too short, no tuples to cut
			return;
		}

		for window in tokens.windows(width) {
			self.push(TokenTuple::new(window.to_vec()));
		}
	}

	/// Stores a tuple and records it under its prefix key.
	fn push(&mut self, tuple: TokenTuple) {
		let position = self.tuples.len();
		self.index.entry(tuple.prefix_surfaces()).or_default().push(position);
		self.tuples.push(tuple);
	}

	/// Selects a uniformly random tuple whose first token is noun-tagged.
	///
	/// `is_noun` is the tokenizer's capability check for its own tag
	/// scheme. Returns `None` if the corpus is empty or holds no
	/// noun-headed tuple.
	pub fn random_head<F>(&self, is_noun: F) -> Option<&TokenTuple>
	where
		F: Fn(&Token) -> bool,
	{
		self.tuples
			.iter()
			.filter(|tuple| is_noun(tuple.first()))
			.choose(&mut rand::rng())
	}

	/// Selects a uniformly random tuple that may follow `last`.
	///
	/// Candidates are the tuples indexed under `last`'s suffix surfaces,
	/// which is exactly the set of connectable successors. Returns `None`
	/// when the walk hit a dead end.
	pub fn random_successor(&self, last: &TokenTuple) -> Option<&TokenTuple> {
		let bucket = self.index.get(&last.suffix_surfaces())?;
		let position = *bucket.choose(&mut rand::rng())?;
		let next = &self.tuples[position];
		debug_assert!(last.connectable(next));
		Some(next)
	}

	/// Merges another chain into this one.
	///
	/// # Notes
	/// - Both chains must have the same order `rank`.
	/// - Duplicate tuples are kept; the corpus is a multiset.
	///
	/// # Errors
	/// Returns an error if the chain orders do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.rank != other.rank {
			return Err("Rank mismatch".to_owned());
		}

		for tuple in &other.tuples {
			self.push(tuple.clone());
		}

		Ok(())
	}
}
