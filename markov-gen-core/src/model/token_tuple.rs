use serde::{Deserialize, Serialize};

use super::markov_chain::TERMINATOR;
use crate::tokenizer::Token;

/// An ordered, fixed-width sequence of `rank + 1` tokens.
///
/// Tuples are cut from consecutive positions of one ingested sentence, so
/// the last `rank` tokens of one tuple overlap the first `rank` tokens of
/// the tuple cut one position later.
///
/// # Invariants
/// - Always holds exactly `rank + 1` tokens for the corpus rank, i.e. at
///   least 2 tokens.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenTuple {
	tokens: Vec<Token>,
}

impl TokenTuple {
	/// Wraps a window of `rank + 1` consecutive tokens.
	///
	/// Only the corpus constructs tuples, which guarantees the width
	/// invariant.
	pub(crate) fn new(tokens: Vec<Token>) -> Self {
		debug_assert!(tokens.len() >= 2);
		Self { tokens }
	}

	/// Returns the tokens in order.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// Number of tokens in the tuple (`rank + 1`).
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Always false under the width invariant, provided for completeness.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns the first token.
	pub fn first(&self) -> &Token {
		&self.tokens[0]
	}

	/// Returns the last token.
	pub fn last(&self) -> &Token {
		&self.tokens[self.tokens.len() - 1]
	}

	/// Whether `after` may follow this tuple in a chain.
	///
	/// Holds iff the last `rank` surfaces of `self` equal the first `rank`
	/// surfaces of `after`, so the two tuples splice into a single token
	/// stream without duplication. Tuples of different widths never connect.
	pub fn connectable(&self, after: &Self) -> bool {
		if self.tokens.len() != after.tokens.len() {
			return false;
		}
		let rank = self.tokens.len() - 1;
		(0..rank).all(|i| self.tokens[i + 1].surface() == after.tokens[i].surface())
	}

	/// Whether this tuple ends a sentence.
	///
	/// True when the last surface is `"."`, the full-width period `"。"`,
	/// or contains the terminator sentinel appended during ingestion.
	pub fn is_terminal(&self) -> bool {
		let surface = self.last().surface();
		surface == "." || surface == "。" || surface.contains(TERMINATOR)
	}

	/// Surfaces of the first `rank` tokens, the key this tuple is indexed
	/// under in the corpus.
	pub(crate) fn prefix_surfaces(&self) -> Vec<String> {
		self.tokens[..self.tokens.len() - 1]
			.iter()
			.map(|t| t.surface().to_owned())
			.collect()
	}

	/// Surfaces of the last `rank` tokens, the key a successor tuple must
	/// be indexed under.
	pub(crate) fn suffix_surfaces(&self) -> Vec<String> {
		self.tokens[1..]
			.iter()
			.map(|t| t.surface().to_owned())
			.collect()
	}
}
