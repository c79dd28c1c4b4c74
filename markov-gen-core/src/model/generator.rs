use std::path::Path;
use std::sync::mpsc;
use std::thread;

use super::markov_chain::{MarkovChain, TERMINATOR};
use super::token_tuple::TokenTuple;
use crate::io::read_file;
use crate::tokenizer::Tokenizer;

/// Maximum number of tuples in one generated chain.
///
/// Bounds the random walk so generation terminates even on cyclic corpora.
pub const MAX_STEPS: usize = 30;

/// High-level sentence generator over one corpus and one tokenizer.
///
/// # Responsibilities
/// - Feed raw lines through the tokenizer into the corpus
/// - Build a corpus from a text file using multithreaded ingestion
/// - Generate sentences by bounded random walk over connectable tuples
#[derive(Clone, Debug)]
pub struct Generator<T: Tokenizer> {
	tokenizer: T,
	chain: MarkovChain,
}

impl<T: Tokenizer> Generator<T> {
	/// Creates an empty generator of order `rank`.
	///
	/// # Errors
	/// Returns an error if `rank < 1`.
	pub fn new(rank: usize, tokenizer: T) -> Result<Self, String> {
		Ok(Self { tokenizer, chain: MarkovChain::new(rank)? })
	}

	/// Builds a generator by ingesting every line of a text file.
	///
	/// # Behavior
	/// - Splits the file's lines into chunks (based on CPU cores * factor).
	/// - Spawns threads to build partial chains for each chunk, each with
	///   its own clone of the tokenizer.
	/// - Merges all partial chains sequentially.
	///
	/// # Errors
	/// - Returns an error if `rank < 1` or file I/O fails.
	///
	/// # Notes
	/// - Uses MPSC channels to collect partial chains from threads.
	/// - The corpus is a multiset, so merge order does not matter.
	pub fn from_file<P: AsRef<Path>>(
		rank: usize,
		tokenizer: T,
		filepath: P,
	) -> Result<Self, Box<dyn std::error::Error>>
	where
		T: Clone + Send + 'static,
	{
		let mut generator = Self::new(rank, tokenizer.clone())?;

		let lines = read_file(filepath)?;
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = ((lines.len() + chunks - 1) / chunks).max(1);

		let (tx, rx) = mpsc::channel();
		for chunk in lines.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();
			let tokenizer = tokenizer.clone();

			thread::spawn(move || {
				// Cannot fail, rank was validated when the generator was built
				let mut partial = MarkovChain::new(rank).unwrap();
				for sentence in chunk {
					partial.add_sentence(&tokenizer, &sentence);
				}
				tx.send(partial).expect("Failed to send from thread");
			});
		}
		drop(tx);

		for partial in rx.iter() {
			generator.chain.merge(&partial)?;
		}

		Ok(generator)
	}

	/// Adds one source sentence to the corpus.
	pub fn add_sentence(&mut self, sentence: &str) {
		self.chain.add_sentence(&self.tokenizer, sentence);
	}

	/// Read-only view of the underlying corpus.
	pub fn chain(&self) -> &MarkovChain {
		&self.chain
	}

	/// Generates one sentence by bounded random walk.
	///
	/// # Behavior
	/// - Starts from a uniformly random noun-headed tuple.
	/// - Repeatedly appends a uniformly random connectable successor until
	///   the last tuple ends a sentence, no successor exists, or the chain
	///   reaches `MAX_STEPS` tuples.
	/// - All three outcomes render the chain walked so far.
	///
	/// # Returns
	/// `None` only when the corpus is empty or holds no noun-headed tuple.
	pub fn generate_sentence(&self) -> Option<String> {
		let tokenizer = &self.tokenizer;
		let head = self.chain.random_head(|token| tokenizer.is_noun(token))?;

		let mut walked: Vec<&TokenTuple> = vec![head];
		while walked.len() < MAX_STEPS {
			let last = walked[walked.len() - 1];
			if last.is_terminal() {
				break;
			}
			match self.chain.random_successor(last) {
				Some(next) => walked.push(next),
				// Dead end, render what was walked
				None => break,
			}
		}

		Some(merge_tuples(&walked))
	}
}

/// Flattens a walked chain back into surface text.
///
/// Emits every surface of the first tuple, then only the last surface of
/// each subsequent tuple (the overlap tokens are shared by construction),
/// skipping any surface containing the terminator sentinel. No separators
/// are inserted.
fn merge_tuples(chain: &[&TokenTuple]) -> String {
	let mut sentence = String::new();

	if let Some(first) = chain.first() {
		for token in first.tokens() {
			if !token.surface().contains(TERMINATOR) {
				sentence.push_str(token.surface());
			}
		}
	}

	for tuple in chain.iter().skip(1) {
		let last = tuple.last();
		if !last.surface().contains(TERMINATOR) {
			sentence.push_str(last.surface());
		}
	}

	sentence
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenizer::Token;

	/// Test tokenizer with an explicit noun list.
	///
	/// Splits alphanumeric runs and single symbols, and emits blank tokens
	/// for spaces so ingestion filtering is exercised.
	#[derive(Clone)]
	struct TaggedTokenizer {
		nouns: Vec<&'static str>,
	}

	impl TaggedTokenizer {
		fn tag(&self, word: &str) -> Token {
			let category = if self.nouns.contains(&word) { "noun" } else { "verb" };
			Token::new(word, category)
		}
	}

	impl Tokenizer for TaggedTokenizer {
		fn tokenize(&self, text: &str) -> Vec<Token> {
			let mut tokens = Vec::new();
			let mut word = String::new();
			for c in text.chars() {
				if c.is_alphanumeric() {
					word.push(c);
					continue;
				}
				if !word.is_empty() {
					tokens.push(self.tag(&word));
					word.clear();
				}
				let category = if c.is_whitespace() { "blank" } else { "symbol" };
				tokens.push(Token::new(c.to_string(), category));
			}
			if !word.is_empty() {
				tokens.push(self.tag(&word));
			}
			tokens
		}

		fn is_noun(&self, token: &Token) -> bool {
			token.category() == "noun"
		}
	}

	#[test]
	fn empty_corpus_generates_nothing() {
		let generator = Generator::new(1, TaggedTokenizer { nouns: vec![] }).unwrap();
		assert!(generator.generate_sentence().is_none());
	}

	#[test]
	fn headless_corpus_generates_nothing() {
		let mut generator = Generator::new(1, TaggedTokenizer { nouns: vec![] }).unwrap();
		generator.add_sentence("I like cats.");
		assert!(generator.generate_sentence().is_none());
	}

	#[test]
	fn single_sentence_walk_is_deterministic() {
		// Only "I" is noun-tagged, so the head and every successor bucket
		// hold exactly one candidate.
		let mut generator = Generator::new(1, TaggedTokenizer { nouns: vec!["I"] }).unwrap();
		generator.add_sentence("I like cats.");

		for _ in 0..20 {
			assert_eq!(generator.generate_sentence().as_deref(), Some("Ilikecats."));
		}
	}

	#[test]
	fn walk_never_exceeds_max_steps_tuples() {
		// Cyclic corpus: from "b" the walk may loop back to "a" forever.
		let mut generator = Generator::new(1, TaggedTokenizer { nouns: vec!["a"] }).unwrap();
		generator.add_sentence("a b a b a b a b");

		for _ in 0..50 {
			let sentence = generator.generate_sentence().unwrap();
			// First tuple renders 2 surfaces, each further tuple renders 1,
			// and every surface here is one character.
			assert!(sentence.chars().count() <= MAX_STEPS + 1);
		}
	}

	#[test]
	fn merge_tuples_skips_terminator_and_preserves_order() {
		let tuples = [
			TokenTuple::new(vec![Token::new("cats", "noun"), Token::new(".", "symbol")]),
			TokenTuple::new(vec![Token::new(".", "symbol"), Token::new(TERMINATOR, "symbol")]),
		];
		let chain: Vec<&TokenTuple> = tuples.iter().collect();
		assert_eq!(merge_tuples(&chain), "cats.");
	}

	#[test]
	fn merge_tuples_renders_empty_chain_as_empty() {
		assert_eq!(merge_tuples(&[]), "");
	}
}
