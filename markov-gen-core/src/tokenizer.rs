use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single token produced by morphological analysis.
///
/// A `Token` is an immutable value pairing the literal text as it appeared
/// in the source (`surface`) with the grammatical classification assigned by
/// the tokenizer (`category`).
///
/// # Invariants
/// - Both fields are opaque to the core: the chain only ever compares
///   surfaces for equality and checks categories for substring containment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
	/// The literal text of the token.
	surface: String,
	/// The grammatical category tag attached by the tokenizer.
	category: String,
}

impl Token {
	/// Creates a new token from a surface form and a category tag.
	pub fn new(surface: impl Into<String>, category: impl Into<String>) -> Self {
		Self { surface: surface.into(), category: category.into() }
	}

	/// Returns the surface form.
	pub fn surface(&self) -> &str {
		&self.surface
	}

	/// Returns the category tag.
	pub fn category(&self) -> &str {
		&self.category
	}

	/// Whether the surface contains an ASCII or full-width space.
	///
	/// Blank tokens carry no chain-relevant information and are dropped
	/// during ingestion.
	pub(crate) fn is_blank(&self) -> bool {
		self.surface.contains(' ') || self.surface.contains('　')
	}
}

/// Contract for the external tokenizer collaborator.
///
/// The core consumes tokenization, it never implements morphological
/// analysis itself. An implementation turns raw text into an ordered token
/// sequence and answers noun-ness for its own tag scheme.
pub trait Tokenizer {
	/// Splits `text` into an ordered sequence of tokens.
	fn tokenize(&self, text: &str) -> Vec<Token>;

	/// Whether `token` belongs to the tokenizer's noun category set.
	///
	/// Generated sentences always start with a noun-tagged token, so the
	/// tag scheme decides what can head a sentence.
	fn is_noun(&self, token: &Token) -> bool;
}

/// Category tag assigned by [`WordTokenizer`] to word-like tokens.
pub const NOUN_CATEGORY: &str = "noun";

/// Category tag assigned by [`WordTokenizer`] to everything else.
pub const SYMBOL_CATEGORY: &str = "symbol";

/// A naive regex-based tokenizer for text without a dedicated analyzer.
///
/// Splits text into alphanumeric runs and single non-space symbols. Every
/// word-like token is tagged as a noun, so any word may head a sentence.
/// Deployments with a real morphological analyzer should implement
/// [`Tokenizer`] over it instead.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
	pattern: Regex,
}

impl WordTokenizer {
	/// Creates a new word tokenizer.
	///
	/// # Errors
	/// Returns an error if the token pattern fails to compile.
	pub fn new() -> Result<Self, String> {
		let pattern = Regex::new(r"[\p{Alphabetic}\p{N}']+|[^\p{Alphabetic}\p{N}\s']")
			.map_err(|e| format!("Invalid token pattern: {e}"))?;
		Ok(Self { pattern })
	}
}

impl Tokenizer for WordTokenizer {
	fn tokenize(&self, text: &str) -> Vec<Token> {
		self.pattern
			.find_iter(text)
			.map(|m| {
				let surface = m.as_str();
				let is_word = surface.chars().next().is_some_and(|c| c.is_alphanumeric());
				let category = if is_word { NOUN_CATEGORY } else { SYMBOL_CATEGORY };
				Token::new(surface, category)
			})
			.collect()
	}

	fn is_noun(&self, token: &Token) -> bool {
		token.category().contains(NOUN_CATEGORY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokenize_splits_words_and_symbols() {
		let tokenizer = WordTokenizer::new().unwrap();
		let tokens = tokenizer.tokenize("I like cats.");
		let surfaces: Vec<&str> = tokens.iter().map(Token::surface).collect();
		assert_eq!(surfaces, vec!["I", "like", "cats", "."]);
	}

	#[test]
	fn words_are_noun_tagged_symbols_are_not() {
		let tokenizer = WordTokenizer::new().unwrap();
		let tokens = tokenizer.tokenize("cats.");
		assert!(tokenizer.is_noun(&tokens[0]));
		assert!(!tokenizer.is_noun(&tokens[1]));
	}

	#[test]
	fn blank_detection_covers_ascii_and_full_width_spaces() {
		assert!(Token::new(" ", "symbol").is_blank());
		assert!(Token::new("　", "symbol").is_blank());
		assert!(!Token::new("cats", "noun").is_blank());
	}
}
