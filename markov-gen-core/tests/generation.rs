use std::fs;
use std::path::PathBuf;

use markov_gen_core::model::generator::{Generator, MAX_STEPS};
use markov_gen_core::tokenizer::WordTokenizer;

fn corpus_file(name: &str, contents: &str) -> PathBuf {
	let path = std::env::temp_dir().join(name);
	fs::write(&path, contents).expect("Failed to write corpus file");
	path
}

#[test]
fn from_file_matches_sequential_ingestion() {
	let lines = ["I like cats.", "cats like fish.", "fish swim in the sea."];
	let path = corpus_file("markov-gen-test-sequential.txt", &lines.join("\n"));

	let parallel = Generator::from_file(2, WordTokenizer::new().unwrap(), &path).unwrap();

	let mut sequential = Generator::new(2, WordTokenizer::new().unwrap()).unwrap();
	for line in lines {
		sequential.add_sentence(line);
	}

	assert_eq!(parallel.chain().len(), sequential.chain().len());
	for tuple in parallel.chain().tuples() {
		assert_eq!(tuple.len(), 3);
	}

	let _ = fs::remove_file(path);
}

#[test]
fn generation_starts_with_a_corpus_word_and_stays_bounded() {
	let mut generator = Generator::new(1, WordTokenizer::new().unwrap()).unwrap();
	generator.add_sentence("I like cats.");
	generator.add_sentence("cats like fish.");
	generator.add_sentence("fish like I.");

	// Longest surface is 4 characters; the chain holds at most MAX_STEPS
	// tuples, rendering rank + 1 surfaces for the head and one per step.
	let bound = 4 * (MAX_STEPS + 1);

	for _ in 0..100 {
		let sentence = generator.generate_sentence().expect("corpus has noun heads");
		assert!(!sentence.is_empty());
		assert!(
			["I", "like", "cats", "fish"].iter().any(|w| sentence.starts_with(w)),
			"unexpected head in {sentence:?}"
		);
		assert!(sentence.chars().count() <= bound);
	}
}

#[test]
fn empty_file_yields_no_result() {
	let path = corpus_file("markov-gen-test-empty.txt", "");
	let generator = Generator::from_file(1, WordTokenizer::new().unwrap(), &path).unwrap();
	assert!(generator.chain().is_empty());
	assert!(generator.generate_sentence().is_none());
	let _ = fs::remove_file(path);
}
