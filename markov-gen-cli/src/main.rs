use std::env;
use std::process;

use markov_gen_core::model::generator::Generator;
use markov_gen_core::tokenizer::WordTokenizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: markov-gen-cli [input text file] [rank]");
        process::exit(2);
    }

    let rank: usize = match args[2].parse() {
        Ok(rank) => rank,
        Err(_) => {
            eprintln!("rank must be a positive integer, got '{}'", args[2]);
            process::exit(2);
        }
    };

    // Ingest the whole corpus file (one source sentence per line)
    let tokenizer = WordTokenizer::new()?;
    let generator = Generator::from_file(rank, tokenizer, &args[1])?;

    // Generate 10 sentences, skipping attempts that found no noun head
    for _ in 0..10 {
        if let Some(sentence) = generator.generate_sentence() {
            println!("{sentence}");
        }
    }

    Ok(())
}
