use std::fs;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use markov_gen_core::model::generator::Generator;
use markov_gen_core::tokenizer::WordTokenizer;

/// Markov chain order used by the server-wide generator.
const RANK: usize = 2;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
}

#[derive(Deserialize)]
struct SentenceParams {
	text: Option<String>,
}

#[derive(Deserialize)]
struct CorpusParams {
	path: Option<String>,
}

#[derive(Serialize)]
struct Stats {
	rank: usize,
	tuples: usize,
}

struct SharedData {
	generator: Generator<WordTokenizer>,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates up to `count` sentences (default 1) from the shared corpus.
/// Attempts that find no noun head are skipped; an empty corpus yields 404.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1).clamp(1, 100);

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let sentences: Vec<String> = (0..count)
		.filter_map(|_| shared_data.generator.generate_sentence())
		.collect();

	if sentences.is_empty() {
		return HttpResponse::NotFound().body("No sentence could be generated");
	}
	HttpResponse::Ok().body(sentences.join("\n"))
}

/// HTTP PUT endpoint `/v1/sentence`
///
/// Adds one source sentence to the shared corpus.
#[put("/v1/sentence")]
async fn put_sentence(data: web::Data<Mutex<SharedData>>, query: web::Query<SentenceParams>) -> impl Responder {
	let text = match &query.text {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty sentence text"),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	shared_data.generator.add_sentence(text);
	HttpResponse::Ok().body("Sentence added")
}

/// HTTP PUT endpoint `/v1/corpus`
///
/// Ingests every line of a server-local text file into the shared corpus.
#[put("/v1/corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusParams>) -> impl Responder {
	let path = match &query.path {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus path"),
	};

	let contents = match fs::read_to_string(path) {
		Ok(c) => c,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}")),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	for line in contents.lines() {
		shared_data.generator.add_sentence(line);
	}

	HttpResponse::Ok().body("Corpus loaded successfully")
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().json(Stats {
		rank: shared_data.generator.chain().rank(),
		tuples: shared_data.generator.chain().len(),
	})
}

/// Main entry point for the server.
///
/// Starts with an empty corpus, wraps the generator in a `Mutex` for
/// thread safety, and serves the generation and learning endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Currently, the chain order is hardcoded and should be made configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let tokenizer = WordTokenizer::new().map_err(std::io::Error::other)?;
	let shared_data = SharedData {
		generator: Generator::new(RANK, tokenizer).map_err(std::io::Error::other)?,
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_generator.clone())
			.service(get_generated)
			.service(put_sentence)
			.service(put_corpus)
			.service(get_stats)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
