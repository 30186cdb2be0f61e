//! Reads HTML from stdin, runs the Article pipeline, and prints the result
//! as a JSON object on stdout.

use std::io;
use std::process::ExitCode;

use rs_boilerpipe::extract_article;
use serde::Serialize;

#[derive(Serialize)]
struct Output {
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    content: String,
    warnings: Vec<String>,
}

fn main() -> ExitCode {
    let doc = match extract_article(io::stdin().lock()) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("extract failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let output = Output {
        title: doc.title.clone(),
        author: doc.author.clone(),
        date: doc.date.map(|d| d.to_rfc3339()),
        content: doc.content(),
        warnings: doc.warnings.iter().map(ToString::to_string).collect(),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
    ExitCode::SUCCESS
}
