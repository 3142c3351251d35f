//! Command-line entry point: reconstruct the secret from a share
//! document and print it.

use std::env;
use std::process::ExitCode;

use arcanum_shares::ShareDocument;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: arcanum <document.json>");
        return ExitCode::FAILURE;
    };

    match ShareDocument::from_path(&path).and_then(|document| document.secret()) {
        Ok(secret) => {
            println!("{secret}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("arcanum: {path}: {error}");
            ExitCode::FAILURE
        }
    }
}
