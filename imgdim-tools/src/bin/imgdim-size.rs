use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use imgdim::{Error, ImageType, Parser};
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    let paths = std::env::args_os().skip(1).collect::<Vec<_>>();

    if paths.is_empty() {
        eprintln!("Usage: imgdim-size <path>...");
        return ExitCode::from(2);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let mut failed = false;
    for path in paths {
        if !show_size(Path::new(&path)) {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Prints one line for `path`, returns `false` if no dimensions were found
fn show_size(path: &Path) -> bool {
    match imgdim::image_size(path) {
        Ok(config) if config.image_type == ImageType::Unknown => {
            tracing::warn!("Unsupported file extension: '{}'", path.display());
            println!("{}\t{}\t–", path.display(), config.image_type);
            false
        }
        Ok(config) => {
            println!("{}\t{}\t{config}", path.display(), config.image_type);
            true
        }
        Err(err) => {
            tracing::warn!("{}: {}", path.display(), err.err());

            if matches!(err.err(), Error::BadSignature(_)) {
                if let Some(parser) = sniff(path) {
                    tracing::warn!("Content looks like {} instead", parser.form());
                }
            }

            println!("{}\t{}\t–", path.display(), err.data().image_type);
            false
        }
    }
}

fn sniff(path: &Path) -> Option<Parser> {
    let mut head = Vec::new();
    std::fs::File::open(path)
        .ok()?
        .take(8)
        .read_to_end(&mut head)
        .ok()?;

    Parser::sniff(&head)
}
