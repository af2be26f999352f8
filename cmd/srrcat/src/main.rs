//! srrcat - concatenate files to stdout
//!
//! Usage: `srrcat <path>...`
//!
//! Each file's bytes are written to stdout in order. A path that cannot be
//! read gets a catalog message on stderr and the exit status becomes 1; the
//! remaining paths are still printed.
//!
//! # Environment Variables
//!
//! - `SRR_LOG_LEVEL=debug` - Show why each failing path failed

use sierra::fsys::open_file;
use sierra::{kdebug, render, Res, Sink, Sys};

// SRR_LOG_LEVEL=debug cargo run -p sierra-srrcat -- Cargo.toml missing.txt
fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        Sys::write_str(Sink::ConsoleErr, "usage: srrcat <path>...\n");
        std::process::exit(2);
    }

    let mut failed = 0usize;
    for path in &paths {
        let bytes = cat(path);
        if bytes.ok() {
            Sys::write(Sink::ConsoleOut, bytes.value());
        } else {
            let line = format!("srrcat: {}: {}\n", path, render(bytes.code()));
            Sys::write_str(Sink::ConsoleErr, &line);
            failed += 1;
        }
    }

    kdebug!("srrcat: {} of {} paths failed", failed, paths.len());
    if failed > 0 {
        std::process::exit(1);
    }
}

fn cat(path: &str) -> Res<Vec<u8>> {
    let file = open_file(path);
    if file.failed() {
        return file.code().into();
    }

    let reader = file.value().read();
    if reader.failed() {
        return reader.code().into();
    }

    let mut reader = reader.into_value();
    reader.dump_bytes()
}
