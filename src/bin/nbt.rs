//! `nbt` — a small driver around the [`nbt`] library crate.
//!
//! Default mode: read NBT bytes from stdin (optionally gzip/zlib
//! wrapped), decode them big-endian, and print the textual (JSON-shaped)
//! form to stdout.
//!
//! `nbt serialize [gzip|zlib]`: read textual JSON from stdin, decode it,
//! re-encode as big-endian NBT bytes, optionally wrap in a compression
//! envelope, and write the bytes to stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use nbt::{deserialize, envelope, serialize, text, Endian};

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .map_err(|e| format!("reading stdin: {}", e))?;

    match args.get(0).map(String::as_str) {
        Some("serialize") => {
            let json = String::from_utf8(input).map_err(|e| format!("stdin is not UTF-8: {}", e))?;
            let (name, tag) = text::decode_str(&json).map_err(|e| e.to_string())?;
            let bytes = serialize(&name, &tag, Endian::Big);
            let bytes = match args.get(1).map(String::as_str) {
                Some("gzip") => envelope::wrap_gzip(&bytes).map_err(|e| e.to_string())?,
                Some("zlib") => envelope::wrap_zlib(&bytes).map_err(|e| e.to_string())?,
                Some(other) => return Err(format!("unknown envelope '{}'", other)),
                None => bytes,
            };
            io::stdout()
                .write_all(&bytes)
                .map_err(|e| format!("writing stdout: {}", e))?;
        }
        Some(other) => return Err(format!("unknown subcommand '{}'", other)),
        None => {
            let stripped = envelope::strip(&input).map_err(|e| e.to_string())?;
            let (name, tag) = deserialize(&stripped, Endian::Big).map_err(|e| e.to_string())?;
            let json = text::encode_string(&name, &tag).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            log::error!("{}", msg);
            eprintln!("nbt: {}", msg);
            ExitCode::FAILURE
        }
    }
}
