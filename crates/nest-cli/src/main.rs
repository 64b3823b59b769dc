//! Thin command-line wrapper around the NEST codec.
//!
//! ```text
//! nest-cli gen <path> [seed [width height tile-size nested-count]]
//! nest-cli info <path>
//! nest-cli roundtrip <path>
//! ```
//!
//! The core codec never logs; this wrapper prints the contextualized
//! error chain to stderr and exits non-zero on any failure.

use std::env;
use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;

use nest::{read_container, read_container_from_path, write_container, write_container_to_path};
use nest_sample::sample_container;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    match args {
        [cmd, rest @ ..] if cmd == "gen" => generate(rest),
        [cmd, path] if cmd == "info" => info(path),
        [cmd, path] if cmd == "roundtrip" => roundtrip(path),
        _ => {
            eprintln!("usage: nest-cli gen <path> [seed [width height tile-size nested-count]]");
            eprintln!("       nest-cli info <path>");
            eprintln!("       nest-cli roundtrip <path>");
            Err("invalid arguments".into())
        }
    }
}

/// Writes a seeded sample container. Defaults match the format's original
/// demo data: 1024x768, 256-pixel tiles, 5 nested images.
fn generate(args: &[String]) -> Result<(), Box<dyn Error>> {
    let path = args.first().ok_or("gen: missing output path")?;
    let seed: u64 = parse_or(args.get(1), 42)?;
    let width: u32 = parse_or(args.get(2), 1024)?;
    let height: u32 = parse_or(args.get(3), 768)?;
    let tile_size: u16 = parse_or(args.get(4), 256)?;
    let nested_count: u32 = parse_or(args.get(5), 5)?;

    let container = sample_container(seed, width, height, tile_size, nested_count);
    write_container_to_path(path, &container)?;

    println!(
        "wrote {path}: {width}x{height}, tile size {tile_size}, {nested_count} nested images (seed {seed})"
    );
    Ok(())
}

fn info(path: &str) -> Result<(), Box<dyn Error>> {
    let container = read_container_from_path(path)?;
    let header = &container.header;

    println!("{path}: NEST version {}", header.version);
    println!(
        "  main image: {}x{} pixels, tile size {}",
        header.width, header.height, header.tile_size
    );
    let linked = container
        .main_image
        .pixels()
        .iter()
        .filter(|px| px.has_link())
        .count();
    println!(
        "  linked pixels: {linked} of {}",
        container.main_image.pixel_count()
    );
    println!("  nested images: {}", header.nested_count);
    for (i, img) in container.nested_images.iter().enumerate() {
        println!("    [{i}] {}x{} ({} bytes)", img.width, img.height, img.data.len());
    }
    Ok(())
}

/// Decodes a file, re-encodes it, and byte-compares the result.
fn roundtrip(path: &str) -> Result<(), Box<dyn Error>> {
    let original = std::fs::read(path)?;
    let container = read_container(original.as_slice())?;

    let mut reencoded = Vec::with_capacity(original.len());
    write_container(&mut reencoded, &container)?;

    if reencoded == original {
        println!("{path}: {} bytes, round-trips byte-for-byte", original.len());
        Ok(())
    } else {
        Err(format!(
            "{path}: re-encoded stream ({} bytes) differs from original ({} bytes)",
            reencoded.len(),
            original.len()
        )
        .into())
    }
}

fn parse_or<T>(arg: Option<&String>, default: T) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
{
    match arg {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}
