//! Simple inspector for NEST container files.

use nest::read_container_from_path;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.nest".to_string());

    println!("Reading: {}", path);

    let container = read_container_from_path(&path).expect("Failed to decode");
    let header = &container.header;

    println!("\n=== Header ===");
    println!("Version: {}", header.version);
    println!("Main image: {}x{}", header.width, header.height);
    println!("Tile size: {}", header.tile_size);
    println!("Nested images: {}", header.nested_count);

    let tiles = nest::codec::tile_origins(header.width, header.height, header.tile_size).count();
    println!("Tiles: {}", tiles);

    // How many pixels actually use each nested image.
    let mut uses = vec![0u64; container.nested_images.len() + 1];
    let mut dangling = 0u64;
    for pixel in container.main_image.pixels() {
        match uses.get_mut(pixel.nested_index as usize) {
            Some(count) => *count += 1,
            None => dangling += 1,
        }
    }

    println!("\n=== Links ===");
    println!("Unlinked pixels: {}", uses[0]);
    for (i, count) in uses.iter().enumerate().skip(1) {
        println!("  -> nested image {}: {} pixels", i - 1, count);
    }
    if dangling > 0 {
        println!("  dangling links (out of range): {}", dangling);
    }

    println!("\n=== Nested Images ===");
    for (i, img) in container.nested_images.iter().enumerate() {
        println!("[{}] {}x{} ({} bytes)", i, img.width, img.height, img.data.len());
    }
}
