//! # Voxel Carve Demo Entry Point
//!
//! Carves a wall through a chunk and splits it, logging what happens.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- demos/random_chunk.json
//! ```
//!
//! Without an argument the default 16x16x16 solid chunk is used.

use std::path::PathBuf;

fn main() {
    voxel_carve::init_logging();
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    if let Err(err) = voxel_carve::run(config_path.as_deref()) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
