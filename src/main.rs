//! # Voxel Mesher Entry Point
//!
//! Generates a world from the configured dimensions and logs mesh statistics.
//!
//! ## Usage
//!
//! ```bash
//! echo '{ "world_size": 4, "chunk_size": 16 }' > world.json
//! VOXEL_WORLD_CONFIG=world.json RUST_LOG=info cargo run --release
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match voxel_mesher::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
