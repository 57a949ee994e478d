//! Level export
//!
//! Handles writing finished levels for downstream consumers.

pub mod export;

pub use export::{read_json, to_json, write_json, LevelExport, EXPORT_VERSION, TILE_SIZE};
