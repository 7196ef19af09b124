//! Resolve page paths without touching the network

use crate::route::file_location;
use crate::Tilview;

/// Print the markdown file location for each path, one per line.
///
/// Paths are resolved exactly as given, so this doubles as a way to see
/// what a malformed path would ask the server for.
pub fn run(tilview: &Tilview, paths: &[String]) {
    for path in paths {
        let location = file_location(&tilview.config.content_dir, path);
        println!("{} -> {}", path, location);
    }
}
