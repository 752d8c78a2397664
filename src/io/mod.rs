pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::boundmap_error::BoundmapError;
use crate::core::ServiceBoundary;
use std::fs;
use std::path::Path;

/// Parse a JSON array of service boundaries. `origin` names the source in
/// error messages ("request body", a file path).
pub fn parse_boundaries(bytes: &[u8], origin: &str) -> Result<Vec<ServiceBoundary>, BoundmapError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(BoundmapError::empty_input(origin));
    }
    serde_json::from_slice(bytes).map_err(|e| BoundmapError::from_json_error(&e, origin))
}

pub fn read_boundaries(path: &Path) -> Result<Vec<ServiceBoundary>, BoundmapError> {
    let bytes =
        fs::read(path).map_err(|e| BoundmapError::from_io_error(e, Some(path.to_path_buf())))?;
    parse_boundaries(&bytes, &path.display().to_string())
}
