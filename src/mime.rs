use std::path::Path;

/// Determines the MIME type of a file on the basis of its extension.
///
/// Unknown and missing extensions resolve to `application/octet-stream`.
/// Never fails.
pub fn mime_for_path(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path.as_ref())
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}
