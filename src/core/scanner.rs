use crate::config::IMAGE_SUFFIX;
use crate::utils::error::{EmbedError, Result};
use std::ffi::{OsStr, OsString};

pub fn is_image_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(IMAGE_SUFFIX.as_bytes())
}

/// Keeps the entries ending in `.png` and returns them sorted by name.
///
/// Directory listing order is whatever the OS yields, so the result is sorted
/// to make repeated runs print identical output. A matching name that is not
/// valid UTF-8 cannot become an identifier and fails the whole scan.
pub fn select_images(entries: Vec<OsString>) -> Result<Vec<String>> {
    let mut names = entries
        .into_iter()
        .filter(|name| is_image_name(name))
        .map(|name| {
            name.into_string().map_err(|raw| EmbedError::InvalidFileName {
                name: raw.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<String>>>()?;

    names.sort();
    Ok(names)
}
