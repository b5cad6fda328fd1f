use crate::core::encoder::build_declaration;
use crate::core::scanner::select_images;
use crate::core::{ImageFile, ObjcDeclaration, Pipeline, Storage};
use crate::utils::error::{EmbedError, Result};
use std::io::Write;

/// Reads images from `S` and writes one declaration line per image to `W`.
pub struct ObjcPipeline<S: Storage, W: Write> {
    storage: S,
    out: W,
}

impl<S: Storage, W: Write> ObjcPipeline<S, W> {
    pub fn new(storage: S, out: W) -> Self {
        Self { storage, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<S: Storage, W: Write> Pipeline for ObjcPipeline<S, W> {
    fn scan(&self) -> Result<Vec<String>> {
        let entries = self.storage.list_entries()?;
        tracing::debug!("Directory has {} entries", entries.len());
        select_images(entries)
    }

    fn encode(&self, file_name: &str) -> Result<ObjcDeclaration> {
        let bytes = self.storage.read_file(file_name)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), file_name);

        let image = ImageFile {
            file_name: file_name.to_string(),
            bytes,
        };
        let declaration = build_declaration(&image);
        tracing::debug!(
            "Encoded {} as {} ({} base64 chars)",
            file_name,
            declaration.identifier,
            declaration.encoded.len()
        );
        Ok(declaration)
    }

    fn emit(&mut self, declaration: &ObjcDeclaration) -> Result<()> {
        writeln!(self.out, "{}", declaration).map_err(EmbedError::Output)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().map_err(EmbedError::Output)
    }
}
