use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EmbedEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EmbedEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Scans once, then reads, encodes and emits each image before touching
    /// the next one. The first error aborts the run; lines already emitted
    /// stay written. Returns the number of declarations emitted.
    pub fn run(&mut self) -> Result<usize> {
        tracing::debug!("Scanning for images");
        let files = self.pipeline.scan()?;
        tracing::debug!("Found {} image(s)", files.len());

        for file_name in &files {
            tracing::debug!("Processing {}", file_name);
            let declaration = self.pipeline.encode(file_name)?;
            self.pipeline.emit(&declaration)?;
        }

        self.pipeline.finish()?;
        Ok(files.len())
    }

    pub fn into_inner(self) -> P {
        self.pipeline
    }
}
