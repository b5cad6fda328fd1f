use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Failed to scan directory {}: {source}", .path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {file}: {source}")]
    FileRead {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("File name is not valid UTF-8: {name}")]
    InvalidFileName { name: String },

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl EmbedError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EmbedError::DirectoryScan { path, .. } => {
                format!("Could not list the images in {}", path.display())
            }
            EmbedError::FileRead { file, .. } => format!("Could not read image '{}'", file),
            EmbedError::InvalidFileName { name } => {
                format!("'{}' cannot be turned into an Objective-C method name", name)
            }
            EmbedError::Output(_) => "Could not write the generated declarations".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EmbedError::DirectoryScan { .. } => {
                "Run the tool from a directory you are allowed to list"
            }
            EmbedError::FileRead { .. } => {
                "Check that every .png entry is a readable regular file"
            }
            EmbedError::InvalidFileName { .. } => "Rename the file using UTF-8 characters only",
            EmbedError::Output(_) => "Check that standard output is still open (e.g. the pipe reader)",
        }
    }
}

pub type Result<T> = std::result::Result<T, EmbedError>;
