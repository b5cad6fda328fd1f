use crate::domain::model::ObjcDeclaration;
use crate::utils::error::Result;
use std::ffi::OsString;

/// Source of image files. Entry names are returned raw; filtering happens in
/// the scanner.
pub trait Storage {
    fn list_entries(&self) -> Result<Vec<OsString>>;
    fn read_file(&self, file_name: &str) -> Result<Vec<u8>>;
}

pub trait Pipeline {
    /// Names of the files to process, in processing order.
    fn scan(&self) -> Result<Vec<String>>;
    fn encode(&self, file_name: &str) -> Result<ObjcDeclaration>;
    fn emit(&mut self, declaration: &ObjcDeclaration) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}
