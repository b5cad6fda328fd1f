use std::fmt;

/// A selected `.png` entry together with its raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One generated class method. `Display` renders the exact output line
/// (without the trailing newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjcDeclaration {
    pub identifier: String,
    pub encoded: String,
}

impl fmt::Display for ObjcDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+ (NSString *){} {{ return @\"{}\"; }}",
            self.identifier, self.encoded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_line_format() {
        let declaration = ObjcDeclaration {
            identifier: "icon$2x".to_string(),
            encoded: "AQI=".to_string(),
        };

        assert_eq!(
            declaration.to_string(),
            r#"+ (NSString *)icon$2x { return @"AQI="; }"#
        );
    }

    #[test]
    fn test_empty_payload_keeps_quotes() {
        let declaration = ObjcDeclaration {
            identifier: "SMTabBar".to_string(),
            encoded: String::new(),
        };

        assert_eq!(
            declaration.to_string(),
            r#"+ (NSString *)SMTabBar { return @""; }"#
        );
    }
}
