use crate::core::identifier::derive_identifier;
use crate::domain::model::{ImageFile, ObjcDeclaration};
use base64::{engine::general_purpose, Engine as _};

/// Standard alphabet with padding and no line wrapping.
pub fn encode_payload(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn build_declaration(image: &ImageFile) -> ObjcDeclaration {
    ObjcDeclaration {
        identifier: derive_identifier(&image.file_name),
        encoded: encode_payload(&image.bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(file_name: &str, bytes: &[u8]) -> ImageFile {
        ImageFile {
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_retina_icon_declaration() {
        let declaration = build_declaration(&image("icon@2x.png", &[0x01, 0x02]));

        assert_eq!(declaration.identifier, "icon$2x");
        assert_eq!(declaration.encoded, "AQI=");
        assert_eq!(
            declaration.to_string(),
            r#"+ (NSString *)icon$2x { return @"AQI="; }"#
        );
    }

    #[test]
    fn test_empty_file_declaration() {
        let declaration = build_declaration(&image("UITabBar.png", &[]));

        assert_eq!(
            declaration.to_string(),
            r#"+ (NSString *)SMTabBar { return @""; }"#
        );
    }

    #[test]
    fn test_long_payload_has_no_line_breaks() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let encoded = encode_payload(&bytes);

        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
        assert_eq!(general_purpose::STANDARD.decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_padding_variants() {
        assert_eq!(encode_payload(b"a"), "YQ==");
        assert_eq!(encode_payload(b"ab"), "YWI=");
        assert_eq!(encode_payload(b"abc"), "YWJj");
        assert_eq!(encode_payload(&[0xfb, 0xff]), "+/8=");
    }
}
