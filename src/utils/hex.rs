use crate::error::Result;

/// Encodes the bytes of `input` as `0x`-prefixed lowercase hex.
pub fn string_to_hex(input: &str) -> String {
    bytes_to_hex(input.as_bytes())
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes hex with or without a `0x` prefix.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_hex() {
        assert_eq!(string_to_hex("0x3d"), "0x30783364");
        assert_eq!(string_to_hex(""), "0x");
    }

    #[test]
    fn test_hex_is_lowercase() {
        let encoded = string_to_hex("0x3DE7086CE750513EF79D14EACBD1282C4E4B0CEA");
        assert!(encoded.starts_with("0x"));
        assert!(!encoded[2..].chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hex_decodes_to_original_bytes() {
        let address = "0x3de7086ce750513ef79d14eacbd1282c4e4b0cea";
        let decoded = hex_to_bytes(&string_to_hex(address)).unwrap();
        assert_eq!(decoded, address.as_bytes());
    }

    #[test]
    fn test_hex_to_bytes_without_prefix() {
        assert_eq!(hex_to_bytes("3d").unwrap(), vec![0x3d]);
        assert!(hex_to_bytes("0xzz").is_err());
    }
}
