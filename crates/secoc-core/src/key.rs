//! 32-digit hex key validation and installed-key classification

/// Length of a SecOC key in hex digits.
pub const KEY_LEN: usize = 32;

/// Returns true for the keypad's fixed alphabet: lowercase hex digits.
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_digit() || ('a'..='f').contains(&c)
}

/// Returns true if `s` is exactly 32 lowercase hex digits.
pub fn is_valid_key(s: &str) -> bool {
    s.len() == KEY_LEN && s.chars().all(is_key_char)
}

/// Classification of the authoritative key file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledKey {
    /// File absent or unreadable.
    None,

    /// Exactly 32 lowercase hex digits after newline stripping.
    Valid(String),

    /// File exists but holds binary or malformed content. Carries the text
    /// shown in parentheses in the UI.
    Invalid(String),
}

impl InstalledKey {
    /// Classify raw file bytes.
    ///
    /// Any control byte other than `\n`/`\r` marks the content as binary.
    /// Otherwise all `\n` bytes are stripped and the remainder must match
    /// exactly 32 lowercase hex digits. A lone `\r` survives stripping and
    /// renders the content invalid.
    pub fn classify(bytes: &[u8]) -> Self {
        let binary = bytes
            .iter()
            .any(|&b| b.is_ascii_control() && b != b'\n' && b != b'\r');
        if binary {
            return Self::Invalid("binary file".to_string());
        }

        let content: String = String::from_utf8_lossy(bytes)
            .chars()
            .filter(|&c| c != '\n')
            .collect();
        if is_valid_key(&content) {
            Self::Valid(content)
        } else {
            Self::Invalid(content)
        }
    }

    /// Display label for the installed-key line.
    pub fn label(&self) -> String {
        match self {
            Self::None => "Installed: None".to_string(),
            Self::Valid(key) => format!("Installed: {}", key),
            Self::Invalid(text) => format!("Installed: Invalid ({})", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "deadbeefdeadbeefdeadbeefdeadbeef";

    #[test]
    fn test_valid_key() {
        assert!(is_valid_key(KEY));
        assert!(is_valid_key("0123456789abcdef0123456789abcdef"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key(&KEY[..31]));
        assert!(!is_valid_key(&format!("{}a", KEY)));
    }

    #[test]
    fn test_rejects_wrong_charset() {
        assert!(!is_valid_key("DEADBEEFDEADBEEFDEADBEEFDEADBEEF"));
        assert!(!is_valid_key("deadbeefdeadbeefdeadbeefdeadbeeg"));
        assert!(!is_valid_key("deadbeef deadbeefdeadbeefdeadbee"));
    }

    #[test]
    fn test_classify_strips_newlines() {
        assert_eq!(
            InstalledKey::classify(format!("{}\n", KEY).as_bytes()),
            InstalledKey::Valid(KEY.to_string())
        );
        // Every newline goes, including interior and repeated trailing ones
        assert_eq!(
            InstalledKey::classify(format!("{}\n{}\n\n", &KEY[..16], &KEY[16..]).as_bytes()),
            InstalledKey::Valid(KEY.to_string())
        );
    }

    #[test]
    fn test_classify_malformed_text() {
        assert_eq!(
            InstalledKey::classify(b"not-hex!!"),
            InstalledKey::Invalid("not-hex!!".to_string())
        );
        assert_eq!(
            InstalledKey::classify(b""),
            InstalledKey::Invalid(String::new())
        );
    }

    #[test]
    fn test_classify_binary() {
        let mut bytes = KEY.as_bytes().to_vec();
        bytes[5] = 0x00;
        assert_eq!(
            InstalledKey::classify(&bytes),
            InstalledKey::Invalid("binary file".to_string())
        );
    }

    #[test]
    fn test_classify_carriage_return_not_binary_but_invalid() {
        // \r is tolerated by the binary scan but never stripped, so the
        // remainder fails the 32-hex match
        assert_eq!(
            InstalledKey::classify(format!("{}\r\n", KEY).as_bytes()),
            InstalledKey::Invalid(format!("{}\r", KEY))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(InstalledKey::None.label(), "Installed: None");
        assert_eq!(
            InstalledKey::Valid(KEY.to_string()).label(),
            format!("Installed: {}", KEY)
        );
        assert_eq!(
            InstalledKey::Invalid("binary file".to_string()).label(),
            "Installed: Invalid (binary file)"
        );
    }
}
