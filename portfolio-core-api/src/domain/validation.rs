use heapless::String as HeaplessString;
use validator::ValidationError;

/// Rejects empty and whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// First letter of the first two words of a name, uppercased.
pub fn initials(name: &str) -> HeaplessString<8> {
    let mut out = HeaplessString::new();
    for c in name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
    {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Rust").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace byron").as_str(), "AL");
        assert_eq!(initials("Ángel").as_str(), "Á");
        assert_eq!(initials("").as_str(), "");
    }
}
