use super::errors::CharacterError;

/// Checks a character name, returning the trimmed name when valid.
pub fn validate_name(name: &str) -> Result<String, CharacterError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CharacterError::InvalidName(
            "name cannot be empty".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert_eq!(validate_name("Rogan").unwrap(), "Rogan");
        assert!(validate_name("Test 123").is_ok());
        assert!(validate_name("D'Artagnan").is_ok());
    }

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Rogan \n").unwrap(), "Rogan");
    }

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_name_accepts_any_text() {
        for name in [
            "Hero!",
            "Rogan.",
            "R2/D2",
            "<script>",
            "Sir Rogan of the Northern Reaches",
        ] {
            assert_eq!(validate_name(name).unwrap(), name);
        }
        assert_eq!(validate_name(&"a".repeat(200)).unwrap().len(), 200);
    }
}
