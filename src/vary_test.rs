use super::*;

#[test]
fn should_set_tokens_when_no_existing_value() {
    // Arrange & Act
    let merged = append(None, "Origin");

    // Assert
    assert_eq!(merged.as_deref(), Some("Origin"));
}

#[test]
fn should_append_new_token_after_existing_entries() {
    // Arrange & Act
    let merged = append(Some("Accept-Encoding"), "Origin");

    // Assert
    assert_eq!(merged.as_deref(), Some("Accept-Encoding, Origin"));
}

#[test]
fn should_keep_existing_value_when_token_already_present_in_other_case() {
    // Arrange & Act
    let merged = append(Some("origin"), "Origin");

    // Assert
    assert_eq!(merged.as_deref(), Some("origin"));
}

#[test]
fn should_be_idempotent_when_merging_the_same_token_twice() {
    // Arrange
    let once = append(None, "Origin");

    // Act
    let twice = append(once.as_deref(), "Origin");

    // Assert
    assert_eq!(once, twice);
}

#[test]
fn should_deduplicate_tokens_within_the_same_input() {
    // Arrange & Act
    let merged = append(None, "Origin, ORIGIN, Accept");

    // Assert
    assert_eq!(merged.as_deref(), Some("Origin, Accept"));
}

#[test]
fn should_return_wildcard_when_existing_value_is_wildcard() {
    // Arrange & Act
    let merged = append(Some("*"), "Origin");

    // Assert
    assert_eq!(merged.as_deref(), Some("*"));
}

#[test]
fn should_return_wildcard_when_tokens_contain_wildcard() {
    // Arrange & Act
    let merged = append(Some("Origin"), "Accept, *");

    // Assert
    assert_eq!(merged.as_deref(), Some("*"));
}

#[test]
fn should_drop_invalid_field_names() {
    // Arrange & Act
    let merged = append(None, "Origin, bad:field");

    // Assert
    assert_eq!(merged.as_deref(), Some("Origin"));
}

#[test]
fn should_return_none_when_everything_is_blank() {
    // Arrange & Act
    let merged = append(Some("   "), " , ");

    // Assert
    assert!(merged.is_none());
}

#[test]
fn should_preserve_existing_value_when_tokens_are_blank() {
    // Arrange & Act
    let merged = append(Some("Origin"), "   ");

    // Assert
    assert_eq!(merged.as_deref(), Some("Origin"));
}
