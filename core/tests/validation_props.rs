//! Property-based tests for input validation.
//!
//! The character-count limits must hold for arbitrary content, including
//! multi-byte text, since the limits describe user-visible characters.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use mocktodo_core::{CreateTodoInput, UpdateTodoInput};
use proptest::prelude::*;

proptest! {
    #[test]
    fn titles_within_limit_pass(title in "[0-9A-Za-zあ-ん]{1,100}") {
        prop_assert!(CreateTodoInput::new(title).validate().is_ok());
    }

    #[test]
    fn titles_over_limit_fail(title in "[0-9A-Za-zあ-ん]{101,150}") {
        let error = CreateTodoInput::new(title).validate().unwrap_err();
        prop_assert!(error.message_for("title").is_some());
    }

    #[test]
    fn whitespace_only_titles_fail(title in "[ \t　]{0,20}") {
        let error = CreateTodoInput::new(title).validate().unwrap_err();
        prop_assert!(error.message_for("title").is_some());
    }

    #[test]
    fn descriptions_within_limit_pass(description in "[0-9A-Za-zあ-ん]{0,500}") {
        let input = CreateTodoInput::new("ok").with_description(description);
        prop_assert!(input.validate().is_ok());
    }

    #[test]
    fn descriptions_over_limit_fail(description in "[0-9A-Za-zあ-ん]{501,560}") {
        let error = CreateTodoInput::new("ok")
            .with_description(description)
            .validate()
            .unwrap_err();
        prop_assert!(error.message_for("description").is_some());
    }

    #[test]
    fn update_patch_mirrors_create_rules(
        title in "[0-9A-Za-zあ-ん]{1,100}",
        completed in any::<bool>(),
    ) {
        let patch = UpdateTodoInput::new()
            .with_title(title)
            .with_completed(completed);
        prop_assert!(patch.validate().is_ok());
    }
}
