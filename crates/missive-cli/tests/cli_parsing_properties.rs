//! Property-based tests for CLI argument parsing

use clap::Parser;
use missive_cli::router::{parse_key_val, Cli, Commands};
use proptest::prelude::*;

proptest! {
    /// Property: any name=value pair with a non-blank name parses back into its parts
    #[test]
    fn prop_key_val_splits_on_first_equals(
        name in "[a-zA-Z][a-zA-Z0-9_]{0,10}",
        value in "[ a-zA-Z0-9=.,!-]{0,20}",
    ) {
        let (parsed_name, parsed_value) = parse_key_val(&format!("{}={}", name, value)).unwrap();
        prop_assert_eq!(parsed_name, name);
        prop_assert_eq!(parsed_value, value);
    }

    /// Property: text without '=' is always rejected
    #[test]
    fn prop_key_val_requires_equals(text in "[a-zA-Z0-9 ]{0,20}") {
        prop_assert!(parse_key_val(&text).is_err());
    }

    /// Property: every --set flag reaches the generate command in order
    #[test]
    fn prop_generate_collects_every_set_flag(
        pairs in prop::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9]{1,8}"), 0..5),
    ) {
        let mut args = vec!["missive".to_string(), "generate".to_string(), "Diwali wishes".to_string()];
        for (name, value) in &pairs {
            args.push("--set".to_string());
            args.push(format!("{}={}", name, value));
        }

        let cli = Cli::try_parse_from(&args).unwrap();
        match cli.command {
            Some(Commands::Generate { set, .. }) => prop_assert_eq!(set, pairs),
            other => prop_assert!(false, "unexpected command: {:?}", other),
        }
    }
}
