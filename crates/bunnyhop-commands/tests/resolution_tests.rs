use bunnyhop_commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    fn create_test_table(with_default: bool) -> CommandTable {
        let mut builder = CommandTable::builder();
        builder
            .register(CommandConfig::query_param("g", "https://x.com/search", ["q"]))
            .unwrap();
        builder
            .register(CommandConfig::redirect("some command", "https://x.com/some"))
            .unwrap();
        builder
            .register(
                CommandConfig::path_template("p", "https://x.com/{{a}}/{{b}}")
                    .with_option("a", "1", "one"),
            )
            .unwrap();
        if with_default {
            builder
                .register(CommandConfig::query_param(
                    DEFAULT_COMMAND_KEY,
                    "https://fallback.example/",
                    ["q"],
                ))
                .unwrap();
        }
        builder.build()
    }

    fn destination(table: &CommandTable, query: &str) -> Option<String> {
        let tokens = tokenize(query, table);
        let resolved = resolve(&tokens, table)?;
        Some(synthesize(resolved.config, &resolved.args).unwrap().to_string())
    }

    #[test]
    fn test_exact_match_keeps_remaining_tokens() {
        let table = create_test_table(true);
        for args in [vec![], vec!["a"], vec!["a", "b", "c"]] {
            let mut query = vec!["g"];
            query.extend(args.iter().copied());
            let resolved = resolve(&tokens(&query), &table).unwrap();
            assert_eq!(resolved.config.key, "g");
            assert_eq!(resolved.args, tokens(&args));
        }
    }

    #[test]
    fn test_not_found_without_default() {
        let table = create_test_table(false);
        assert!(resolve(&tokens(&["nope", "x"]), &table).is_none());
        assert!(destination(&table, "nope x").is_none());
    }

    #[test]
    fn test_default_receives_full_token_list() {
        let table = create_test_table(true);
        let resolved = resolve(&tokens(&["nope", "x"]), &table).unwrap();
        assert_eq!(resolved.config.key, DEFAULT_COMMAND_KEY);
        assert_eq!(resolved.args, tokens(&["nope", "x"]));
        assert_eq!(
            destination(&table, "nope x").unwrap(),
            "https://fallback.example/?q=nope+x"
        );
    }

    #[test]
    fn test_multi_word_command() {
        let table = create_test_table(true);
        assert_eq!(
            tokenize("some command extra", &table),
            tokens(&["some command", "extra"])
        );
        assert_eq!(
            destination(&table, "some command extra").unwrap(),
            "https://x.com/some"
        );
    }

    #[test]
    fn test_merge_stops_at_first_failed_join() {
        let table = create_test_table(true);
        assert_eq!(
            tokenize("g some command", &table),
            tokens(&["g", "some", "command"])
        );
    }

    #[test]
    fn test_query_overflow_merge() {
        let table = create_test_table(true);
        let url = destination(&table, "g hello world").unwrap();
        assert_eq!(url, "https://x.com/search?q=hello+world");
    }

    #[test]
    fn test_query_nested_url_extraction() {
        let table = create_test_table(true);
        assert_eq!(
            destination(&table, "g https://x.com/search?term=cats").unwrap(),
            "https://x.com/search?q=cats"
        );
        assert_eq!(
            destination(&table, "g not a url").unwrap(),
            "https://x.com/search?q=not+a+url"
        );
    }

    #[test]
    fn test_path_substitution_and_truncation() {
        let table = create_test_table(true);
        assert_eq!(destination(&table, "p 2 3").unwrap(), "https://x.com/2/3");
        assert_eq!(destination(&table, "p 2").unwrap(), "https://x.com/2/");
        assert_eq!(destination(&table, "p 1 3").unwrap(), "https://x.com/one/3");
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let table = create_test_table(true);
        for query in ["g a b", "p 1 2", "some command", "nope"] {
            assert_eq!(destination(&table, query), destination(&table, query));
        }
    }
}
