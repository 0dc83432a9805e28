use asset_tokenizer::{CommentMode, Tokenizer};

fn tokens(text: &str, mode: CommentMode) -> Vec<String> {
    let mut tz = Tokenizer::new(mode);
    tz.open_string(text, 0, 0, "comments").expect("string input always loads");
    tz.tokens().map(|token| token.text).collect()
}

#[cfg(test)]
mod comment_tests {
    use super::*;

    #[test]
    fn test_double_slash_comments() {
        // Test // treats the rest of the line as a comment
        let text = r#"
            // Header comment
            sprite = "PLAYA1"
            // Another comment
            frames = 8   // Inline comment // with more slashes
        "#;

        assert_eq!(
            tokens(text, CommentMode::default()),
            vec!["sprite", "=", "PLAYA1", "frames", "=", "8"]
        );
    }

    #[test]
    fn test_double_slash_in_quoted_string() {
        // Test // inside quoted strings is literal text
        let text = r#"url = "http://example.com/path" path = "textures//wall""#;

        assert_eq!(
            tokens(text, CommentMode::default()),
            vec!["url", "=", "http://example.com/path", "path", "=", "textures//wall"]
        );
    }

    #[test]
    fn test_block_comments() {
        // Test block comments spanning lines and inline
        let text = r#"
            /*
             * Multi-line comment
             * with several lines
             */
            a /* inline */ = /* more */ 1
        "#;

        assert_eq!(tokens(text, CommentMode::default()), vec!["a", "=", "1"]);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        // The first */ closes the comment
        let text = "/* outer /* inner */ after */";
        assert_eq!(
            tokens(text, CommentMode::default()),
            vec!["after", "*", "/"]
        );
    }

    #[test]
    fn test_block_comment_closed_by_opener_slash() {
        // In `/*/` the star and the following slash already close the comment
        assert_eq!(
            tokens("/*/ x */y", CommentMode::default()),
            vec!["x", "*", "/", "y"]
        );
        assert_eq!(tokens("/*/y", CommentMode::default()), vec!["y"]);
    }

    #[test]
    fn test_comments_with_different_line_endings() {
        // Test line comments work with LF, CRLF and bare CR
        for text in [
            "key // comment\nvalue",
            "key // comment\r\nvalue",
            "key // comment\rvalue",
        ] {
            assert_eq!(tokens(text, CommentMode::default()), vec!["key", "value"]);
        }
    }

    #[test]
    fn test_mixed_comment_styles() {
        // Test every rule together
        let text = r#"
            ## Hash comment
            key1 = "value1"  ; semicolon comment
            // C style comment
            key2 = "value2"  /* block */ ## trailing hash
        "#;

        let mut specials = Tokenizer::new(CommentMode::all());
        specials.set_special("=");
        specials
            .open_string(text, 0, 0, "mixed")
            .expect("string input always loads");
        let result: Vec<String> = specials.tokens().map(|token| token.text).collect();

        assert_eq!(result, vec!["key1", "=", "value1", "key2", "=", "value2"]);
    }

    #[test]
    fn test_single_hash_is_not_a_comment() {
        let mode = CommentMode::none().with_hash_comments(true);
        assert_eq!(
            tokens("#define X ## gone", mode),
            vec!["#define", "X"]
        );
    }

    #[test]
    fn test_disabled_rules_leave_text_alone() {
        let text = "## a ; b";
        assert_eq!(tokens(text, CommentMode::default()), vec!["##", "a", ";", "b"]);
        assert_eq!(
            tokens(text, CommentMode::none().with_semicolon_comments(true)),
            vec!["##", "a"]
        );
    }

    #[test]
    fn test_double_slash_dollar_escape() {
        // `//$` starts ordinary text, any other `//` is a comment
        let mut tz = Tokenizer::new(CommentMode::default());
        tz.set_special("={}");
        tz.open_string("//$GAMEINFO\nname = x // $not kept\n", 0, 0, "escape")
            .unwrap();
        let result: Vec<String> = tz.tokens().map(|token| token.text).collect();

        assert_eq!(result, vec!["//$GAMEINFO", "name", "=", "x"]);
    }

    #[test]
    fn test_comment_edge_cases() {
        // Test empty comments and comments at end of input
        let text = "a //\nb //\n/**/c ##\n//";
        let mode = CommentMode::default().with_hash_comments(true);
        assert_eq!(tokens(text, mode), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_comment_only_input() {
        for text in ["// only", "/* only */", "/* unterminated", "//\n//\n"] {
            assert!(tokens(text, CommentMode::default()).is_empty());
        }
    }
}
