//! Edge case tests for pifc-lex

#[cfg(test)]
mod tests {
    use crate::{LexTables, LexicalError, ScanOutcome, Scanner, TokenClass};

    fn scan(source: &str) -> ScanOutcome {
        Scanner::new().scan_str(source)
    }

    fn classes(source: &str) -> Vec<TokenClass> {
        scan(source).pif.classes().collect()
    }

    fn lexeme_at(outcome: &ScanOutcome, index: usize) -> &str {
        let symbol = outcome.pif[index].attribute.unwrap();
        outcome.symbols.resolve(symbol).unwrap()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        let outcome = scan("   \n\t\t\n\n  ");
        assert!(outcome.is_success());
        assert!(outcome.pif.is_empty());
    }

    #[test]
    fn test_edge_tabs_separate_tokens() {
        assert_eq!(
            classes("number\tx\t;"),
            [TokenClass::Number, TokenClass::Identifier, TokenClass::Semicolon]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let outcome = scan(&format!("number {};", name));
        assert!(outcome.is_success());
        assert_eq!(lexeme_at(&outcome, 1), name);
    }

    #[test]
    fn test_edge_keyword_prefixes_are_identifiers() {
        assert_eq!(
            classes("iff whilex true1 mainly"),
            [TokenClass::Identifier; 4]
        );
    }

    #[test]
    fn test_edge_adjacent_operators() {
        assert_eq!(
            classes("a<=b==c!=d"),
            [
                TokenClass::Identifier,
                TokenClass::LtEq,
                TokenClass::Identifier,
                TokenClass::EqEq,
                TokenClass::Identifier,
                TokenClass::NotEq,
                TokenClass::Identifier,
            ]
        );
        assert_eq!(
            classes("a<=<b"),
            [
                TokenClass::Identifier,
                TokenClass::LtEq,
                TokenClass::Lt,
                TokenClass::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_double_slash_operator() {
        assert_eq!(
            classes("a // b / c"),
            [
                TokenClass::Identifier,
                TokenClass::SlashSlash,
                TokenClass::Identifier,
                TokenClass::Slash,
                TokenClass::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_increment_after_identifier() {
        assert_eq!(
            classes("i++;"),
            [TokenClass::Identifier, TokenClass::PlusPlus, TokenClass::Semicolon]
        );
    }

    #[test]
    fn test_edge_space_char() {
        let outcome = scan("c = ' ';");
        assert!(outcome.is_success());
        assert_eq!(outcome.pif[2].class, TokenClass::CharConstant);
        assert_eq!(lexeme_at(&outcome, 2), "' '");
    }

    #[test]
    fn test_edge_delimiter_char() {
        let outcome = scan("c = '(';");
        assert!(outcome.is_success());
        assert_eq!(lexeme_at(&outcome, 2), "'('");
    }

    #[test]
    fn test_edge_operators_inside_string() {
        let outcome = scan("s = \"a + b <= c; d\";");
        assert!(outcome.is_success());
        assert_eq!(
            outcome.pif.classes().collect::<Vec<_>>(),
            [
                TokenClass::Identifier,
                TokenClass::Eq,
                TokenClass::StringConstant,
                TokenClass::Semicolon,
            ]
        );
        assert_eq!(lexeme_at(&outcome, 2), "\"a + b <= c; d\"");
    }

    #[test]
    fn test_edge_string_keeps_spacing() {
        let outcome = scan("\"a   b\"");
        assert_eq!(lexeme_at(&outcome, 0), "\"a   b\"");
    }

    #[test]
    fn test_edge_string_across_lines() {
        let outcome = scan("s = \"first\nsecond\"; t @");
        assert_eq!(outcome.pif[2].class, TokenClass::StringConstant);
        assert_eq!(lexeme_at(&outcome, 2), "\"first\nsecond\"");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line(), 2);
        assert_eq!(outcome.errors[0].offset(), 11);
    }

    #[test]
    fn test_edge_unterminated_string_at_end() {
        let outcome = scan("x = 1;\ns = \"never closed");
        assert_eq!(outcome.errors.len(), 1);
        let error = &outcome.errors[0];
        assert!(matches!(error.error, LexicalError::UnknownToken { .. }));
        assert_eq!((error.line(), error.offset()), (2, 4));
        assert_eq!(error.text(), "\"never closed\n");
    }

    #[test]
    fn test_edge_lone_quote_at_end() {
        let outcome = scan("x \"");
        assert!(outcome.is_success());
        assert_eq!(classes("x \""), [TokenClass::Identifier]);
    }

    #[test]
    fn test_edge_sign_at_start() {
        let outcome = scan("-5");
        assert_eq!(outcome.pif.len(), 1);
        assert_eq!(lexeme_at(&outcome, 0), "-5");
    }

    #[test]
    fn test_edge_sign_before_paren() {
        assert_eq!(
            classes("x = -(y)"),
            [
                TokenClass::Identifier,
                TokenClass::Eq,
                TokenClass::Minus,
                TokenClass::LParen,
                TokenClass::Identifier,
                TokenClass::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_sign_after_constant() {
        assert_eq!(
            classes("5 - 3"),
            [
                TokenClass::NumberConstant,
                TokenClass::Minus,
                TokenClass::NumberConstant
            ]
        );
        assert_eq!(
            classes("true + 1"),
            [
                TokenClass::BoolConstant,
                TokenClass::Plus,
                TokenClass::NumberConstant
            ]
        );
    }

    #[test]
    fn test_edge_sign_after_closing_paren() {
        // `)` is not an operand, so the sign is glued to the number
        let outcome = scan("(a) -1");
        assert_eq!(outcome.pif.len(), 4);
        assert_eq!(lexeme_at(&outcome, 3), "-1");
    }

    #[test]
    fn test_edge_zero_forms() {
        assert!(scan("x = 0;").is_success());
        assert!(scan("x = 10;").is_success());

        let outcome = scan("x = +0;");
        assert!(matches!(
            outcome.errors[0].error,
            LexicalError::SignedZero { .. }
        ));

        let outcome = scan("x = 00;");
        assert!(matches!(
            outcome.errors[0].error,
            LexicalError::NonCanonicalNumber { .. }
        ));
    }

    #[test]
    fn test_edge_text_after_closing_quote_recovers() {
        let outcome = scan("s = \"ab\"c;\nt = 1;");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].text(), "\"ab\"c");
        assert_eq!(outcome.errors[0].line(), 1);
        assert_eq!(outcome.errors[0].offset(), 4);
        assert_eq!(
            outcome.pif.classes().collect::<Vec<_>>(),
            [
                TokenClass::Identifier,
                TokenClass::Eq,
                TokenClass::Semicolon,
                TokenClass::Identifier,
                TokenClass::Eq,
                TokenClass::NumberConstant,
                TokenClass::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_char_followed_by_text_recovers() {
        let outcome = scan("c = 'a'b;\nd;");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].text(), "'a'b");
        assert_eq!(outcome.pif.len(), 5);
    }

    #[test]
    fn test_edge_signed_double_zero_is_non_canonical() {
        let outcome = scan("x = -00;");
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(
            outcome.errors[0].error,
            LexicalError::NonCanonicalNumber { .. }
        ));
    }

    #[test]
    fn test_edge_sign_waits_across_lines() {
        let outcome = scan("x = -\n5;");
        assert!(outcome.is_success());
        assert_eq!(lexeme_at(&outcome, 2), "-5");
    }

    #[test]
    fn test_edge_sign_glued_to_identifier() {
        let outcome = scan("x = -y;");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].text(), "-y");
        assert_eq!(outcome.errors[0].offset(), 4);
    }

    #[test]
    fn test_edge_several_errors_one_line() {
        let outcome = scan("a # b $ c ?");
        assert_eq!(outcome.errors.len(), 3);
        assert_eq!(outcome.pif.len(), 3);
        let texts: Vec<_> = outcome.errors.iter().map(|e| e.text()).collect();
        assert_eq!(texts, ["#", "$", "?"]);
    }

    #[test]
    fn test_edge_error_line_numbers() {
        let outcome = scan("a;\nb;\n  c = 01;");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line(), 3);
        assert_eq!(outcome.errors[0].offset(), 6);
        assert_eq!(outcome.errors[0].span.width, 2);
    }

    #[test]
    fn test_edge_bucket_collision() {
        let outcome = scan("ab ba ab");
        let first = outcome.pif[0].attribute.unwrap();
        let second = outcome.pif[1].attribute.unwrap();
        assert_eq!(first.bucket(), second.bucket());
        assert_eq!((first.slot(), second.slot()), (0, 1));
        assert_eq!(outcome.pif[2].attribute, Some(first));
    }

    #[test]
    fn test_edge_unicode_identifier() {
        let outcome = scan("número = 1;");
        assert!(outcome.is_success());
        assert_eq!(lexeme_at(&outcome, 0), "número");
    }

    #[test]
    fn test_edge_custom_tables() {
        let mut tables = LexTables::standard();
        tables.insert_reserved("loop", TokenClass::While);
        tables.remove("%");

        let outcome = Scanner::with_tables(tables).scan_str("loop a%b");
        assert_eq!(outcome.pif[0].class, TokenClass::While);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].text(), "a%b");
    }

    // ==================== PROPERTY-BASED TESTS ====================

    #[test]
    fn test_property_identifier_words() {
        use proptest::prelude::*;

        let tables = LexTables::standard();
        proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,60}")| {
            let outcome = scan(&input);
            prop_assert!(outcome.is_success());
            prop_assert_eq!(outcome.pif.len(), 1);
            let expected = tables
                .lookup(&input)
                .unwrap_or(if input == "true" || input == "false" {
                    TokenClass::BoolConstant
                } else {
                    TokenClass::Identifier
                });
            prop_assert_eq!(outcome.pif[0].class, expected);
        });
    }

    #[test]
    fn test_property_canonical_numbers() {
        use proptest::prelude::*;

        proptest!(|(input in "[+-]?[1-9][0-9]{0,18}")| {
            let outcome = scan(&input);
            prop_assert!(outcome.is_success());
            prop_assert_eq!(outcome.pif.len(), 1);
            prop_assert_eq!(outcome.pif[0].class, TokenClass::NumberConstant);
            prop_assert_eq!(lexeme_at(&outcome, 0), input.as_str());
        });
    }

    #[test]
    fn test_property_string_literals() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"\\n\\r]{0,60}")| {
            let source = format!("\"{}\"", body);
            let outcome = scan(&source);
            prop_assert!(outcome.is_success());
            prop_assert_eq!(outcome.pif.len(), 1);
            prop_assert_eq!(outcome.pif[0].class, TokenClass::StringConstant);
            prop_assert_eq!(lexeme_at(&outcome, 0), source.as_str());
        });
    }

    #[test]
    fn test_property_splitter_covers_line() {
        use proptest::prelude::*;

        let tables = LexTables::standard();
        proptest!(|(line in "[^\\n]{0,80}")| {
            let joined: String = crate::splitter::split(&line, &tables)
                .map(|lexeme| lexeme.text)
                .collect();
            prop_assert_eq!(joined, line);
        });
    }

    #[test]
    fn test_property_attributes_always_resolve() {
        use proptest::prelude::*;

        proptest!(|(source in "[a-c0-2 +\\-=<>;,()'\"@\\n]{0,80}")| {
            let outcome = scan(&source);
            for token in outcome.pif.iter() {
                prop_assert_eq!(token.attribute.is_some(), token.class.takes_attribute());
                if let Some(symbol) = token.attribute {
                    prop_assert!(outcome.symbols.resolve(symbol).is_ok());
                }
            }
            let operands = outcome.pif.iter().filter(|t| t.attribute.is_some()).count();
            prop_assert!(outcome.symbols.size() <= operands);
        });
    }

    #[test]
    fn test_property_rescan_is_deterministic() {
        use proptest::prelude::*;

        proptest!(|(source in "[a-z0-9 +\\-*/=<>!&|;,(){}\\[\\]'\"\\n]{0,120}")| {
            let first = scan(&source);
            let second = scan(&source);
            prop_assert_eq!(first.pif.to_string(), second.pif.to_string());
            prop_assert_eq!(first.symbols.to_string(), second.symbols.to_string());
            prop_assert_eq!(first.errors, second.errors);
        });
    }
}
