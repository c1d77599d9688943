mod unit_tests {

    use crate::{Mode, TokenKind, classify};

    #[test]
    fn external_labels_are_stable() {
        let expected = [
            (TokenKind::En, "en"),
            (TokenKind::Ja, "ja"),
            (TokenKind::EnNum, "englishNumeral"),
            (TokenKind::JaNum, "japaneseNumeral"),
            (TokenKind::EnPunc, "englishPunctuation"),
            (TokenKind::JaPunc, "japanesePunctuation"),
            (TokenKind::Kanji, "kanji"),
            (TokenKind::Hiragana, "hiragana"),
            (TokenKind::Katakana, "katakana"),
            (TokenKind::Space, "space"),
            (TokenKind::Other, "other"),
        ];
        for (kind, label) in expected {
            assert_eq!(kind.label(), label);
            assert_eq!(kind.to_string(), label);
        }
    }

    #[test]
    fn classify_by_parsed_mode() {
        let full: Mode = "full".parse().unwrap();
        let compact: Mode = "compact".parse().unwrap();
        assert_eq!(classify('A', full).label(), "en");
        assert_eq!(classify('５', full).label(), "japaneseNumeral");
        assert_eq!(classify('５', compact).label(), "other");
        assert!("detailed".parse::<Mode>().is_err());
    }

    #[test]
    fn classifier_is_total() {
        // A scattering of scalars across every plane; nothing may panic and
        // everything gets some kind.
        for c in ['\0', '\u{7F}', '\u{80}', 'Ⱶ', '\u{D7FF}', '\u{E000}', '🍣', '\u{10FFFF}'] {
            let _ = classify(c, Mode::Full);
            let _ = classify(c, Mode::Compact);
        }
        assert_eq!(classify('🍣', Mode::Full), TokenKind::Other);
        assert_eq!(classify('🍣', Mode::Compact), TokenKind::Other);
    }

    #[test]
    fn classifier_is_deterministic() {
        for c in ['a', '５', 'ー', '\u{3000}', '漢', 'ｱ', '🍣'] {
            for mode in [Mode::Full, Mode::Compact] {
                assert_eq!(classify(c, mode), classify(c, mode));
            }
        }
    }

    #[test]
    fn compact_kinds_are_closed() {
        for c in "5５ !。　漢ふフｱＳa🍣é".chars() {
            let kind = classify(c, Mode::Compact);
            assert!(
                matches!(kind, TokenKind::En | TokenKind::Ja | TokenKind::Other),
                "compact classify(U+{:04X}) leaked {kind:?}",
                c as u32
            );
        }
    }
}
