use rand::Rng;
use rat_autoformat::{AutoFormatState, MaskConfig, TextError};

#[test]
fn test_phone() {
    let mut s = AutoFormatState::new().with_mask("(###) ###-####");
    assert_eq!(s.text(), "(");
    assert_eq!(s.unformatted_text(), "");
    assert_eq!(s.cursor(), 1);

    for c in "555123".chars() {
        assert!(s.insert_char(c));
    }
    assert_eq!(s.text(), "(555) 123-");
    assert_eq!(s.unformatted_text(), "555123");
    assert_eq!(s.cursor(), 10);
    assert!(!s.is_complete());

    // backspace over the literal takes the 3 too.
    assert!(s.delete_prev_char());
    assert_eq!(s.text(), "(555) 12");
    assert_eq!(s.unformatted_text(), "55512");
    assert_eq!(s.cursor(), 8);
    assert!(s.delete_prev_char());
    assert_eq!(s.text(), "(555) 1");
    assert_eq!(s.cursor(), 7);

    assert!(s.insert_str("234567"));
    assert_eq!(s.text(), "(555) 123-4567");
    assert_eq!(s.unformatted_text(), "5551234567");
    assert_eq!(s.cursor(), 14);
    assert!(s.is_complete());

    // full
    assert!(!s.insert_str("99"));
    assert!(!s.insert_char('9'));
    assert_eq!(s.text(), "(555) 123-4567");
    assert_eq!(s.cursor(), 14);

    // at the start the last digit falls off.
    s.set_cursor(0, false);
    assert!(s.insert_char('1'));
    assert_eq!(s.text(), "(155) 512-3456");
    assert_eq!(s.unformatted_text(), "1555123456");
    assert_eq!(s.cursor(), 2);
}

#[test]
fn test_from_config() {
    let s = AutoFormatState::from_config(&MaskConfig::new("(***)").placeholder('*'));
    assert_eq!(s.mask(), Some("(***)"));
    assert_eq!(s.input_mask().placeholder(), '*');
    assert_eq!(s.text(), "(");

    let mut s = AutoFormatState::from_config(&MaskConfig::default());
    assert_eq!(s.mask(), None);
    assert_eq!(s.text(), "");
    s.insert_str("abc");
    assert_eq!(s.text(), "abc");
}

#[test]
fn test_set_text() {
    let mut s = AutoFormatState::new().with_mask("##/##/####");
    assert_eq!(s.text(), "");

    s.set_text("24122024");
    assert_eq!(s.text(), "24/12/2024");
    assert_eq!(s.unformatted_text(), "24122024");
    assert_eq!(s.cursor(), 10);
    assert!(s.is_complete());

    s.set_text("0101197099");
    assert_eq!(s.text(), "01/01/1970");
    assert_eq!(s.unformatted_text(), "01011970");

    s.set_text("0");
    assert_eq!(s.text(), "0");
    assert_eq!(s.cursor(), 1);
}

#[test]
fn test_set_mask() {
    let mut s = AutoFormatState::new().with_mask("(###) ###-####");
    s.set_text("5551234567");
    assert_eq!(s.text(), "(555) 123-4567");

    s.set_mask("###-###");
    assert_eq!(s.mask(), Some("###-###"));
    assert_eq!(s.text(), "555-123");
    assert_eq!(s.unformatted_text(), "555123");
    assert_eq!(s.cursor(), 7);

    s.set_mask("##.##.##.##");
    assert_eq!(s.text(), "55.51.23.");
    assert_eq!(s.unformatted_text(), "555123");

    // no masking
    s.set_mask("");
    assert_eq!(s.text(), "555123");
    assert_eq!(s.unformatted_text(), "555123");
    s.insert_str("-999");
    assert_eq!(s.text(), "555123-999");

    s.set_mask("###");
    assert_eq!(s.text(), "555");
}

#[test]
fn test_clear_mask() {
    let mut s = AutoFormatState::new().with_mask("##-##");
    s.set_text("1234");
    s.clear_mask();
    assert_eq!(s.mask(), None);
    assert_eq!(s.text(), "12-34");
    assert_eq!(s.unformatted_text(), "12-34");
    assert!(s.insert_char('5'));
    assert_eq!(s.text(), "12-345");
    assert!(s.is_complete());
}

#[test]
fn test_selection() {
    let mut s = AutoFormatState::new().with_mask("##/##/####");
    s.set_text("24122024");

    assert!(s.set_selection(3, 5));
    assert!(s.has_selection());
    assert_eq!(s.selection(), 3..5);
    assert_eq!(s.selected_text(), "12");

    assert!(s.insert_str("01"));
    assert_eq!(s.text(), "24/01/2024");
    assert_eq!(s.cursor(), 6);
    assert!(!s.has_selection());

    assert!(s.set_selection(6, 2));
    assert_eq!(s.selection(), 2..6);
    assert_eq!(s.selected_text(), "/01/");

    assert!(s.select_all());
    assert_eq!(s.selection(), 0..10);
    assert!(s.delete_prev_char());
    assert_eq!(s.text(), "");
    assert_eq!(s.cursor(), 0);
    assert!(s.is_empty());
}

#[test]
fn test_cursor() {
    let mut s = AutoFormatState::new().with_mask("##-##");
    s.set_text("12");
    assert_eq!(s.text(), "12-");
    assert_eq!(s.cursor(), 3);

    assert!(!s.set_cursor(100, false));
    assert_eq!(s.cursor(), 3);
    assert!(s.set_cursor(0, false));
    assert!(s.set_cursor(100, false));
    assert_eq!(s.cursor(), 3);
    assert!(s.set_cursor(1, true));
    assert_eq!(s.anchor(), 3);
    assert_eq!(s.selection(), 1..3);
    assert!(!s.set_cursor(1, true));
}

#[test]
fn test_delete_next() {
    let mut s = AutoFormatState::new().with_mask("##/##/####");
    s.set_text("24122024");

    s.set_cursor(0, false);
    assert!(s.delete_next_char());
    assert_eq!(s.text(), "41/22/024");
    assert_eq!(s.cursor(), 0);

    // a single literal takes the char before it.
    s.set_cursor(2, false);
    assert!(s.delete_next_char());
    assert_eq!(s.text(), "42/20/24");
    assert_eq!(s.unformatted_text(), "422024");
    assert_eq!(s.cursor(), 1);

    s.set_cursor(s.len(), false);
    assert!(!s.delete_next_char());
}

#[test]
fn test_delete_range() {
    let mut s = AutoFormatState::new().with_mask("(###) ###-####");
    s.set_text("5551234567");

    assert!(s.delete_range(6..9));
    assert_eq!(s.text(), "(555) 456-7");
    assert_eq!(s.cursor(), 6);

    assert_eq!(
        s.try_delete_range(5..20),
        Err(TextError::TextRangeOutOfBounds(5, 20, 11))
    );
    assert_eq!(s.text(), "(555) 456-7");
}

#[test]
fn test_apply_change() {
    let mut s = AutoFormatState::new().with_mask("(###) ###-####");
    assert!(s.apply_change("(5", 1, 0, 1));
    assert_eq!(s.text(), "(5");
    assert_eq!(s.cursor(), 2);

    assert_eq!(
        s.try_apply_change("(55x", 2, 0, 1),
        Err(TextError::EditLengthMismatch(2, 0, 1, 4))
    );
    assert_eq!(s.text(), "(5");
}

#[test]
#[should_panic]
fn test_apply_change_panic() {
    let mut s = AutoFormatState::new().with_mask("##");
    s.apply_change("1", 3, 0, 1);
}

#[test]
fn test_no_mask() {
    let mut s = AutoFormatState::new();
    assert!(s.insert_str("abc"));
    assert_eq!(s.text(), "abc");
    assert_eq!(s.unformatted_text(), "abc");
    assert_eq!(s.cursor(), 3);
    assert!(s.is_complete());

    assert!(s.delete_prev_char());
    assert_eq!(s.text(), "ab");
    s.set_cursor(0, false);
    assert!(!s.delete_prev_char());

    assert!(s.clear());
    assert!(!s.clear());
}

#[test]
fn test_unicode() {
    let mut s = AutoFormatState::new().with_mask("##-##");
    s.insert_char('ä');
    s.insert_char('ö');
    s.insert_char('ü');
    assert_eq!(s.text(), "äö-ü");
    assert_eq!(s.cursor(), 4);
    s.delete_prev_char();
    s.delete_prev_char();
    assert_eq!(s.text(), "ä");
    assert_eq!(s.unformatted_text(), "ä");
}

#[test]
fn test_combining_mark() {
    let mut s = AutoFormatState::new().with_mask("####");
    assert!(s.insert_char('e'));
    assert!(s.insert_char('\u{301}'));
    assert_eq!(s.text(), "e\u{301}");
    assert_eq!(s.unformatted_text(), "e\u{301}");
    assert_eq!(s.cursor(), 1);
    assert!(s.insert_char('x'));
    assert_eq!(s.text(), "e\u{301}x");
    assert_eq!(s.cursor(), 2);

    // same as without a mask.
    let mut p = AutoFormatState::new();
    p.insert_char('e');
    p.insert_char('\u{301}');
    p.insert_char('x');
    assert_eq!(p.text(), s.text());
    assert_eq!(p.cursor(), s.cursor());

    // joins behind a literal too.
    let mut s = AutoFormatState::new().with_mask("##-##");
    s.insert_str("12a");
    assert_eq!(s.text(), "12-a");
    assert!(s.insert_char('\u{308}'));
    assert_eq!(s.text(), "12-a\u{308}");
    assert_eq!(s.unformatted_text(), "12a\u{308}");
    assert_eq!(s.cursor(), 4);

    // in the middle of the text.
    s.set_cursor(1, false);
    assert!(s.insert_char('\u{301}'));
    assert_eq!(s.text(), "1\u{301}2-a\u{308}");
    assert_eq!(s.unformatted_text(), "1\u{301}2a\u{308}");
    assert_eq!(s.cursor(), 1);
}

#[test]
fn test_random_edits() {
    let mut rng = rand::thread_rng();

    for mask in ["(###) ###-####", "##/##/####", "##--##", "-#-", "abc"] {
        let mut s = AutoFormatState::new().with_mask(mask);
        for _ in 0..500 {
            match rng.gen_range(0..6) {
                0 => {
                    s.insert_char(char::from(b'0' + rng.gen_range(0..10)));
                }
                1 => {
                    let n = rng.gen_range(0..15);
                    let paste: String = (0..n)
                        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
                        .collect();
                    s.insert_str(&paste);
                }
                2 => {
                    s.delete_prev_char();
                }
                3 => {
                    s.delete_next_char();
                }
                4 => {
                    let c = rng.gen_range(0..=s.len());
                    s.set_cursor(c, rng.gen_bool(0.3));
                }
                _ => {
                    let a = rng.gen_range(0..=s.len());
                    let c = rng.gen_range(0..=s.len());
                    s.set_selection(a, c);
                }
            }

            let m = s.input_mask();
            assert!(s.cursor() <= s.len());
            assert!(s.len() <= m.len());
            assert!(s.unformatted_text().chars().count() as u32 <= m.unformatted_len());
            assert_eq!(m.format_text(s.unformatted_text()), s.text());
            assert_eq!(
                m.unformat_text(s.text(), 0, s.len()).as_deref(),
                Ok(s.unformatted_text())
            );
        }
    }
}
