use entryline_hal::{CursorPosition, Key, KeyEvent, Terminal, TextColors, VirtualTerminal};

#[test]
fn text_wraps_at_the_right_edge() {
    let mut term = VirtualTerminal::new(4);
    term.write_text("abcdef", TextColors::default()).unwrap();

    assert_eq!(term.row_text(0), "abcd");
    assert_eq!(term.row_text(1), "ef");
    assert_eq!(term.cursor(), CursorPosition::new(2, 1));
}

#[test]
fn filling_the_last_column_moves_to_next_row() {
    let mut term = VirtualTerminal::new(3);
    term.write_text("xyz", TextColors::default()).unwrap();
    assert_eq!(term.cursor(), CursorPosition::new(0, 1));
}

#[test]
fn overwriting_keeps_other_cells() {
    let mut term = VirtualTerminal::new(10);
    term.write_text("hello", TextColors::default()).unwrap();
    term.set_cursor_position(CursorPosition::new(1, 0)).unwrap();
    term.write_text("E", TextColors::default()).unwrap();
    assert_eq!(term.row_text(0), "hEllo");
}

#[test]
fn scripted_keys_are_returned_in_order_then_exhaust() {
    let mut term = VirtualTerminal::new(10);
    term.push_text("ab");
    term.push_key(KeyEvent::plain(Key::Enter));

    assert_eq!(term.read_key().unwrap(), KeyEvent::char('a'));
    assert_eq!(term.read_key().unwrap(), KeyEvent::char('b'));
    assert_eq!(term.read_key().unwrap().key, Key::Enter);
    assert!(term.read_key().unwrap_err().is_input_exhausted());
}

#[test]
fn hide_and_show_are_tracked() {
    let mut term = VirtualTerminal::new(10);
    term.hide_cursor().unwrap();
    term.hide_cursor().unwrap();
    assert!(!term.is_cursor_visible());
    term.show_cursor().unwrap();
    term.show_cursor().unwrap();
    assert!(term.is_cursor_visible());
    assert_eq!(term.max_hide_depth(), 2);
}

#[test]
fn cursor_outside_screen_is_rejected() {
    let mut term = VirtualTerminal::new(5);
    assert!(term.set_cursor_position(CursorPosition::new(5, 0)).is_err());
}

#[test]
fn moves_below_the_bottom_row_are_clamped() {
    let mut term = VirtualTerminal::with_size(5, 3);
    term.set_cursor_position(CursorPosition::new(1, 7)).unwrap();
    assert_eq!(term.cursor(), CursorPosition::new(1, 2));
    assert_eq!(term.window_height().unwrap(), 3);
}

#[test]
fn bottom_row_wrap_waits_for_the_next_character() {
    let mut term = VirtualTerminal::with_size(3, 2);
    term.set_cursor_position(CursorPosition::new(0, 1)).unwrap();
    term.write_text("xyz", TextColors::default()).unwrap();
    assert_eq!(term.cursor(), CursorPosition::new(2, 1));
    assert_eq!(term.scrolled_rows(), 0);

    term.write_text("w", TextColors::default()).unwrap();
    assert_eq!(term.scrolled_rows(), 1);
    assert_eq!(term.row_text(0), "xyz");
    assert_eq!(term.row_text(1), "w");
    assert_eq!(term.cursor(), CursorPosition::new(1, 1));
}

#[test]
fn newline_on_the_bottom_row_scrolls() {
    let mut term = VirtualTerminal::with_size(4, 2);
    term.write_text("top", TextColors::default()).unwrap();
    term.write_line().unwrap();
    term.write_text("mid", TextColors::default()).unwrap();
    term.write_line().unwrap();

    assert_eq!(term.scrolled_rows(), 1);
    assert_eq!(term.row_text(0), "mid");
    assert_eq!(term.row_text(1), "");
    assert_eq!(term.cursor(), CursorPosition::new(0, 1));
}

#[test]
fn mutable_reference_is_a_terminal() {
    fn width_of(mut term: impl Terminal) -> u16 {
        term.window_width().unwrap()
    }

    let mut term = VirtualTerminal::new(42);
    assert_eq!(width_of(&mut term), 42);
    term.bell().unwrap();
    assert_eq!(term.bell_count(), 1);
}
