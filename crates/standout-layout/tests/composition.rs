//! Joining and placing rendered blocks.

use standout_layout::width::{display_width, line_count, line_widths, strip_ansi};
use standout_layout::{
    join_horizontal, join_vertical, place, place_horizontal, Align, Border, Style, VerticalAlign,
};

#[test]
fn join_horizontal_with_separator_block() {
    let out = join_horizontal(VerticalAlign::Top, &["a\nb", " ", "x\ny\nz"]);
    assert_eq!(out.split('\n').collect::<Vec<_>>(), vec!["a x", "b y", "  z"]);
}

#[test]
fn no_implicit_gap() {
    assert_eq!(join_horizontal(VerticalAlign::Top, &["ab", "cd"]), "abcd");
}

#[test]
fn joined_blocks_nest_inside_styles() {
    let cell = Style::new().border(Border::NORMAL);
    let row = join_horizontal(
        VerticalAlign::Top,
        &[cell.render("1"), cell.render("2\n3")],
    );
    let framed = Style::new()
        .border(Border::DOUBLE)
        .padding_symmetric(0, 1)
        .render(&row);
    let plain = strip_ansi(&framed);
    let expected = [
        "╔════════╗",
        "║ ┌─┐┌─┐ ║",
        "║ │1││2│ ║",
        "║ └─┘│3│ ║",
        "║    └─┘ ║",
        "╚════════╝",
    ]
    .join("\n");
    assert_eq!(plain, expected);
}

#[test]
fn styled_and_plain_blocks_keep_their_escapes() {
    let badge = Style::new().bold(true).background("green").render("ok");
    let out = join_horizontal(VerticalAlign::Bottom, &["status:\nnow", " ", badge.as_str()]);
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines[0], "status:   ");
    assert_eq!(lines[1], format!("now     {badge}"));
    assert_eq!(line_widths(&out), vec![10, 10]);
}

#[test]
fn join_vertical_centers_narrow_blocks() {
    let title = Style::new().underline(true).render("Title");
    let out = join_vertical(Align::Center, &[title.as_str(), "a much longer body"]);
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(display_width(lines[0]), 18);
    assert!(lines[0].starts_with("      \x1b[4mTitle\x1b[0m"));
    assert!(lines[0].ends_with("       "));
}

#[test]
fn join_vertical_heights_add_up() {
    let out = join_vertical(Align::Left, &["a\nb", "c", "d\ne\nf"]);
    assert_eq!(line_count(&out), 6);
}

#[test]
fn place_in_a_larger_area() {
    let out = place(9, 5, Align::Right, VerticalAlign::Bottom, "hey\nyou");
    assert_eq!(
        out.split('\n').collect::<Vec<_>>(),
        vec!["         ", "         ", "         ", "      hey", "      you"]
    );
}

#[test]
fn place_in_a_smaller_area() {
    let block = Style::new().border(Border::ASCII).render("hello");
    let out = place(4, 2, Align::Left, VerticalAlign::Top, &block);
    assert_eq!(out, "+--…\n|he…");
}

#[test]
fn place_horizontal_is_per_line() {
    let out = place_horizontal(4, Align::Center, "a\nbb\nccc");
    assert_eq!(out, " a  \n bb \nccc ");
}
