use chess_rules::{Board, BoardRenderer, Glyphs, RenderOptions, Square};

#[test]
fn test_unicode_start_position() {
    let out = BoardRenderer::render(&Board::new(), &RenderOptions::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "8 | ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ ");
    assert_eq!(lines[7], "1 | ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ ");
    assert_eq!(lines[9], "    a  b  c  d  e  f  g  h");
}

#[test]
fn test_ascii_without_coordinates() {
    let options = RenderOptions {
        glyphs: Glyphs::Ascii,
        coordinates: false,
        highlight: None,
    };
    let out = BoardRenderer::render(&Board::new(), &options);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], " r  n  b  q  k  b  n  r ");
    assert_eq!(lines[1], " p  p  p  p  p  p  p  p ");
    assert_eq!(lines[4], " .  .  .  .  .  .  .  . ");
    assert_eq!(lines[7], " R  N  B  Q  K  B  N  R ");
}

#[test]
fn test_highlight_brackets_selected_square() {
    let options = RenderOptions {
        glyphs: Glyphs::Ascii,
        coordinates: false,
        highlight: Some(Square::parse("e2").unwrap()),
    };
    let out = BoardRenderer::render(&Board::new(), &options);
    assert_eq!(out.lines().nth(6), Some(" P  P  P  P [P] P  P  P "));
}
