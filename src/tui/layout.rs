//! Pure text layout helpers for string-rendering screens.

use unicode_width::UnicodeWidthStr;

/// Center `content` horizontally and vertically within a `width` by
/// `height` character box.
///
/// The content block keeps its own internal alignment; the block as a
/// whole is indented to the center column and padded with empty rows
/// above and below. Content larger than the box is never clipped: the
/// result simply grows past the requested dimensions.
pub fn place(width: u16, height: u16, content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let block_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let indent = " ".repeat((width as usize).saturating_sub(block_width) / 2);

    let rows = (height as usize).max(lines.len());
    let top = (rows - lines.len()) / 2;

    let mut out = Vec::with_capacity(rows);
    out.resize(top, String::new());
    for line in &lines {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("{indent}{line}"));
        }
    }
    out.resize(rows, String::new());
    out.join("\n")
}
