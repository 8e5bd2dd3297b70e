//! Terminal escape sequences wrapped around each streamed frame.

/// Clear the screen, move the cursor home, then drop the scroll-back.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H\x1b[3J";

pub const RESET_COLOR: &str = "\x1b[0m";

/// Foreground colours cycled through while streaming: red, bright red,
/// bright magenta, magenta.
pub const PALETTE: [&str; 4] = ["\x1b[31m", "\x1b[91m", "\x1b[95m", "\x1b[35m"];

/// Palette entry for an index, wrapping past the end.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Wrap a rendered frame into the bytes sent as one chunk.
pub fn compose_chunk(color_index: usize, frame: &str) -> String {
    let color = palette_color(color_index);
    let mut out =
        String::with_capacity(CLEAR_SCREEN.len() + color.len() + frame.len() + RESET_COLOR.len());
    out.push_str(CLEAR_SCREEN);
    out.push_str(color);
    out.push_str(frame);
    out.push_str(RESET_COLOR);
    out
}
