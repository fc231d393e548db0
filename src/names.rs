use csscolorparser::NAMED_COLORS;
use super::color::Color;

/// Looks up a standard CSS color by its name, case and surrounding whitespace are ignored
///
/// Only plain names are accepted, functional notations and short hex codes are not names
///
/// # Parameters
///
/// name: The name of the color, e.g. "turquoise"
pub fn lookup(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();

    NAMED_COLORS
        .get(name.as_str())
        .map(|[r, g, b]| Color::new(*r, *g, *b))
}
