/// Bracket syntax shared by links `[text](url)` and images `![alt](url)`.
pub struct LinkSyntax;

impl LinkSyntax {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
}

/// Marker that turns a link into an image.
pub struct ImageSyntax;

impl ImageSyntax {
    pub const MARKER: char = '!';
    /// Marker followed by the link opener.
    pub const OPEN: &'static str = "![";
}
