/// Bold text, `**like this**`.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
}

/// Italic text, `_like this_`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "_";
}
