/// Link bracket syntax knowledge.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// Image syntax knowledge (`![alt](url)`).
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
}
