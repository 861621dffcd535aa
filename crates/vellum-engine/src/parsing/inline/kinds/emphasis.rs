/// Emphasis marker knowledge shared by bold-italic, bold and italic.
pub struct Emphasis;

impl Emphasis {
    pub const MARKERS: [u8; 2] = [b'*', b'_'];
    pub const ESCAPE: u8 = b'\\';

    pub fn is_marker(b: u8) -> bool {
        Self::MARKERS.contains(&b)
    }
}
