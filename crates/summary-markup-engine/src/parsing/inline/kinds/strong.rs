/// Bold span inline type with owned delimiter constant.
///
/// Content may not contain the marker character at all, so `**a*b**` is
/// never bold.
pub struct Strong;

impl Strong {
    /// Opening and closing delimiter.
    pub const DELIM: &'static [u8; 2] = b"**";
    /// The byte that content must not contain.
    pub const MARKER: u8 = b'*';
}
