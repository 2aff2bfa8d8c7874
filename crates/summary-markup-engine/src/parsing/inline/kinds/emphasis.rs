/// Italic span inline type with owned delimiter constant.
///
/// Shares its marker with [`super::Strong`]; the parser tries bold first at
/// any position, so a double marker is only read as italic when bold fails.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static [u8; 1] = b"*";
    pub const MARKER: u8 = b'*';
}
