/// Code span inline type with owned delimiter constant.
///
/// Content may hold `*` freely but not a backtick.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
