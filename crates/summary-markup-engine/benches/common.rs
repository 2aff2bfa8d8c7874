// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_summary_content(size: usize) -> String {
    let base = "# Weekly Summary\n\nYou slept **7.5 hours** on average and felt *rested*.\nStep count stayed near `8000`.\n\n## Wins\n- Walked **4** days\n- Cooked at home\n\n## Next steps\n1. Keep the *10pm* wind-down\n2. Add one `strength` session\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_malformed_content(size: usize) -> String {
    let base = "**unterminated and *stray `ticks\n****\na **b*c** d\n#NoSpace\n-not a bullet\n\n";
    base.repeat(size)
}
