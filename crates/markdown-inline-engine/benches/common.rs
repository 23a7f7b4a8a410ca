// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_inline_content(size: usize) -> String {
    let base = "Some **bold** words, an _aside_, a `snippet`, an ![image](https://x/i.png) and a [link](https://x). ";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_content(size: usize) -> String {
    "Plain sentence without any markup at all. ".repeat(size)
}
