use std::env;
use std::fs;
use std::path::Path;

include!("../build_common.rs");

fn main() {
    embed_readme(&env::var("CARGO_MANIFEST_DIR").unwrap());
}
