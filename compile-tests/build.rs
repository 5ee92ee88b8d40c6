use std::path::PathBuf;
use std::{env, fs};

use swizzle_vec_gen::{Alphabet, Config, ScalarKind};

fn main() {
    let config = Config::new()
        .public_items(true)
        .swizzle_traits(true)
        .alphabet(Alphabet::new(['s', 't', 'p', 'q']));

    let rust_string = swizzle_vec_gen::write_string(&[ScalarKind::Float, ScalarKind::Int], config)
        .expect("vector generation failed");
    let output_path = PathBuf::from(env::var_os("OUT_DIR").unwrap()).join("texcoord.rs");
    fs::write(output_path, rust_string).unwrap();

    // signal that our only dependencies are our own source
    println!("cargo::rerun-if-changed=build.rs");
}
