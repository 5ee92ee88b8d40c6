#![no_main]

use libfuzzer_sys::fuzz_target;

use pretty_assertions::assert_eq;

use swizzle_vec_gen::{Alphabet, Config, Error, ScalarKind};

// -------------------------------------------------------------------------------------------------

fuzz_target!(|input: GenerateInput| try_generate(input));

fn try_generate(input: GenerateInput) {
    let mut config = Config::new()
        .public_items(input.public_items)
        .color_aliases(input.color_aliases)
        .swizzle_traits(input.swizzle_traits);
    for &symbols in input.alphabets.iter().take(5) {
        config = config.alphabet(Alphabet::new(symbols));
    }
    let scalars: Vec<ScalarKind> = input
        .scalars
        .iter()
        .map(|&i| ScalarKind::ALL[usize::from(i) % ScalarKind::ALL.len()])
        .collect();

    match swizzle_vec_gen::write_string(&scalars, config) {
        Ok(source) => {
            for kind in &scalars {
                for dim in 2..=4 {
                    let header = format!("struct {}{dim} {{", kind.stem());
                    assert_eq!(source.matches(&header).count(), 1, "{header}");
                }
            }
            assert_eq!(
                source.matches("trait Vec").count(),
                if input.swizzle_traits { 3 } else { 0 }
            );
        }
        Err(Error::FmtError(_)) => panic!("String writes cannot fail"),
        Err(_) => {}
    }
}

// -------------------------------------------------------------------------------------------------

#[derive(Debug, arbitrary::Arbitrary)]
struct GenerateInput {
    public_items: bool,
    color_aliases: bool,
    swizzle_traits: bool,
    alphabets: Vec<[char; 4]>,
    scalars: Vec<u8>,
}
