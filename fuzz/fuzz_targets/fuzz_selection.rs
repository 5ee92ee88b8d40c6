#![no_main]

use libfuzzer_sys::fuzz_target;

use swizzle_vec_rt::Selection;

fuzz_target!(|input: (&str, u8)| {
    let (text, dim) = input;
    let dim = usize::from(dim % 5);
    check::<2>(text, dim);
    check::<3>(text, dim);
    check::<4>(text, dim);
});

fn check<const K: usize>(text: &str, dim: usize) {
    if let Ok(selection) = Selection::<K>::parse(text, dim) {
        assert_eq!(text.chars().count(), K);
        assert!(selection.indices().iter().all(|&i| i < dim));
    }
}
