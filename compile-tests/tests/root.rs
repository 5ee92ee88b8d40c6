use pretty_assertions::assert_eq;

use swizzle_vec_compile_tests::texcoord::{
    Float2, Float3, Float4, Int2, Int4, Vec2Swizzles as _, Vec4Swizzles as _,
};

#[test]
fn stpq_agrees_with_xyzw() {
    let v = Float4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.qpts(), v.wzyx());
    assert_eq!(v.stpq(), v);
    assert_eq!(v.ss(), v.xx());
    assert_eq!(v.tps(), Float3::new(2.0, 3.0, 1.0));
    assert_eq!(Int2::new(3, 4).ttss(), Int4::new(4, 4, 3, 3));
}

#[test]
fn component_aliases() {
    let v = Float3::new(0.5, 0.25, 0.125);
    assert_eq!([v.s(), v.t(), v.p()], [v.x, v.y, v.z]);
    assert_eq!([v.r(), v.g(), v.b()], v.to_array());
}

#[test]
fn accessor_tables_include_every_alphabet() {
    let tables = Float2::accessors2();
    assert_eq!(tables.len(), 3 * 2 * 2);
    let names: Vec<&str> = tables.iter().map(|&(name, _, _)| name).collect();
    assert_eq!(
        names,
        ["xx", "xy", "yx", "yy", "rr", "rg", "gr", "gg", "ss", "st", "ts", "tt"]
    );
    let v = Float2::new(-1.0, 1.0);
    for (name, indices, accessor) in tables {
        assert_eq!(accessor(v), v.swizzle(indices), "{name}");
    }
}

#[test]
fn runtime_traits_are_implemented() {
    use swizzle_vec::rt::Vector as _;

    let v = Int4::new(1, 2, 3, 4);
    assert_eq!(v.component(3), Some(4));
    // the runtime only knows the default alphabets
    assert_eq!(
        v.try_swizzle::<2>("st"),
        Err(swizzle_vec::SelectionError::UnknownSymbol('s'))
    );
    assert_eq!(v.try_swizzle::<2>("ar"), Ok(Int2::new(4, 1)));
}
