//! Tests of the exact source text produced by the generator.

use pretty_assertions::assert_eq;

use swizzle_vec_gen::{Alphabet, Config, Error, ScalarKind, Writer, write_string};

fn vector_text(config: Config, kind: ScalarKind, dim: u8) -> String {
    let mut w = Writer::new(String::new(), config);
    w.write_vector(kind, dim).unwrap();
    w.finish()
}

fn trait_text(config: Config, dim: u8) -> String {
    let mut w = Writer::new(String::new(), config);
    w.write_swizzle_trait(dim).unwrap();
    w.finish()
}

/// Indents every nonempty line by one level, to match the contents of a generated trait.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_owned()
            } else {
                format!("    {line}\n")
            }
        })
        .collect()
}

/// Counts the accessor methods in generated trait text, not including the tables.
fn count_accessor_methods(text: &str) -> usize {
    text.lines()
        .filter(|line| line.starts_with("    fn ") && !line.starts_with("    fn accessors"))
        .count()
}

/// Counts the entries of the `accessorsN()` tables in generated trait text.
fn count_table_entries(text: &str) -> usize {
    text.lines()
        .filter(|line| line.starts_with("            (\""))
        .count()
}

#[test]
fn vector_definition() {
    assert_eq!(
        vector_text(
            Config::new()
                .color_aliases(false)
                .swizzle_traits(true)
                .runtime_path("::rt"),
            ScalarKind::Bool,
            2
        ),
        indoc::indoc! {
            r#"
            /// A vector of 2 `bool` components.
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            #[repr(C)]
            struct Bool2 {
                /// Component 0.
                x: bool,
                /// Component 1.
                y: bool,
            }

            impl Bool2 {
                /// Creates a vector from its components.
                #[inline]
                #[must_use]
                const fn new(x: bool, y: bool) -> Self {
                    Self { x, y }
                }

                /// Creates a vector with all components equal to `value`.
                #[inline]
                #[must_use]
                const fn splat(value: bool) -> Self {
                    Self { x: value, y: value }
                }

                /// Creates a vector from an array of its components.
                #[inline]
                #[must_use]
                const fn from_array([x, y]: [bool; 2]) -> Self {
                    Self { x, y }
                }

                /// Returns the components as an array.
                #[inline]
                #[must_use]
                const fn to_array(self) -> [bool; 2] {
                    [self.x, self.y]
                }

                /// Returns a vector of the components at `indices`, in order.
                ///
                /// # Panics
                ///
                /// Panics if any index is greater than 1.
                #[inline]
                #[must_use]
                fn swizzle<const K: usize>(self, indices: [usize; K]) -> <Self as ::rt::Swizzle<K>>::Output
                where
                    Self: ::rt::Swizzle<K>,
                {
                    <Self as ::rt::Swizzle<K>>::swizzle(self, indices)
                }

                /// Returns a vector of the components named by `selection`, such as `"yx"`.
                ///
                /// # Errors
                ///
                /// Returns an error if `selection` is not `K` symbols, all from `xyzw` or all from
                /// `rgba`, that name components of this vector. Other alphabets are not recognized.
                #[inline]
                fn try_swizzle<const K: usize>(
                    self,
                    selection: &str,
                ) -> Result<<Self as ::rt::Swizzle<K>>::Output, ::rt::SelectionError>
                where
                    Self: ::rt::Swizzle<K>,
                {
                    <Self as ::rt::Swizzle<K>>::try_swizzle(self, selection)
                }
            }

            impl ::rt::Vector for Bool2 {
                type Scalar = bool;
                const DIM: usize = 2;

                #[inline]
                fn component(&self, index: usize) -> Option<bool> {
                    match index {
                        0 => Some(self.x),
                        1 => Some(self.y),
                        _ => None,
                    }
                }
            }

            impl ::rt::New for Bool2 {
                type Args = (bool, bool);

                #[inline]
                fn new((x, y): Self::Args) -> Self {
                    Self { x, y }
                }
            }

            impl From<[bool; 2]> for Bool2 {
                #[inline]
                fn from(array: [bool; 2]) -> Self {
                    Self::from_array(array)
                }
            }

            impl From<Bool2> for [bool; 2] {
                #[inline]
                fn from(vector: Bool2) -> Self {
                    vector.to_array()
                }
            }

            impl ::rt::Swizzle<2> for Bool2 {
                type Output = Bool2;

                #[inline]
                fn swizzle(self, [i0, i1]: [usize; 2]) -> Bool2 {
                    let c = self.to_array();
                    Bool2::new(c[i0], c[i1])
                }
            }

            impl ::rt::Swizzle<3> for Bool2 {
                type Output = Bool3;

                #[inline]
                fn swizzle(self, [i0, i1, i2]: [usize; 3]) -> Bool3 {
                    let c = self.to_array();
                    Bool3::new(c[i0], c[i1], c[i2])
                }
            }

            impl ::rt::Swizzle<4> for Bool2 {
                type Output = Bool4;

                #[inline]
                fn swizzle(self, [i0, i1, i2, i3]: [usize; 4]) -> Bool4 {
                    let c = self.to_array();
                    Bool4::new(c[i0], c[i1], c[i2], c[i3])
                }
            }

            impl Vec2Swizzles for Bool2 {}
            "#
        }
    );
}

#[test]
fn visibility_and_aliases() {
    let text = vector_text(Config::new().public_items(true), ScalarKind::Float, 3);
    assert!(text.contains("#[derive(Clone, Copy, Debug, Default, PartialEq)]\n"));
    assert!(text.contains("pub struct Float3 {\n"));
    assert!(text.contains("    /// Component 2, also called `b`.\n    pub z: f32,\n"));
    assert!(text.contains(
        "    /// Returns component 1, `y`.\n    \
        #[inline]\n    \
        #[must_use]\n    \
        pub const fn g(self) -> f32 {\n        \
        self.y\n    \
        }\n"
    ));
    assert!(text.contains("impl ::swizzle_vec::rt::swizzles::Vec3Swizzles for Float3 {}\n"));
}

#[test]
fn local_traits_are_referenced_unqualified() {
    let text = vector_text(Config::new().swizzle_traits(true), ScalarKind::Long, 4);
    assert!(text.ends_with("impl Vec4Swizzles for Long4 {}\n"));
}

#[test]
fn trait_accessor_methods() {
    let text = trait_text(Config::new(), 2);
    assert!(text.starts_with(indoc::indoc! {
        "
        /// Named swizzle accessors for vectors of 2 components.
        ///
        /// Each accessor is spelled with one symbol per output component,
        /// all from one of the alphabets:
        /// - `xy`
        /// - `rg`
        trait Vec2Swizzles:
            Copy + ::swizzle_vec::rt::Swizzle<2> + ::swizzle_vec::rt::Swizzle<3> + ::swizzle_vec::rt::Swizzle<4>
        {
            /// Returns every named accessor producing 2 components,
            /// with the component indices it selects.
            #[must_use]
            fn accessors2() -> [::swizzle_vec::rt::Accessor<Self, 2>; 8] {
                [
                    (\"xx\", [0, 0], Self::xx),
                    (\"xy\", [0, 1], Self::xy),
                    (\"yx\", [1, 0], Self::yx),
                    (\"yy\", [1, 1], Self::yy),
                    (\"rr\", [0, 0], Self::rr),
                    (\"rg\", [0, 1], Self::rg),
                    (\"gr\", [1, 0], Self::gr),
                    (\"gg\", [1, 1], Self::gg),
                ]
            }
        "
    }));
    assert!(text.contains(&indent(indoc::indoc! {
        "
            /// Returns `(y, x)`.
            #[inline]
            #[must_use]
            fn yx(self) -> <Self as ::swizzle_vec::rt::Swizzle<2>>::Output {
                <Self as ::swizzle_vec::rt::Swizzle<2>>::swizzle(self, [1, 0])
            }
        "
    })));
    assert!(text.contains(&indent(indoc::indoc! {
        "
            /// Returns `(g, r, r)`; the same as `yxx`.
            #[inline]
            #[must_use]
            fn grr(self) -> <Self as ::swizzle_vec::rt::Swizzle<3>>::Output {
                <Self as ::swizzle_vec::rt::Swizzle<3>>::swizzle(self, [1, 0, 0])
            }
        "
    })));
    assert!(text.ends_with(
        "    fn gggg(self) -> <Self as ::swizzle_vec::rt::Swizzle<4>>::Output {\n        \
        <Self as ::swizzle_vec::rt::Swizzle<4>>::swizzle(self, [1, 1, 1, 1])\n    \
        }\n\
        }\n"
    ));
}

#[test]
fn accessor_count_matches_formula() {
    for dim in 2u8..=4 {
        let n = usize::from(dim);
        let per_alphabet = n.pow(2) + n.pow(3) + n.pow(4);

        let text = trait_text(Config::new(), dim);
        assert_eq!(count_accessor_methods(&text), 2 * per_alphabet, "dim {dim}");
        assert_eq!(count_table_entries(&text), 2 * per_alphabet, "dim {dim}");

        let text = trait_text(Config::new().color_aliases(false), dim);
        assert_eq!(count_accessor_methods(&text), per_alphabet, "dim {dim}");

        let text = trait_text(
            Config::new().alphabet(Alphabet::parse("stpq").unwrap()),
            dim,
        );
        assert_eq!(count_accessor_methods(&text), 3 * per_alphabet, "dim {dim}");
    }
}

#[test]
fn table_sizes() {
    let text = trait_text(Config::new(), 4);
    assert!(text.contains("fn accessors2() -> [::swizzle_vec::rt::Accessor<Self, 2>; 32] {"));
    assert!(text.contains("fn accessors3() -> [::swizzle_vec::rt::Accessor<Self, 3>; 128] {"));
    assert!(text.contains("fn accessors4() -> [::swizzle_vec::rt::Accessor<Self, 4>; 512] {"));
}

#[test]
fn keyword_names_are_raw() {
    let config = Config::new()
        .color_aliases(false)
        .alphabet(Alphabet::new(['f', 'n', 'i', 'o']));
    let text = trait_text(config, 3);
    assert!(text.contains("            (\"fn\", [0, 1], Self::r#fn),\n"));
    assert!(text.contains("    fn r#fn(self) -> "));
    assert!(text.contains("    fn r#if(self) -> "));
    assert!(text.contains("    fn r#in(self) -> "));
    // not keywords
    assert!(text.contains("    fn nif(self) -> "));
}

#[test]
fn whole_library() {
    let text = write_string(
        &[ScalarKind::Float, ScalarKind::Int],
        Config::new().swizzle_traits(true).public_items(true),
    )
    .unwrap();
    for name in [
        "pub trait Vec2Swizzles:",
        "pub trait Vec3Swizzles:",
        "pub trait Vec4Swizzles:",
        "pub struct Float2 {",
        "pub struct Float3 {",
        "pub struct Float4 {",
        "pub struct Int2 {",
        "pub struct Int3 {",
        "pub struct Int4 {",
    ] {
        assert_eq!(text.matches(name).count(), 1, "{name}");
    }
    assert!(!text.contains("Double"));
    assert!(text.find("trait Vec4Swizzles").unwrap() < text.find("struct Float2").unwrap());
}

#[test]
fn error_duplicate_scalar() {
    let result = write_string(&[ScalarKind::Float, ScalarKind::Float], Config::new());
    assert!(
        matches!(result, Err(Error::DuplicateScalar(ScalarKind::Float))),
        "{result:?}"
    );
}

#[test]
fn error_duplicate_symbol() {
    let result = write_string(
        &[ScalarKind::Float],
        Config::new().alphabet(Alphabet::new(['r', 's', 't', 'u'])),
    );
    assert!(matches!(result, Err(Error::DuplicateSymbol('r'))), "{result:?}");
}

#[test]
fn error_reserved_name() {
    let result = write_string(
        &[ScalarKind::Float],
        Config::new().alphabet(Alphabet::new(['s', 'e', 'l', 'f'])),
    );
    match result {
        Err(Error::ReservedName(name)) => assert_eq!(name, "self"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn error_invalid_alphabet() {
    let result = write_string(
        &[ScalarKind::Float],
        Config::new().alphabet(Alphabet::new(['s', 's', 'p', 'q'])),
    );
    match result {
        Err(error @ Error::InvalidAlphabet { .. }) => assert_eq!(
            error.to_string(),
            "invalid alphabet “sspq”: symbols must be distinct"
        ),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn error_color_aliases_without_traits() {
    let config = || Config::new().color_aliases(false);

    let result = write_string(&[ScalarKind::Float], config());
    match result {
        Err(error @ Error::ColorAliasesWithoutTraits) => assert_eq!(
            error.to_string(),
            "disabling `rgba` spellings of vector types requires generating swizzle traits too"
        ),
        other => panic!("unexpected {other:?}"),
    }

    let mut w = Writer::new(String::new(), config());
    assert!(matches!(
        w.write_vector(ScalarKind::Int, 3),
        Err(Error::ColorAliasesWithoutTraits)
    ));

    // Traits alone, or traits together with vectors, have no `rgba` spellings.
    let mut w = Writer::new(String::new(), config());
    w.write_swizzle_traits().unwrap();
    assert!(!w.finish().contains("fn rg("));
    let text = write_string(&[ScalarKind::Float], config().swizzle_traits(true)).unwrap();
    assert!(!text.contains("fn rg("));
    assert!(!text.contains("fn r(self)"));
}

#[test]
fn error_too_many_alphabets() {
    let mut config = Config::new().color_aliases(false).swizzle_traits(true);
    for symbols in [
        ['a', 'b', 'c', 'd'],
        ['e', 'f', 'g', 'h'],
        ['i', 'j', 'k', 'l'],
        ['m', 'n', 'o', 'p'],
        ['q', 'r', 's', 't'],
        ['u', 'v', 'x', 'y'],
    ] {
        config = config.alphabet(Alphabet::new(symbols));
    }
    let result = write_string(&[ScalarKind::Float], config);
    match result {
        Err(error @ Error::TooManyAlphabets(6)) => assert_eq!(
            error.to_string(),
            "6 additional alphabets were given; at most 5 are allowed"
        ),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn runtime_path_validity() {
    assert!(Config::is_valid_runtime_path("::swizzle_vec::rt"));
    assert!(Config::is_valid_runtime_path("crate"));
    assert!(Config::is_valid_runtime_path("crate::rt"));
    assert!(!Config::is_valid_runtime_path("swizzle_vec::rt"));
    assert!(!Config::is_valid_runtime_path("::"));
    assert!(!Config::is_valid_runtime_path("crate::"));
    assert!(!Config::is_valid_runtime_path("::a::::b"));
    assert!(!Config::is_valid_runtime_path("::9lives"));
}

#[test]
#[should_panic(expected = "path should be an absolute path")]
fn runtime_path_relative_panics() {
    let _ = Config::new().runtime_path("swizzle_vec::rt");
}
