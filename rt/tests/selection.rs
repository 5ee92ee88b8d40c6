//! Tests of runtime selection parsing, and of the swizzle traits applied to a minimal vector type.

use pretty_assertions::assert_eq;

use swizzle_vec_rt::swizzles::{Vec2Swizzles, Vec4Swizzles};
use swizzle_vec_rt::{Selection, SelectionError, Swizzle, Vector};

/// Vector type whose swizzles are arrays, standing in for a generated type.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Quad([i32; 4]);

impl Vector for Quad {
    type Scalar = i32;
    const DIM: usize = 4;

    fn component(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }
}

impl<const K: usize> Swizzle<K> for Quad {
    type Output = [i32; K];

    fn swizzle(self, indices: [usize; K]) -> [i32; K] {
        indices.map(|i| self.0[i])
    }
}

impl Vec4Swizzles for Quad {}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pair([i32; 2]);

impl Vector for Pair {
    type Scalar = i32;
    const DIM: usize = 2;

    fn component(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }
}

impl<const K: usize> Swizzle<K> for Pair {
    type Output = [i32; K];

    fn swizzle(self, indices: [usize; K]) -> [i32; K] {
        indices.map(|i| self.0[i])
    }
}

impl Vec2Swizzles for Pair {}

// -------------------------------------------------------------------------------------------------

#[test]
fn parse_success() {
    assert_eq!(Selection::<3>::parse("zyx", 3).unwrap().indices(), [2, 1, 0]);
    assert_eq!(Selection::<4>::parse("abgr", 4).unwrap().indices(), [3, 2, 1, 0]);
    assert_eq!(Selection::<2>::parse("xx", 2).unwrap().indices(), [0, 0]);
    assert_eq!(
        Selection::<4>::parse("rrgg", 2).unwrap(),
        Selection::<4>::parse("xxyy", 2).unwrap()
    );
}

#[test]
fn parse_errors() {
    assert_eq!(
        Selection::<3>::parse("xy", 4),
        Err(SelectionError::Length {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        Selection::<2>::parse("xyzw", 4),
        Err(SelectionError::Length {
            expected: 2,
            found: 4
        })
    );
    assert_eq!(
        Selection::<2>::parse("xq", 4),
        Err(SelectionError::UnknownSymbol('q'))
    );
    assert_eq!(
        Selection::<2>::parse("XY", 4),
        Err(SelectionError::UnknownSymbol('X'))
    );
    assert_eq!(
        Selection::<2>::parse("xz", 2),
        Err(SelectionError::OutOfRange {
            symbol: 'z',
            dim: 2
        })
    );
    assert_eq!(
        Selection::<3>::parse("rga", 3),
        Err(SelectionError::OutOfRange {
            symbol: 'a',
            dim: 3
        })
    );
    assert_eq!(
        Selection::<2>::parse("xg", 4),
        Err(SelectionError::MixedAlphabets)
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        SelectionError::Length {
            expected: 3,
            found: 2
        }
        .to_string(),
        "expected 3 components in selection, found 2"
    );
    assert_eq!(
        SelectionError::UnknownSymbol('q').to_string(),
        "‘q’ does not name a vector component"
    );
    assert_eq!(
        SelectionError::OutOfRange {
            symbol: 'w',
            dim: 3
        }
        .to_string(),
        "‘w’ is out of range for a vector of 3 components"
    );
    assert_eq!(
        SelectionError::MixedAlphabets.to_string(),
        "selection mixes symbols from different alphabets"
    );
}

#[test]
fn try_swizzle_uses_vector_dimension() {
    let v = Pair([1, 2]);
    assert_eq!(Swizzle::<3>::try_swizzle(v, "yxy"), Ok([2, 1, 2]));
    assert_eq!(
        Swizzle::<2>::try_swizzle(v, "xz"),
        Err(SelectionError::OutOfRange {
            symbol: 'z',
            dim: 2
        })
    );
}

#[test]
fn named_accessors() {
    let v = Quad([1, 2, 3, 4]);
    assert_eq!(v.wzyx(), [4, 3, 2, 1]);
    assert_eq!(v.xxyy(), [1, 1, 2, 2]);
    assert_eq!(v.bgr(), [3, 2, 1]);
    assert_eq!(v.rgba(), v.xyzw());
    assert_eq!(Pair([5, 6]).yx(), [6, 5]);
}

#[test]
fn accessor_tables() {
    let v = Quad([10, 20, 30, 40]);
    let table = Quad::accessors3();
    assert_eq!(table.len(), 2 * 4 * 4 * 4);
    assert_eq!(table[0].0, "xxx");
    assert_eq!(table[64].0, "rrr");
    for (name, indices, accessor) in table {
        assert_eq!(accessor(v), indices.map(|i| v.0[i]), "{name}");
        assert_eq!(Swizzle::<3>::try_swizzle(v, name), Ok(accessor(v)), "{name}");
    }

    assert_eq!(Pair::accessors2().len(), 2 * 2 * 2);
    assert_eq!(Pair::accessors4().len(), 2 * 2 * 2 * 2 * 2);
}
