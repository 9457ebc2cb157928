use crate::shapes::Bound;

// Check that Bound a and Bound b overlap. Touching edges do not count.
#[inline]
pub fn bound_bound(a: &Bound, b: &Bound) -> bool {
    !(b.min_x >= a.max_x || b.max_x <= a.min_x || b.min_y >= a.max_y || b.max_y <= a.min_y)
}

// Check that Bound inner lies strictly inside Bound outer, no edge touching
#[inline]
pub fn bound_strictly_contains_bound(outer: &Bound, inner: &Bound) -> bool {
    inner.min_x > outer.min_x
        && inner.min_y > outer.min_y
        && inner.max_x < outer.max_x
        && inner.max_y < outer.max_y
}

// Check that Bound inner is fully contained in Bound outer
#[inline]
pub fn bound_contains_bound(outer: &Bound, inner: &Bound) -> bool {
    outer.min_x <= inner.min_x
        && outer.max_x >= inner.max_x
        && outer.min_y <= inner.min_y
        && outer.max_y >= inner.max_y
}
