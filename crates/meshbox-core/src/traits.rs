/// Report the axis-aligned extrema of a geometric entity.
///
/// An empty entity has no bounds; `None` makes that explicit instead of
/// overloading a zero-valued box, which is indistinguishable from real
/// geometry at the origin.
pub trait Bounded {
    type Point;
    fn bounds(&self) -> Option<(Self::Point, Self::Point)>;
}
