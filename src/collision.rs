use crate::snake::Position;

/// Outcome of checking a freshly moved head.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Clear,
    Wall,
    SelfHit,
}

impl Collision {
    #[must_use]
    pub fn is_fatal(self) -> bool {
        self != Self::Clear
    }
}

/// Checks `head` against the board edges and the rest of the body.
///
/// `body_excluding_head` is the post-move body without the new head, so a
/// tile vacated by the tail on the same tick counts as free.
pub fn check<'a, I>(head: Position, tile_count: i32, body_excluding_head: I) -> Collision
where
    I: IntoIterator<Item = &'a Position>,
{
    if head.x < 0 || head.x >= tile_count || head.y < 0 || head.y >= tile_count {
        return Collision::Wall;
    }

    if body_excluding_head
        .into_iter()
        .any(|segment| *segment == head)
    {
        return Collision::SelfHit;
    }

    Collision::Clear
}
