//! Integer point math.
//!
//! Docking geometry lives on the pixel grid, so the engine works with
//! `glam`'s integer vectors rather than the float types.

pub use glam::{IVec2, Vec2};

/// Manhattan length of a vector, matching how drag distances are measured.
#[inline]
pub fn manhattan_length(v: IVec2) -> i32 {
    v.x.abs() + v.y.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_length_ignores_sign() {
        assert_eq!(manhattan_length(IVec2::new(-3, 4)), 7);
        assert_eq!(manhattan_length(IVec2::ZERO), 0);
    }
}
