//! Score arithmetic: combo multiplier, match points, level bonus, and the
//! extra-life schedule.

pub mod combo;

pub use combo::Combo;

/// Points for one match: `floor(base * multiplier)`.
#[must_use]
pub fn match_points(base: u32, multiplier: f64) -> u32 {
    // f64 -> u32 casts saturate, and the multiplier is never below 1.0.
    (f64::from(base) * multiplier).floor() as u32
}

/// Bonus for clearing `level`.
#[must_use]
pub fn level_bonus(bonus_per_level: u32, level: u32) -> u32 {
    bonus_per_level.saturating_mul(level)
}

/// Does clearing `level` earn an extra life?
#[must_use]
pub fn grants_extra_life(level: u32, every: u32) -> bool {
    every != 0 && level % every == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_points_floors() {
        assert_eq!(match_points(10, 1.0), 10);
        assert_eq!(match_points(10, 1.05), 10);
        assert_eq!(match_points(10, 1.15), 11);
        assert_eq!(match_points(10, 1.5), 15);
        assert_eq!(match_points(25, 1.5), 37);
    }

    #[test]
    fn test_level_bonus() {
        assert_eq!(level_bonus(20, 1), 20);
        assert_eq!(level_bonus(20, 4), 80);
    }

    #[test]
    fn test_extra_life_schedule() {
        let granted: Vec<u32> = (1..=8).filter(|&l| grants_extra_life(l, 2)).collect();
        assert_eq!(granted, vec![2, 4, 6, 8]);

        assert!(!grants_extra_life(3, 0));
    }
}
