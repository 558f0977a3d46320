//! Damage arithmetic shared by every combatant.

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Reduce incoming damage by a fraction.
///
/// # Formula
///
/// ```text
/// reduced = floor(damage * (1 - fraction))
/// ```
///
/// The conversion truncates. `fraction` is clamped to `[0, 1]`, so the
/// result never exceeds `damage` and never goes below 0.
///
/// Products that land within rounding error of a whole number count as that
/// number: `1.0 - 0.3` is stored just below `0.7`, and `90 * 0.7` must give
/// `63`, not `62`.
pub fn reduce_damage(damage: u32, fraction: f64) -> u32 {
    let fraction = fraction.clamp(0.0, 1.0);
    let product = f64::from(damage) * (1.0 - fraction);
    let nearest = product.round();
    let reduced = if (product - nearest).abs() <= product * SNAP_TOLERANCE {
        nearest
    } else {
        product.floor()
    };
    (reduced as u32).min(damage)
}

/// Relative error below which a product is treated as a whole number.
const SNAP_TOLERANCE: f64 = 1e-12;

/// Subtract a flat defense value, e.g. from worn armor.
pub fn mitigate_flat(damage: u32, defense: u32) -> u32 {
    damage.saturating_sub(defense)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_damage_clamps_at_zero() {
        assert_eq!(apply_damage(10, 3), 7);
        assert_eq!(apply_damage(10, 25), 0);
    }

    #[test]
    fn reduce_damage_truncates() {
        assert_eq!(reduce_damage(100, 0.3), 70);
        // 7 * 0.7 = 4.9 -> 4
        assert_eq!(reduce_damage(7, 0.3), 4);
        assert_eq!(reduce_damage(0, 0.3), 0);
    }

    #[test]
    fn whole_products_are_not_lost_to_rounding() {
        assert_eq!(reduce_damage(90, 0.3), 63);
        assert_eq!(reduce_damage(170, 0.3), 119);
        assert_eq!(reduce_damage(700, 0.3), 490);

        for damage in 0..=5_000u32 {
            assert_eq!(reduce_damage(damage, 0.3), damage * 7 / 10, "damage {damage}");
            assert_eq!(reduce_damage(damage, 0.1), damage * 9 / 10, "damage {damage}");
            assert_eq!(reduce_damage(damage, 0.125), damage * 7 / 8, "damage {damage}");
        }
    }

    #[test]
    fn large_hits_reduce_exactly() {
        assert_eq!(reduce_damage(4_000_000_000, 0.3), 2_800_000_000);
        assert_eq!(reduce_damage(u32::MAX, 0.0), u32::MAX);
    }

    #[test]
    fn full_reduction_absorbs_everything() {
        assert_eq!(reduce_damage(100, 1.0), 0);
        assert_eq!(reduce_damage(u32::MAX, 1.0), 0);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(reduce_damage(50, 1.5), 0);
        assert_eq!(reduce_damage(50, -0.5), 50);
    }

    #[test]
    fn flat_mitigation_saturates() {
        assert_eq!(mitigate_flat(10, 4), 6);
        assert_eq!(mitigate_flat(3, 4), 0);
    }
}
