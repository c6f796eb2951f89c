//! Group color assignment.
//!
//! Colors are presentation-only hints for downstream visualizations. The
//! palette is an explicit value with counters local to one analysis pass,
//! so repeated runs over the same input always color groups identically
//! and nothing leaks between calls.

use crate::classify::RhymeType;

/// Hues per rhyme type, cycled round-robin as groups of that type appear.
const PERFECT_COLORS: &[&str] = &["#e05252", "#e08f52", "#d4c24a", "#b5e052"];
const FAMILY_COLORS: &[&str] = &["#52e0a3", "#52c4e0", "#4a90d4"];
const SLANT_COLORS: &[&str] = &["#8f52e0", "#c452e0", "#e052b5"];
const ASSONANCE_COLORS: &[&str] = &["#7a8fa3", "#8fa37a"];
const CONSONANCE_COLORS: &[&str] = &["#a38f7a", "#a37a8f"];

/// Round-robin color source for one analysis pass.
#[derive(Debug, Default)]
pub struct Palette {
    counters: [usize; 5],
}

impl Palette {
    /// A fresh palette with all counters at zero.
    pub const fn new() -> Self {
        Self { counters: [0; 5] }
    }

    /// The next color for a group of the given type.
    pub fn next(&mut self, rhyme_type: RhymeType) -> &'static str {
        let hues = match rhyme_type {
            RhymeType::Perfect => PERFECT_COLORS,
            RhymeType::Family => FAMILY_COLORS,
            RhymeType::Slant => SLANT_COLORS,
            RhymeType::Assonance => ASSONANCE_COLORS,
            RhymeType::Consonance => CONSONANCE_COLORS,
        };
        let counter = &mut self.counters[rhyme_type.rank() as usize];
        let color = hues[*counter % hues.len()];
        *counter += 1;
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_within_a_type() {
        let mut palette = Palette::new();
        let first = palette.next(RhymeType::Perfect);
        let second = palette.next(RhymeType::Perfect);
        assert_ne!(first, second);

        for _ in 0..PERFECT_COLORS.len() - 2 {
            palette.next(RhymeType::Perfect);
        }
        // Wrapped around
        assert_eq!(palette.next(RhymeType::Perfect), first);
    }

    #[test]
    fn types_count_independently() {
        let mut palette = Palette::new();
        palette.next(RhymeType::Perfect);
        palette.next(RhymeType::Perfect);
        assert_eq!(palette.next(RhymeType::Family), FAMILY_COLORS[0]);
    }

    #[test]
    fn fresh_palettes_are_identical() {
        let mut a = Palette::new();
        let mut b = Palette::new();
        assert_eq!(a.next(RhymeType::Slant), b.next(RhymeType::Slant));
    }
}
