//! The dice roller: three independent uniform draws over the catalog.

use crate::{House, Planet, Roll, Sign};
use rand::Rng;

/// Size of the combination space: 12 planets x 12 signs x 12 houses.
pub const TOTAL_COMBINATIONS: u32 = 12 * 12 * 12;

/// Roll all three dice at once.
///
/// `thread_rng` is a CSPRNG, and `gen_range` rejection-samples internally,
/// so each die is exactly uniform — no modulo bias from folding a wide draw.
pub fn roll() -> Roll {
    let mut rng = rand::thread_rng();
    Roll {
        planet: Planet::ALL[rng.gen_range(0..Planet::ALL.len())],
        sign: Sign::ALL[rng.gen_range(0..Sign::ALL.len())],
        house: House::ALL[rng.gen_range(0..House::ALL.len())],
    }
}

/// Stable combination identifier, e.g. "Mars-Pisces-7".
///
/// For display and dedup only — collisions across users are expected since
/// the id carries no user identity.
pub fn combination_id(roll: &Roll) -> String {
    format!("{}-{}-{}", roll.planet, roll.sign, roll.house)
}

/// Readable sentence form, e.g. "Mars in Pisces, 7th House".
pub fn format_roll(roll: &Roll) -> String {
    let n = roll.house.number() as u32;
    format!(
        "{} in {}, {}{} House",
        roll.planet,
        roll.sign,
        n,
        ordinal_suffix(n)
    )
}

/// Ordinal suffix for any nonnegative number (1st, 2nd, 3rd, 4th, ...).
/// 11/12/13 take "th" despite ending in 1/2/3.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_roll() -> Roll {
        Roll {
            planet: Planet::Mars,
            sign: Sign::Pisces,
            house: House::new(7).unwrap(),
        }
    }

    #[test]
    fn ordinal_suffix_edge_cases() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (10, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (101, "st"),
            (111, "th"),
            (112, "th"),
            (113, "th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal_suffix(n), expected, "n = {}", n);
        }
    }

    #[test]
    fn combination_id_is_a_pure_function_of_the_roll() {
        let a = fixed_roll();
        let b = fixed_roll();
        assert_eq!(combination_id(&a), "Mars-Pisces-7");
        assert_eq!(combination_id(&a), combination_id(&b));

        let other_planet = Roll {
            planet: Planet::Venus,
            ..a
        };
        let other_sign = Roll {
            sign: Sign::Leo,
            ..a
        };
        let other_house = Roll {
            house: House::new(8).unwrap(),
            ..a
        };
        assert_ne!(combination_id(&a), combination_id(&other_planet));
        assert_ne!(combination_id(&a), combination_id(&other_sign));
        assert_ne!(combination_id(&a), combination_id(&other_house));
    }

    #[test]
    fn format_roll_uses_ordinal_house() {
        assert_eq!(format_roll(&fixed_roll()), "Mars in Pisces, 7th House");
        let eleventh = Roll {
            planet: Planet::NorthNode,
            sign: Sign::Aquarius,
            house: House::new(11).unwrap(),
        };
        assert_eq!(
            format_roll(&eleventh),
            "North Node in Aquarius, 11th House"
        );
    }

    #[test]
    fn total_combinations_matches_the_catalog() {
        assert_eq!(
            TOTAL_COMBINATIONS as usize,
            Planet::ALL.len() * Sign::ALL.len() * House::ALL.len()
        );
    }

    // Chi-squared test against uniform for each die, df = 11. The critical
    // value 45.0 sits far past p = 0.0001, so a healthy generator fails this
    // about never while real bias (e.g. u32 % 12 folding) still shows up at
    // much larger sample sizes than this.
    #[test]
    fn each_die_is_statistically_uniform() {
        const N: u32 = 100_000;
        let mut planets = [0u32; 12];
        let mut signs = [0u32; 12];
        let mut houses = [0u32; 12];

        for _ in 0..N {
            let r = roll();
            planets[r.planet as usize] += 1;
            signs[r.sign as usize] += 1;
            houses[(r.house.number() - 1) as usize] += 1;
        }

        let expected = N as f64 / 12.0;
        for (label, counts) in [("planet", planets), ("sign", signs), ("house", houses)] {
            assert!(counts.iter().all(|&c| c > 0), "{} die never hit a face", label);
            let chi2: f64 = counts
                .iter()
                .map(|&c| {
                    let d = c as f64 - expected;
                    d * d / expected
                })
                .sum();
            assert!(chi2 < 45.0, "{} die chi2 = {:.2}", label, chi2);
        }
    }

    #[test]
    fn rolls_are_independent_draws() {
        // With 1728 combinations, 200 rolls should not collapse onto a
        // handful of outcomes.
        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(combination_id(&roll()));
        }
        assert!(seen.len() > 50, "only {} distinct combinations", seen.len());
    }
}
