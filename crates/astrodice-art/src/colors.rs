//! Planet color palettes for the visual's background gradient and accents.
//! One fixed palette per planet, a direct mapping — no blending.

use astrodice_core::Planet;

pub struct Palette {
    /// Gradient start.
    pub primary: &'static str,
    /// Gradient end.
    pub secondary: &'static str,
    /// Typography and line work.
    pub accent: &'static str,
    /// Soft glow effects.
    pub glow: &'static str,
}

// Order matches Planet::ALL.
static PALETTES: [Palette; 12] = [
    Palette {
        primary: "#FFD700",
        secondary: "#FF8C00",
        accent: "#FFF8DC",
        glow: "rgba(255, 215, 0, 0.3)",
    },
    Palette {
        primary: "#C0C0C0",
        secondary: "#708090",
        accent: "#F8F8FF",
        glow: "rgba(192, 192, 192, 0.3)",
    },
    Palette {
        primary: "#87CEEB",
        secondary: "#4682B4",
        accent: "#E0FFFF",
        glow: "rgba(135, 206, 235, 0.3)",
    },
    Palette {
        primary: "#FFB6C1",
        secondary: "#DB7093",
        accent: "#FFF0F5",
        glow: "rgba(255, 182, 193, 0.3)",
    },
    Palette {
        primary: "#DC143C",
        secondary: "#8B0000",
        accent: "#FFA07A",
        glow: "rgba(220, 20, 60, 0.3)",
    },
    Palette {
        primary: "#9370DB",
        secondary: "#4B0082",
        accent: "#E6E6FA",
        glow: "rgba(147, 112, 219, 0.3)",
    },
    Palette {
        primary: "#DEB887",
        secondary: "#8B4513",
        accent: "#F5DEB3",
        glow: "rgba(222, 184, 135, 0.3)",
    },
    Palette {
        primary: "#00CED1",
        secondary: "#008B8B",
        accent: "#AFEEEE",
        glow: "rgba(0, 206, 209, 0.3)",
    },
    Palette {
        primary: "#4169E1",
        secondary: "#191970",
        accent: "#B0C4DE",
        glow: "rgba(65, 105, 225, 0.3)",
    },
    Palette {
        primary: "#2F4F4F",
        secondary: "#0D0D0D",
        accent: "#696969",
        glow: "rgba(47, 79, 79, 0.3)",
    },
    Palette {
        primary: "#32CD32",
        secondary: "#228B22",
        accent: "#90EE90",
        glow: "rgba(50, 205, 50, 0.3)",
    },
    Palette {
        primary: "#FF6347",
        secondary: "#B22222",
        accent: "#FFA500",
        glow: "rgba(255, 99, 71, 0.3)",
    },
];

pub fn planet_palette(planet: Planet) -> &'static Palette {
    &PALETTES[planet as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_planet_has_a_distinct_palette() {
        let mut primaries: Vec<_> = Planet::ALL
            .iter()
            .map(|&p| planet_palette(p).primary)
            .collect();
        primaries.sort();
        primaries.dedup();
        assert_eq!(primaries.len(), 12);
    }

    #[test]
    fn palettes_are_well_formed() {
        for &planet in &Planet::ALL {
            let palette = planet_palette(planet);
            for hex in [palette.primary, palette.secondary, palette.accent] {
                assert!(hex.starts_with('#') && hex.len() == 7, "{}", hex);
            }
            assert!(palette.glow.starts_with("rgba("));
        }
    }

    #[test]
    fn mapping_is_direct() {
        assert_eq!(planet_palette(Planet::Mars).primary, "#DC143C");
        assert_eq!(planet_palette(Planet::Pluto).secondary, "#0D0D0D");
    }
}
