//! Sign border patterns: small path fragments tiled around the canvas edge.
//! Each tile lives in a 40x20 viewBox.

use astrodice_core::Sign;

pub struct BorderPattern {
    pub name: &'static str,
    pub path: &'static str,
    pub stroke_width: f32,
}

// Order matches Sign::ALL.
static PATTERNS: [BorderPattern; 12] = [
    BorderPattern {
        name: "angular-rams-horns",
        path: "M0,10 L10,0 L20,10 L30,0 L40,10",
        stroke_width: 2.0,
    },
    BorderPattern {
        name: "steady-waves",
        path: "M0,10 Q10,0 20,10 Q30,20 40,10",
        stroke_width: 2.5,
    },
    BorderPattern {
        name: "twin-lines",
        path: "M0,5 L40,5 M0,15 L40,15",
        stroke_width: 1.5,
    },
    BorderPattern {
        name: "shell-curves",
        path: "M0,20 Q10,0 20,10 Q30,20 40,0",
        stroke_width: 2.0,
    },
    BorderPattern {
        name: "flame-peaks",
        path: "M0,20 L10,5 L20,20 L30,5 L40,20",
        stroke_width: 2.5,
    },
    BorderPattern {
        name: "wheat-stalks",
        path: "M10,20 L10,0 M5,15 L10,10 L15,15 M3,10 L10,5 L17,10",
        stroke_width: 1.5,
    },
    BorderPattern {
        name: "balanced-scales",
        path: "M0,10 L15,10 M25,10 L40,10 M20,5 L20,15",
        stroke_width: 2.0,
    },
    BorderPattern {
        name: "stinger-points",
        path: "M0,10 L15,10 L20,0 L25,10 L40,10",
        stroke_width: 2.5,
    },
    BorderPattern {
        name: "arrow-flights",
        path: "M0,20 L20,0 M15,0 L20,0 L20,5",
        stroke_width: 2.0,
    },
    BorderPattern {
        name: "mountain-peaks",
        path: "M0,20 L10,5 L20,15 L30,0 L40,20",
        stroke_width: 2.5,
    },
    BorderPattern {
        name: "water-waves",
        path: "M0,7 Q10,3 20,7 Q30,11 40,7 M0,13 Q10,9 20,13 Q30,17 40,13",
        stroke_width: 1.5,
    },
    BorderPattern {
        name: "fish-scales",
        path: "M0,20 Q20,0 40,20 M10,20 Q20,10 30,20",
        stroke_width: 2.0,
    },
];

pub fn sign_pattern(sign: Sign) -> &'static BorderPattern {
    &PATTERNS[sign as usize]
}
