//! House glyphs: the central symbol of the visual. Each path lives in a
//! 100x100 viewBox and is drawn at a fixed position and scale.

use astrodice_core::House;

pub struct HouseGlyph {
    pub name: &'static str,
    pub path: &'static str,
    pub stroke_width: f32,
}

// Index 0 is house 1.
static GLYPHS: [HouseGlyph; 12] = [
    HouseGlyph {
        name: "self-mirror",
        path: "M50,10 A40,40 0 1,1 49.99,10 M50,20 L50,80",
        stroke_width: 3.0,
    },
    HouseGlyph {
        name: "treasure-chest",
        path: "M20,40 L80,40 L80,80 L20,80 Z M30,40 L30,30 L70,30 L70,40 M45,55 A5,5 0 1,1 55,55 A5,5 0 1,1 45,55",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "messenger-wings",
        path: "M50,80 L50,30 M30,50 L50,30 L70,50 M25,40 L50,20 L75,40",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "home-hearth",
        path: "M50,15 L85,45 L85,85 L15,85 L15,45 Z M40,85 L40,60 L60,60 L60,85",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "creative-star",
        path: "M50,10 L61,40 L95,40 L68,58 L79,90 L50,70 L21,90 L32,58 L5,40 L39,40 Z",
        stroke_width: 2.0,
    },
    HouseGlyph {
        name: "service-hands",
        path: "M25,80 L25,50 Q25,30 40,30 L60,30 Q75,30 75,50 L75,80 M40,50 L40,65 M60,50 L60,65",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "partnership-scales",
        path: "M50,20 L50,75 M25,75 L75,75 M20,40 L50,30 L80,40 M15,40 L15,60 L35,60 L35,40 M65,40 L65,60 L85,60 L85,40",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "phoenix-rebirth",
        path: "M50,85 L50,50 M35,65 L50,50 L65,65 M25,35 Q50,10 75,35 M35,25 Q50,5 65,25",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "arrow-horizon",
        path: "M20,80 L80,20 M55,20 L80,20 L80,45 M30,50 Q50,30 70,50",
        stroke_width: 3.0,
    },
    HouseGlyph {
        name: "mountain-summit",
        path: "M10,85 L50,20 L90,85 Z M35,85 L50,55 L65,85",
        stroke_width: 2.5,
    },
    HouseGlyph {
        name: "community-network",
        path: "M50,25 A10,10 0 1,1 50.01,25 M25,60 A10,10 0 1,1 25.01,60 M75,60 A10,10 0 1,1 75.01,60 M50,35 L30,55 M50,35 L70,55 M35,65 L65,65",
        stroke_width: 2.0,
    },
    HouseGlyph {
        name: "cosmic-eye",
        path: "M10,50 Q50,10 90,50 Q50,90 10,50 M50,35 A15,15 0 1,1 50.01,35",
        stroke_width: 2.5,
    },
];

pub fn house_glyph(house: House) -> &'static HouseGlyph {
    &GLYPHS[(house.number() - 1) as usize]
}
