//! Static reference data for the three dice: planets (what energy), signs
//! (how it manifests), houses (where in life). Each dimension has exactly 12
//! members; the combination space is fixed at 12^3 = 1728.

use crate::{House, Planet, Sign};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct PlanetInfo {
    pub planet: Planet,
    pub name: &'static str,
    pub symbol: &'static str,
    pub keywords: &'static [&'static str],
    pub meaning: &'static str,
}

pub struct SignInfo {
    pub sign: Sign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub keywords: &'static [&'static str],
    pub meaning: &'static str,
}

pub struct HouseInfo {
    pub number: u8,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub meaning: &'static str,
}

pub static PLANETS: [PlanetInfo; 12] = [
    PlanetInfo {
        planet: Planet::Sun,
        name: "Sun",
        symbol: "☉",
        keywords: &["Identity", "Vitality", "Purpose", "Self-expression"],
        meaning: "Core self, ego, life force, creativity, and conscious will. The Sun illuminates what needs attention and where you shine.",
    },
    PlanetInfo {
        planet: Planet::Moon,
        name: "Moon",
        symbol: "☽",
        keywords: &["Emotions", "Intuition", "Nurturing", "Subconscious"],
        meaning: "Emotional needs, instincts, habits, and inner security. The Moon reveals what comforts you and how you process feelings.",
    },
    PlanetInfo {
        planet: Planet::Mercury,
        name: "Mercury",
        symbol: "☿",
        keywords: &["Communication", "Thinking", "Learning", "Exchange"],
        meaning: "Mind, communication style, logic, and information processing. Mercury governs how you think, speak, and connect ideas.",
    },
    PlanetInfo {
        planet: Planet::Venus,
        name: "Venus",
        symbol: "♀",
        keywords: &["Love", "Beauty", "Values", "Attraction"],
        meaning: "Love, pleasure, aesthetics, and what you value. Venus shows how you attract and what brings you joy and harmony.",
    },
    PlanetInfo {
        planet: Planet::Mars,
        name: "Mars",
        symbol: "♂",
        keywords: &["Action", "Drive", "Courage", "Desire"],
        meaning: "Will, assertion, physical energy, and how you pursue goals. Mars reveals your fighting spirit and raw motivation.",
    },
    PlanetInfo {
        planet: Planet::Jupiter,
        name: "Jupiter",
        symbol: "♃",
        keywords: &["Expansion", "Luck", "Wisdom", "Growth"],
        meaning: "Abundance, opportunity, faith, and higher learning. Jupiter expands whatever it touches and brings optimism.",
    },
    PlanetInfo {
        planet: Planet::Saturn,
        name: "Saturn",
        symbol: "♄",
        keywords: &["Structure", "Discipline", "Limits", "Mastery"],
        meaning: "Boundaries, responsibility, time, and hard-won achievement. Saturn teaches through challenges and builds lasting foundations.",
    },
    PlanetInfo {
        planet: Planet::Uranus,
        name: "Uranus",
        symbol: "♅",
        keywords: &["Change", "Innovation", "Freedom", "Awakening"],
        meaning: "Sudden change, rebellion, originality, and breakthrough. Uranus disrupts the status quo to liberate and revolutionize.",
    },
    PlanetInfo {
        planet: Planet::Neptune,
        name: "Neptune",
        symbol: "♆",
        keywords: &["Dreams", "Spirituality", "Illusion", "Transcendence"],
        meaning: "Imagination, spirituality, dissolution of boundaries, and universal love. Neptune inspires but can also confuse.",
    },
    PlanetInfo {
        planet: Planet::Pluto,
        name: "Pluto",
        symbol: "♇",
        keywords: &["Transformation", "Power", "Death/Rebirth", "Shadow"],
        meaning: "Deep transformation, hidden power, destruction and regeneration. Pluto reveals what must die so something new can emerge.",
    },
    PlanetInfo {
        planet: Planet::NorthNode,
        name: "North Node",
        symbol: "☊",
        keywords: &["Destiny", "Growth", "Future", "Soul Purpose"],
        meaning: "Your soul's growth direction, karmic path forward, and destined lessons. The North Node points to unfamiliar but necessary territory.",
    },
    PlanetInfo {
        planet: Planet::SouthNode,
        name: "South Node",
        symbol: "☋",
        keywords: &["Past", "Comfort Zone", "Gifts", "Release"],
        meaning: "Past life gifts, innate talents, and patterns to release. The South Node shows what's familiar but may hold you back.",
    },
];

pub static SIGNS: [SignInfo; 12] = [
    SignInfo {
        sign: Sign::Aries,
        name: "Aries",
        symbol: "♈",
        element: Element::Fire,
        modality: Modality::Cardinal,
        keywords: &["Bold", "Pioneering", "Direct", "Competitive"],
        meaning: "With courage and initiative. Act first, think later. Lead with passion and embrace new beginnings.",
    },
    SignInfo {
        sign: Sign::Taurus,
        name: "Taurus",
        symbol: "♉",
        element: Element::Earth,
        modality: Modality::Fixed,
        keywords: &["Steady", "Sensual", "Patient", "Resourceful"],
        meaning: "With patience and persistence. Build slowly, value quality. Ground yourself in physical pleasures and security.",
    },
    SignInfo {
        sign: Sign::Gemini,
        name: "Gemini",
        symbol: "♊",
        element: Element::Air,
        modality: Modality::Mutable,
        keywords: &["Curious", "Versatile", "Communicative", "Witty"],
        meaning: "With curiosity and adaptability. Gather information, make connections. Stay mentally agile and embrace variety.",
    },
    SignInfo {
        sign: Sign::Cancer,
        name: "Cancer",
        symbol: "♋",
        element: Element::Water,
        modality: Modality::Cardinal,
        keywords: &["Nurturing", "Protective", "Intuitive", "Emotional"],
        meaning: "With emotional sensitivity and care. Protect what matters, trust your feelings. Create safety and belonging.",
    },
    SignInfo {
        sign: Sign::Leo,
        name: "Leo",
        symbol: "♌",
        element: Element::Fire,
        modality: Modality::Fixed,
        keywords: &["Creative", "Generous", "Proud", "Dramatic"],
        meaning: "With confidence and heart. Express yourself boldly, lead with warmth. Shine your light and inspire others.",
    },
    SignInfo {
        sign: Sign::Virgo,
        name: "Virgo",
        symbol: "♍",
        element: Element::Earth,
        modality: Modality::Mutable,
        keywords: &["Analytical", "Helpful", "Precise", "Humble"],
        meaning: "With discernment and service. Perfect the details, be useful. Improve systems and offer practical help.",
    },
    SignInfo {
        sign: Sign::Libra,
        name: "Libra",
        symbol: "♎",
        element: Element::Air,
        modality: Modality::Cardinal,
        keywords: &["Diplomatic", "Harmonious", "Fair", "Partnering"],
        meaning: "With grace and balance. Seek fairness, value relationships. Create beauty and find the middle way.",
    },
    SignInfo {
        sign: Sign::Scorpio,
        name: "Scorpio",
        symbol: "♏",
        element: Element::Water,
        modality: Modality::Fixed,
        keywords: &["Intense", "Transformative", "Probing", "Loyal"],
        meaning: "With depth and intensity. Go beneath the surface, embrace transformation. Trust through vulnerability.",
    },
    SignInfo {
        sign: Sign::Sagittarius,
        name: "Sagittarius",
        symbol: "♐",
        element: Element::Fire,
        modality: Modality::Mutable,
        keywords: &["Adventurous", "Optimistic", "Philosophical", "Free"],
        meaning: "With enthusiasm and vision. Explore new horizons, seek meaning. Expand your worldview and aim high.",
    },
    SignInfo {
        sign: Sign::Capricorn,
        name: "Capricorn",
        symbol: "♑",
        element: Element::Earth,
        modality: Modality::Cardinal,
        keywords: &["Ambitious", "Disciplined", "Strategic", "Responsible"],
        meaning: "With determination and strategy. Build for the long term, earn respect. Master your craft through dedication.",
    },
    SignInfo {
        sign: Sign::Aquarius,
        name: "Aquarius",
        symbol: "♒",
        element: Element::Air,
        modality: Modality::Fixed,
        keywords: &["Innovative", "Humanitarian", "Independent", "Visionary"],
        meaning: "With originality and idealism. Think differently, serve the collective. Champion progress and individuality.",
    },
    SignInfo {
        sign: Sign::Pisces,
        name: "Pisces",
        symbol: "♓",
        element: Element::Water,
        modality: Modality::Mutable,
        keywords: &["Compassionate", "Imaginative", "Spiritual", "Flowing"],
        meaning: "With empathy and imagination. Dissolve boundaries, trust the unseen. Surrender to the flow and dream big.",
    },
];

pub static HOUSES: [HouseInfo; 12] = [
    HouseInfo {
        number: 1,
        name: "Self & Identity",
        keywords: &["Appearance", "First impressions", "Physical body", "Persona"],
        meaning: "Your self-image, physical appearance, and how you present to the world. The mask you wear and your approach to new beginnings.",
    },
    HouseInfo {
        number: 2,
        name: "Resources & Values",
        keywords: &["Money", "Possessions", "Self-worth", "Material security"],
        meaning: "Your relationship with money, possessions, and material security. What you value and how you build tangible resources.",
    },
    HouseInfo {
        number: 3,
        name: "Communication & Mind",
        keywords: &["Siblings", "Neighbors", "Short trips", "Daily communication"],
        meaning: "Daily communication, learning, siblings, and immediate environment. How you process and share information.",
    },
    HouseInfo {
        number: 4,
        name: "Home & Family",
        keywords: &["Roots", "Parents", "Ancestry", "Private life"],
        meaning: "Your home, family, roots, and inner foundation. Where you come from and what makes you feel secure.",
    },
    HouseInfo {
        number: 5,
        name: "Creativity & Pleasure",
        keywords: &["Romance", "Children", "Play", "Self-expression"],
        meaning: "Creative expression, romance, children, and fun. Where you play, take risks, and express your unique spark.",
    },
    HouseInfo {
        number: 6,
        name: "Work & Health",
        keywords: &["Daily routines", "Service", "Wellness", "Duties"],
        meaning: "Daily work, health habits, service to others, and routines. How you maintain your body and be useful.",
    },
    HouseInfo {
        number: 7,
        name: "Relationships & Partners",
        keywords: &["Marriage", "Business partners", "Contracts", "Open enemies"],
        meaning: "One-on-one relationships, marriage, partnerships, and how you relate to significant others.",
    },
    HouseInfo {
        number: 8,
        name: "Transformation & Shared Resources",
        keywords: &["Intimacy", "Death", "Inheritance", "Other's money"],
        meaning: "Deep transformation, shared resources, intimacy, and psychological depths. What you merge with others.",
    },
    HouseInfo {
        number: 9,
        name: "Philosophy & Expansion",
        keywords: &["Higher education", "Travel", "Beliefs", "Publishing"],
        meaning: "Higher learning, long-distance travel, philosophy, and expansion of consciousness. Your search for meaning.",
    },
    HouseInfo {
        number: 10,
        name: "Career & Public Image",
        keywords: &["Reputation", "Achievement", "Authority", "Legacy"],
        meaning: "Career, public reputation, achievements, and your place in society. How the world sees your contributions.",
    },
    HouseInfo {
        number: 11,
        name: "Community & Dreams",
        keywords: &["Friends", "Groups", "Hopes", "Social causes"],
        meaning: "Friendships, groups, hopes for the future, and social networks. Your tribe and collective aspirations.",
    },
    HouseInfo {
        number: 12,
        name: "Unconscious & Spirituality",
        keywords: &["Hidden matters", "Solitude", "Karma", "Self-undoing"],
        meaning: "The unconscious, hidden strengths and weaknesses, spirituality, and endings. What lies beneath the surface.",
    },
];

// Table order matches the enum declaration order, so lookups are a direct index.

pub fn planet_info(planet: Planet) -> &'static PlanetInfo {
    &PLANETS[planet as usize]
}

pub fn sign_info(sign: Sign) -> &'static SignInfo {
    &SIGNS[sign as usize]
}

pub fn house_info(house: House) -> &'static HouseInfo {
    &HOUSES[(house.number() - 1) as usize]
}

/// Short house name: the portion of the display name before the "&".
pub fn short_house_name(house: House) -> &'static str {
    let name = house_info(house).name;
    name.split(" & ").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_round_trips_identity_for_every_combination() {
        for planet in Planet::ALL {
            for sign in Sign::ALL {
                for house in House::ALL {
                    assert_eq!(planet_info(planet).planet, planet);
                    assert_eq!(sign_info(sign).sign, sign);
                    assert_eq!(house_info(house).number, house.number());
                }
            }
        }
    }

    #[test]
    fn names_are_unique_within_each_dimension() {
        let mut planet_names: Vec<_> = PLANETS.iter().map(|p| p.name).collect();
        planet_names.sort();
        planet_names.dedup();
        assert_eq!(planet_names.len(), 12);

        let mut sign_names: Vec<_> = SIGNS.iter().map(|s| s.name).collect();
        sign_names.sort();
        sign_names.dedup();
        assert_eq!(sign_names.len(), 12);

        let numbers: Vec<_> = HOUSES.iter().map(|h| h.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn symbols_are_single_characters() {
        for p in &PLANETS {
            assert_eq!(p.symbol.chars().count(), 1, "planet {}", p.name);
        }
        for s in &SIGNS {
            assert_eq!(s.symbol.chars().count(), 1, "sign {}", s.name);
        }
    }

    #[test]
    fn every_record_has_keywords_and_meaning() {
        for p in &PLANETS {
            assert_eq!(p.keywords.len(), 4);
            assert!(!p.meaning.is_empty());
        }
        for s in &SIGNS {
            assert_eq!(s.keywords.len(), 4);
            assert!(!s.meaning.is_empty());
        }
        for h in &HOUSES {
            assert_eq!(h.keywords.len(), 4);
            assert!(!h.meaning.is_empty());
        }
    }

    #[test]
    fn zodiac_attributes_are_balanced() {
        // 4 elements x 3 signs, 3 modalities x 4 signs
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            assert_eq!(SIGNS.iter().filter(|s| s.element == element).count(), 3);
        }
        for modality in [Modality::Cardinal, Modality::Fixed, Modality::Mutable] {
            assert_eq!(SIGNS.iter().filter(|s| s.modality == modality).count(), 4);
        }
    }

    #[test]
    fn short_house_name_drops_the_ampersand_part() {
        assert_eq!(short_house_name(House::new(1).unwrap()), "Self");
        assert_eq!(short_house_name(House::new(7).unwrap()), "Relationships");
        assert_eq!(short_house_name(House::new(12).unwrap()), "Unconscious");
    }
}
