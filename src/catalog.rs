// MBTI type catalog: static reference content for the 16 personality types.
//
// Pure lookup data shown next to predictions and in the gallery. It is not
// derived from the model; a label the catalog doesn't know is still ranked
// and displayed, just without these details.

use serde::Serialize;

/// Reference content for one personality type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeProfile {
    /// Four-letter code, e.g. "INTJ"
    pub code: &'static str,
    /// Display name, e.g. "The Architect"
    pub name: &'static str,
    pub description: &'static str,
    /// Short archetype caption shown with the glyph
    pub logo: &'static str,
    pub glyph: &'static str,
    pub image_url: &'static str,
    pub traits: &'static [&'static str],
}

/// All 16 types in gallery order.
pub const TYPES: [TypeProfile; 16] = [
    TypeProfile {
        code: "INTJ",
        name: "The Architect",
        description: "Imaginative, strategic thinkers with a plan for everything.",
        logo: "Mastermind logo",
        glyph: "🧠",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQQrBHrqnLOpm1a2rqVzp0CZCYvaQZHvUE6fw&s",
        traits: &["Strategic", "Innovative", "Analytical"],
    },
    TypeProfile {
        code: "INTP",
        name: "The Logician",
        description: "Innovative inventors with an unquenchable thirst for knowledge.",
        logo: "Thinker logo",
        glyph: "🔬",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQU77nhwMwYB3bI-6x1yrFiQQ_Ft_8bPMZ7mXjd_-seheUpAk3h2dOyLK3iW7-G5A3g3iE&usqp=CAU",
        traits: &["Analytical", "Curious", "Intellectual"],
    },
    TypeProfile {
        code: "ENTJ",
        name: "The Commander",
        description: "Bold, imaginative, and strong-willed leaders.",
        logo: "Leader logo",
        glyph: "⚔️",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTZs5ETg7-JPZ9ywP8KdjoJ4A2Z3TCu24Jalw&s",
        traits: &["Confident", "Decisive", "Organized"],
    },
    TypeProfile {
        code: "ENTP",
        name: "The Debater",
        description: "Smart and curious thinkers who love intellectual challenges.",
        logo: "Debater logo",
        glyph: "💡",
        image_url: "https://i.pinimg.com/474x/70/61/92/706192240fc2aac137dacbfd8c2a6e5f.jpg",
        traits: &["Curious", "Energetic", "Innovative"],
    },
    TypeProfile {
        code: "INFJ",
        name: "The Advocate",
        description: "Quiet and mystical, yet inspiring and tireless idealists.",
        logo: "Counselor logo",
        glyph: "🌿",
        image_url: "https://p7.hiclipart.com/preview/396/737/277/infj-personality-type-myers-briggs-type-indicator-personality-test-infj.jpg",
        traits: &["Insightful", "Altruistic", "Idealistic"],
    },
    TypeProfile {
        code: "INFP",
        name: "The Mediator",
        description: "Poetic, kind, and altruistic, always eager to help a good cause.",
        logo: "Healer logo",
        glyph: "💖",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTp1D2KcUNw6DhmEanbej_7iDDcM-cefU6aRg&s",
        traits: &["Empathetic", "Creative", "Idealistic"],
    },
    TypeProfile {
        code: "ENFJ",
        name: "The Protagonist",
        description: "Charismatic and inspiring leaders.",
        logo: "Teacher logo",
        glyph: "🌟",
        image_url: "https://i.pinimg.com/474x/9e/fe/ee/9efeee00dd3de2f08464f2dd0e080df3.jpg",
        traits: &["Charismatic", "Organized", "Empathetic"],
    },
    TypeProfile {
        code: "ENFP",
        name: "The Campaigner",
        description: "Enthusiastic, creative, and sociable free spirits.",
        logo: "Champion logo",
        glyph: "🎨",
        image_url: "https://i.pinimg.com/236x/6a/5a/d0/6a5ad07acfec36e2df85195ff47afb00.jpg",
        traits: &["Energetic", "Curious", "Imaginative"],
    },
    TypeProfile {
        code: "ISTJ",
        name: "The Logistician",
        description: "Practical and reliable individuals.",
        logo: "Inspector logo",
        glyph: "📚",
        image_url: "https://i.pinimg.com/236x/3e/ff/d4/3effd4a1437af491adefa54936d611d7.jpg",
        traits: &["Responsible", "Organized", "Practical"],
    },
    TypeProfile {
        code: "ISFJ",
        name: "The Defender",
        description: "Dedicated and warm protectors.",
        logo: "Protector logo",
        glyph: "🏛️",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSx39RFnut1MLvr2P1YSBsxCeDHg_7BPFm9eg&s",
        traits: &["Caring", "Reliable", "Supportive"],
    },
    TypeProfile {
        code: "ESTJ",
        name: "The Executive",
        description: "Excellent administrators and organizers.",
        logo: "Supervisor logo",
        glyph: "🛡️",
        image_url: "https://i.pinimg.com/474x/03/67/9e/03679e33c1dfc9cefd29d93f467541df.jpg",
        traits: &["Efficient", "Organized", "Direct"],
    },
    TypeProfile {
        code: "ESFJ",
        name: "The Consul",
        description: "Caring and popular social personalities.",
        logo: "Provider logo",
        glyph: "🤝",
        image_url: "https://i.pinimg.com/474x/5a/aa/6e/5aaa6e5ec42d3ad6872e35bffd5b0f36.jpg",
        traits: &["Friendly", "Helpful", "Loyal"],
    },
    TypeProfile {
        code: "ISTP",
        name: "The Virtuoso",
        description: "Bold and practical experimenters.",
        logo: "Craftsman logo",
        glyph: "🛠️",
        image_url: "https://ih1.redbubble.net/image.3927653212.1423/st,small,507x507-pad,600x600,f8f8f8.u2.jpg",
        traits: &["Practical", "Observant", "Spontaneous"],
    },
    TypeProfile {
        code: "ISFP",
        name: "The Adventurer",
        description: "Flexible and charming artists.",
        logo: "Artist logo",
        glyph: "🎸",
        image_url: "https://i.pinimg.com/474x/81/89/d0/8189d0e91ec4045d05384347a13a757b.jpg",
        traits: &["Creative", "Adaptable", "Gentle"],
    },
    TypeProfile {
        code: "ESTP",
        name: "The Entrepreneur",
        description: "Energetic and perceptive risk-takers.",
        logo: "Dynamo logo",
        glyph: "🏎️",
        image_url: "https://i.redd.it/5yt9n1xoff6f1.png",
        traits: &["Bold", "Energetic", "Pragmatic"],
    },
    TypeProfile {
        code: "ESFP",
        name: "The Entertainer",
        description: "Spontaneous and enthusiastic people.",
        logo: "Performer logo",
        glyph: "🎭",
        image_url: "https://i.pinimg.com/474x/a3/d1/e7/a3d1e71bbe3dba8fff471a9963643333.jpg",
        traits: &["Outgoing", "Energetic", "Fun-loving"],
    },
];

/// Look up a type by code, ignoring case and surrounding whitespace.
pub fn lookup(code: &str) -> Option<&'static TypeProfile> {
    let code = code.trim();
    TYPES.iter().find(|t| t.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sixteen_unique_codes() {
        let codes: HashSet<&str> = TYPES.iter().map(|t| t.code).collect();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn test_codes_are_valid_mbti() {
        // Each position picks one of two letters: E/I, N/S, F/T, J/P
        let axes = [['E', 'I'], ['N', 'S'], ['F', 'T'], ['J', 'P']];
        for code in TYPES.iter().map(|t| t.code) {
            let letters: Vec<char> = code.chars().collect();
            assert_eq!(letters.len(), 4, "{code} is not four letters");
            for (letter, axis) in letters.iter().zip(&axes) {
                assert!(axis.contains(letter), "{code} has invalid letter {letter}");
            }
        }
    }

    #[test]
    fn test_trait_counts() {
        for t in &TYPES {
            assert!(
                (2..=4).contains(&t.traits.len()),
                "{} has {} traits",
                t.code,
                t.traits.len()
            );
        }
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("intj").unwrap().name, "The Architect");
        assert_eq!(lookup(" ESFP ").unwrap().name, "The Entertainer");
        assert!(lookup("XXXX").is_none());
    }
}
