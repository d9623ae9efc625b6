//! Coaching methodology knowledge base.
//!
//! Static lookup of the named coaching philosophies the planner understands.
//! The descriptions are rendered verbatim by the frontend and injected into
//! generation-service prompts by the caller; nothing here is interpreted.

/// One coaching philosophy with its descriptive text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Methodology {
    /// Lookup key, matched case-insensitively.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Short emphasis keywords rendered as chips next to the description.
    pub emphasis: &'static [&'static str],
}

/// All supported methodologies.
pub const METHODOLOGIES: [Methodology; 5] = [
    Methodology {
        key: "Canadian",
        name: "Canadian school",
        description: "Built around compete level and north-south hockey. \
            Practices lean on battle drills, net-front play, and high-tempo \
            repetition; players are expected to win races and finish checks. \
            Shooting volume and physical engagement are prioritized over \
            elaborate structure at younger ages.",
        emphasis: &["compete", "battles", "shooting volume", "tempo"],
    },
    Methodology {
        key: "Swedish",
        name: "Swedish school",
        description: "Possession-first development with heavy use of small \
            area games. Players learn to scan before receiving, support the \
            puck carrier, and value controlled exits over chip-and-chase. \
            Sessions favor many touches in tight spaces and delayed \
            specialization.",
        emphasis: &["possession", "scanning", "support play", "small area games"],
    },
    Methodology {
        key: "Finnish",
        name: "Finnish school",
        description: "Skill acquisition through individual technique work \
            layered into game situations. Strong tradition of goaltending \
            instruction and one-on-one skill: edges, dekes, and deception \
            get dedicated station time in every practice.",
        emphasis: &["individual skill", "deception", "goaltending", "stations"],
    },
    Methodology {
        key: "Czech",
        name: "Czech school",
        description: "Creative puck play grounded in strong skating \
            mechanics. Practices combine classical skating technique blocks \
            with improvisational small games, keeping a high share of ice \
            time with the puck on the stick. Hockey IQ is trained through \
            guided questions rather than fixed patterns.",
        emphasis: &["creativity", "skating technique", "puck play", "hockey IQ"],
    },
    Methodology {
        key: "Hybrid",
        name: "Hybrid approach",
        description: "Blends the national schools by training phase: \
            possession games in warm-up blocks, technique stations in the \
            main block, and compete games to finish. The default when a \
            coach has no explicit preference.",
        emphasis: &["balanced", "phased", "adaptable"],
    },
];

/// Case-insensitive lookup by methodology key.
pub fn find_methodology(key: &str) -> Option<&'static Methodology> {
    let key = key.trim();
    METHODOLOGIES
        .iter()
        .find(|m| m.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_methodology("czech").unwrap().key, "Czech");
        assert_eq!(find_methodology(" HYBRID ").unwrap().key, "Hybrid");
        assert!(find_methodology("soviet").is_none());
    }

    #[test]
    fn every_entry_has_text() {
        for m in &METHODOLOGIES {
            assert!(!m.description.is_empty(), "{} has no description", m.key);
            assert!(!m.emphasis.is_empty(), "{} has no emphasis", m.key);
        }
    }
}
