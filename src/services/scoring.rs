//! Relevance scoring of corpus drills against a session request.
//!
//! The scorer is a pure ranking function: for each drill it produces an
//! integer score where negative means "excluded" and the magnitude orders
//! eligible drills. The rules, in order:
//!
//! 1. Methodology is a hard gate: a drill whose methodology set is non-empty
//!    and contains neither the requested key nor the "all" sentinel scores
//!    -1 and is not scored further.
//! 2. Exact methodology match +3, "all" sentinel +1, empty set +0.
//! 3. Focus match +5: the drill category equals a requested focus area, or
//!    any tag contains one as a substring (both case-insensitive). The
//!    substring match is intentionally loose — a drill tagged
//!    "warmup games" matches the focus query "game".
//! 4. Ice match +2: empty set, "any" sentinel, or a member that is a
//!    substring of the requested configuration. Never a gate and never a
//!    penalty; a mismatch only withholds the bonus.
//! 5. Age match: +4 when the drill's age groups are empty or intersect the
//!    requested token set, -3 otherwise. The only rule that can push a
//!    score negative past the gate. Contributes 0 when the request yields
//!    no age tokens.

use std::collections::HashSet;

use crate::models::drill::{DrillRecord, ScoredDrill};

/// Sentinel in a drill's methodology set matching any requested methodology.
pub const METHODOLOGY_ALL: &str = "all";
/// Sentinel in a drill's ice-config set matching any configuration.
pub const ICE_ANY: &str = "any";

const EXACT_METHODOLOGY_BONUS: i32 = 3;
const ALL_METHODOLOGY_BONUS: i32 = 1;
const FOCUS_BONUS: i32 = 5;
const ICE_BONUS: i32 = 2;
const AGE_BONUS: i32 = 4;
const AGE_PENALTY: i32 = 3;
const METHODOLOGY_GATE_SCORE: i32 = -1;

/// Lower-cased, trimmed copy used by all loose matching rules.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Expand an age category into its normalized U-token set.
///
/// "U12"-style tokens map to themselves. Free-text Czech categories map to
/// fixed buckets; the bucket boundaries are part of the scoring contract
/// and must not be "improved":
///
/// - "přípravka" / "mini" → U7, U8, U9
/// - "mladší žáci" / "elév" → U10, U11, U12
/// - "starší žáci" → U13, U14, U15
/// - "dorost" / "junior" → U16, U17, U18
///
/// Anything else yields an empty set, which disables age scoring entirely.
pub fn age_tokens(age_category: &str) -> HashSet<String> {
    let category = normalize(age_category);
    let mut tokens = HashSet::new();
    if category.is_empty() {
        return tokens;
    }

    let bucket: &[&str] = if category.contains("přípravka") || category.contains("mini") {
        &["U7", "U8", "U9"]
    } else if category.contains("mladší") || category.contains("elév") {
        &["U10", "U11", "U12"]
    } else if category.contains("starší") {
        &["U13", "U14", "U15"]
    } else if category.contains("dorost") || category.contains("junior") {
        &["U16", "U17", "U18"]
    } else {
        &[]
    };
    if !bucket.is_empty() {
        tokens.extend(bucket.iter().map(|t| t.to_string()));
        return tokens;
    }

    if category.starts_with('u')
        && category.len() > 1
        && category[1..].chars().all(|c| c.is_ascii_digit())
    {
        tokens.insert(category.to_uppercase());
    }
    tokens
}

/// Request parameters pre-normalized once and shared across a scoring pass.
#[derive(Debug, Clone)]
pub struct ScoreContext {
    methodology: String,
    focus_areas: Vec<String>,
    ice_config: String,
    age_tokens: HashSet<String>,
}

impl ScoreContext {
    pub fn new(
        methodology: &str,
        focus_areas: &[String],
        ice_config: &str,
        age_category: &str,
    ) -> Self {
        Self {
            methodology: normalize(methodology),
            focus_areas: focus_areas
                .iter()
                .map(|f| normalize(f))
                .filter(|f| !f.is_empty())
                .collect(),
            ice_config: normalize(ice_config),
            age_tokens: age_tokens(age_category),
        }
    }
}

/// Score a single drill against the request. Pure and idempotent.
pub fn score_drill(drill: &DrillRecord, ctx: &ScoreContext) -> i32 {
    let mut score = 0;

    // Methodology hard gate and weight.
    if !drill.methodologies.is_empty() {
        let keys: Vec<String> = drill.methodologies.iter().map(|m| normalize(m)).collect();
        if keys.iter().any(|k| *k == ctx.methodology) {
            score += EXACT_METHODOLOGY_BONUS;
        } else if keys.iter().any(|k| k == METHODOLOGY_ALL) {
            score += ALL_METHODOLOGY_BONUS;
        } else {
            return METHODOLOGY_GATE_SCORE;
        }
    }

    // Focus areas: category equality or tag substring.
    if !ctx.focus_areas.is_empty() {
        let category = normalize(&drill.category);
        let tags: Vec<String> = drill.tags.iter().map(|t| normalize(t)).collect();
        let matched = ctx
            .focus_areas
            .iter()
            .any(|focus| category == *focus || tags.iter().any(|t| t.contains(focus.as_str())));
        if matched {
            score += FOCUS_BONUS;
        }
    }

    // Ice configuration: bonus only, never gating.
    let ice_eligible = drill.ice_configs.is_empty()
        || drill.ice_configs.iter().any(|c| {
            let c = normalize(c);
            c == ICE_ANY || ctx.ice_config.contains(c.as_str())
        });
    if ice_eligible {
        score += ICE_BONUS;
    }

    // Age eligibility: the only penalizing rule.
    if !ctx.age_tokens.is_empty() {
        let age_eligible = drill.age_groups.is_empty()
            || drill
                .age_groups
                .iter()
                .any(|g| ctx.age_tokens.contains(&g.to_uppercase()));
        if age_eligible {
            score += AGE_BONUS;
        } else {
            score -= AGE_PENALTY;
        }
    }

    score
}

/// Score every corpus drill. The result keeps corpus order and full signed
/// scores; callers filter and sort.
pub fn score_corpus<'a>(corpus: &'a [DrillRecord], ctx: &ScoreContext) -> Vec<ScoredDrill<'a>> {
    corpus
        .iter()
        .map(|drill| ScoredDrill {
            drill,
            score: score_drill(drill, ctx),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drill::DrillType;

    fn drill(
        methodologies: &[&str],
        category: &str,
        tags: &[&str],
        age_groups: &[&str],
        ice_configs: &[&str],
    ) -> DrillRecord {
        DrillRecord {
            title: "Test drill".to_string(),
            content: String::new(),
            category: category.to_string(),
            drill_type: DrillType::Drill,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            methodologies: methodologies.iter().map(|m| m.to_string()).collect(),
            age_groups: age_groups.iter().map(|a| a.to_string()).collect(),
            ice_configs: ice_configs.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn ctx(methodology: &str, focus: &[&str], ice: &str, age: &str) -> ScoreContext {
        let focus: Vec<String> = focus.iter().map(|f| f.to_string()).collect();
        ScoreContext::new(methodology, &focus, ice, age)
    }

    #[test]
    fn methodology_gate_excludes_regardless_of_other_matches() {
        // Would otherwise collect focus, ice, and age bonuses.
        let d = drill(&["Swedish"], "Skating", &["skating"], &["U12"], &["any"]);
        let c = ctx("Czech", &["Skating"], "Full Ice", "U12");
        assert_eq!(score_drill(&d, &c), -1);
    }

    #[test]
    fn methodology_weights() {
        let c = ctx("Czech", &[], "", "");
        assert_eq!(score_drill(&drill(&["Czech"], "X", &[], &[], &[]), &c), 3 + 2);
        assert_eq!(score_drill(&drill(&["all"], "X", &[], &[], &[]), &c), 1 + 2);
        // Empty set passes the gate with no bonus.
        assert_eq!(score_drill(&drill(&[], "X", &[], &[], &[]), &c), 2);
        // Exact match wins over a co-listed sentinel.
        assert_eq!(
            score_drill(&drill(&["all", "Czech"], "X", &[], &[], &[]), &c),
            3 + 2
        );
    }

    #[test]
    fn methodology_match_is_case_insensitive() {
        let c = ctx("CZECH", &[], "", "");
        assert_eq!(score_drill(&drill(&["czech"], "X", &[], &[], &[]), &c), 5);
    }

    #[test]
    fn focus_matches_category_exactly() {
        let d = drill(&[], "Skating", &[], &[], &[]);
        assert_eq!(score_drill(&d, &ctx("", &["skating"], "", "")), 5 + 2);
    }

    #[test]
    fn focus_matches_tag_substring() {
        // Deliberate fuzziness: "warmup games" contains "game".
        let d = drill(&[], "Skating", &["warmup games"], &[], &[]);
        assert_eq!(score_drill(&d, &ctx("", &["game"], "", "")), 5 + 2);
    }

    #[test]
    fn no_focus_requested_is_neutral() {
        let d = drill(&[], "Skating", &[], &[], &[]);
        assert_eq!(score_drill(&d, &ctx("", &[], "", "")), 2);
    }

    #[test]
    fn ice_mismatch_withholds_bonus_without_penalty() {
        let matched = drill(&[], "X", &[], &[], &["Full Ice"]);
        let sentinel = drill(&[], "X", &[], &[], &["any"]);
        let mismatched = drill(&[], "X", &[], &[], &["Half Ice"]);
        let c = ctx("", &[], "Full Ice", "");
        assert_eq!(score_drill(&matched, &c), 2);
        assert_eq!(score_drill(&sentinel, &c), 2);
        assert_eq!(score_drill(&mismatched, &c), 0);
    }

    #[test]
    fn ice_member_matches_as_substring() {
        let d = drill(&[], "X", &[], &[], &["ice"]);
        assert_eq!(score_drill(&d, &ctx("", &[], "Full Ice", "")), 2);
    }

    #[test]
    fn age_bonus_and_penalty() {
        let c = ctx("", &[], "", "U12");
        let eligible = drill(&[], "X", &[], &["U11", "U12"], &[]);
        let open = drill(&[], "X", &[], &[], &[]);
        let wrong = drill(&[], "X", &[], &["U16"], &[]);
        assert_eq!(score_drill(&eligible, &c), 2 + 4);
        assert_eq!(score_drill(&open, &c), 2 + 4);
        assert_eq!(score_drill(&wrong, &c), 2 - 3);
    }

    #[test]
    fn age_penalty_can_drive_total_negative() {
        let d = drill(&[], "X", &[], &["U16"], &["Half Ice"]);
        assert_eq!(score_drill(&d, &ctx("", &[], "Full Ice", "U12")), -3);
    }

    #[test]
    fn unknown_age_category_disables_age_scoring() {
        let d = drill(&[], "X", &[], &["U16"], &[]);
        assert_eq!(score_drill(&d, &ctx("", &[], "", "senior men")), 2);
    }

    #[test]
    fn age_token_buckets() {
        let expect = |input: &str, tokens: &[&str]| {
            let got = age_tokens(input);
            let want: HashSet<String> = tokens.iter().map(|t| t.to_string()).collect();
            assert_eq!(got, want, "bucket mismatch for {input:?}");
        };
        expect("U12", &["U12"]);
        expect("u9", &["U9"]);
        expect("přípravka", &["U7", "U8", "U9"]);
        expect("Mini hokej", &["U7", "U8", "U9"]);
        expect("mladší žáci", &["U10", "U11", "U12"]);
        expect("Elév", &["U10", "U11", "U12"]);
        expect("starší žáci", &["U13", "U14", "U15"]);
        expect("dorost", &["U16", "U17", "U18"]);
        expect("junior", &["U16", "U17", "U18"]);
        expect("", &[]);
        expect("adult league", &[]);
    }

    #[test]
    fn scoring_is_idempotent() {
        let d = drill(&["Czech"], "Skating", &["edges"], &["U12"], &["Full Ice"]);
        let c = ctx("Czech", &["Skating"], "Full Ice", "mladší žáci");
        let first = score_drill(&d, &c);
        let second = score_drill(&d, &c);
        assert_eq!(first, second);
        assert_eq!(first, 3 + 5 + 2 + 4);
    }

    #[test]
    fn score_corpus_keeps_order_and_signs() {
        let corpus = vec![
            drill(&["Swedish"], "X", &[], &[], &[]),
            drill(&["Czech"], "X", &[], &[], &[]),
        ];
        let scored = score_corpus(&corpus, &ctx("Czech", &[], "", ""));
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, -1);
        assert_eq!(scored[1].score, 5);
    }
}
