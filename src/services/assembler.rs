//! Session assembly: deterministic slot filling over the scored corpus.
//!
//! The assembler is a linear state machine with no backtracking. It resolves
//! effective request values (profile values are fallbacks only), ranks the
//! corpus through the scorer, layers the coach's preference boosts on top,
//! and fills warm-up, main stations, and finish with drills that are unique
//! within the session. Every failure path returns `None`: the caller owns
//! the fallback to the generation service, and this module never calls out.
//!
//! Each call builds its own used-title set and returns a freshly built
//! [`SessionPlan`], so concurrent calls share nothing mutable.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::Utc;
use log::debug;

use crate::knowledge::corpus::drill_corpus;
use crate::models::drill::{CoachCustomDrill, DrillRecord, DrillType, ScoredDrill};
use crate::models::request::{CoachProfile, FeedbackSnapshot, SessionRequest};
use crate::models::session::{
    AssemblySource, DiagramTemplate, SessionActivity, SessionMetadata, SessionPlan, SkillWeight,
    StationSlot, ZoneArea, ZONE_PALETTE,
};
use crate::services::scoring::{normalize, score_corpus, ScoreContext};
use crate::services::zones::{computed_zones, infer_rink_view, LayoutTemplate};

/// Methodology used when neither the request nor the profile names one.
pub const DEFAULT_METHODOLOGY: &str = "Hybrid";
/// Drill/game ratio used when neither the request nor the profile sets one.
pub const DEFAULT_DRILL_RATIO: u8 = 50;

const FAVORITE_BOOST: i32 = 10;
const HIGH_RATED_BOOST: i32 = 5;
/// Share of the total duration given to the warm-up and to the finish.
const EDGE_SLOT_FRACTION: f64 = 0.12;

/// Assemble a session from the embedded corpus.
///
/// Returns `None` when the local data cannot fill every slot; the caller
/// then falls back to the generation service.
pub fn assemble_session(
    request: &SessionRequest,
    profile: &CoachProfile,
    feedback: Option<&FeedbackSnapshot>,
    custom_drills: &[CoachCustomDrill],
) -> Option<SessionPlan> {
    assemble_with_corpus(drill_corpus(), request, profile, feedback, custom_drills)
}

/// Assemble a session from an explicit corpus. Exposed for callers that
/// stage their own drill collections (and for tests).
pub fn assemble_with_corpus(
    corpus: &[DrillRecord],
    request: &SessionRequest,
    profile: &CoachProfile,
    feedback: Option<&FeedbackSnapshot>,
    custom_drills: &[CoachCustomDrill],
) -> Option<SessionPlan> {
    // Effective request values; profile entries are fallbacks only.
    let methodology = request
        .methodology
        .clone()
        .or_else(|| profile.preferred_methodology.clone())
        .unwrap_or_else(|| DEFAULT_METHODOLOGY.to_string());
    let age_category = request
        .age_category
        .clone()
        .or_else(|| profile.preferred_age_category.clone())
        .unwrap_or_default();
    let drill_ratio = request
        .drill_ratio
        .or(profile.default_drill_ratio)
        .unwrap_or(DEFAULT_DRILL_RATIO);

    let empty = FeedbackSnapshot::default();
    let feedback = feedback.unwrap_or(&empty);
    let banned: HashSet<String> = feedback.banned_titles.iter().map(|t| normalize(t)).collect();
    let favorites: HashSet<String> = feedback
        .favorite_titles
        .iter()
        .map(|t| normalize(t))
        .collect();
    let high_rated: HashSet<String> = feedback
        .high_rated_titles
        .iter()
        .map(|t| normalize(t))
        .collect();

    // Rank the corpus: positive score, not banned, preference boost layered
    // on top as a stable re-sort.
    let ctx = ScoreContext::new(
        &methodology,
        &request.focus_areas,
        &request.ice_config,
        &age_category,
    );
    let mut eligible: Vec<ScoredDrill> = score_corpus(corpus, &ctx)
        .into_iter()
        .filter(|s| s.score > 0 && !banned.contains(&normalize(&s.drill.title)))
        .collect();
    eligible.sort_by_key(|s| {
        let title = normalize(&s.drill.title);
        let mut boost = 0;
        if favorites.contains(&title) {
            boost += FAVORITE_BOOST;
        }
        if high_rated.contains(&title) {
            boost += HIGH_RATED_BOOST;
        }
        Reverse(s.score + boost)
    });

    let customs: Vec<&CoachCustomDrill> = custom_drills
        .iter()
        .filter(|c| !banned.contains(&normalize(&c.title)))
        .collect();

    // Station count: an explicit zone override wins, then a named template's
    // fixed count, then the requested count.
    let template = request.layout.as_deref().and_then(LayoutTemplate::from_key);
    let stations = match (&request.zone_override, template) {
        (Some(zones), _) if !zones.is_empty() => zones.len(),
        (_, Some(t)) => t.station_count(),
        _ => request.station_count,
    };

    // Feasibility: warm-up and finish need distinct drills on top of the
    // stations. No partial assembly.
    let required = stations + 2;
    if eligible.len() + customs.len() < required {
        debug!(
            "assembly infeasible: {} eligible + {} custom drills < {} required slots",
            eligible.len(),
            customs.len(),
            required
        );
        return None;
    }

    let mut used: HashSet<String> = HashSet::new();

    let warmup_drill = pick_warmup(&eligible, &mut used)?;
    let finish_drill = pick_finish(&eligible, &mut used)?;

    // Main stations: drill-leaning stations first, game-leaning after.
    let drill_count = ((stations as f64) * (drill_ratio as f64) / 100.0).ceil() as usize;
    let focus_areas: Vec<String> = request
        .focus_areas
        .iter()
        .map(|f| normalize(f))
        .filter(|f| !f.is_empty())
        .collect();
    let custom_cap = (stations / 2).min(customs.len());
    let mut custom_attempts = 0usize;
    let mut custom_picks = 0usize;
    let mut main_activities = Vec::with_capacity(stations);
    for index in 0..stations {
        let leaning = if index < drill_count {
            DrillType::Drill
        } else {
            DrillType::Game
        };
        let activity = pick_station(
            &eligible,
            &customs,
            &focus_areas,
            leaning,
            custom_cap,
            &mut custom_attempts,
            &mut custom_picks,
            &mut used,
        )?;
        debug!("station {index}: {} ({leaning:?}-leaning)", activity.title());
        main_activities.push(activity);
    }

    // Durations: 12% each for warm-up and finish, remainder split evenly.
    // Per-slot rounding may drift the sum slightly from the total.
    let total = request.duration_minutes;
    let edge_minutes = (f64::from(total) * EDGE_SLOT_FRACTION).round() as u32;
    let remaining = total.saturating_sub(edge_minutes * 2);
    let station_minutes = if stations == 0 {
        0
    } else {
        (f64::from(remaining) / stations as f64).round() as u32
    };

    // Station geometry: override, then template, then computed strips.
    let zones: Vec<ZoneArea> = match (&request.zone_override, template) {
        (Some(z), _) if !z.is_empty() => z.clone(),
        (_, Some(t)) => t.zones(),
        _ => computed_zones(stations, &request.ice_config),
    };

    let full_rink = ZoneArea::new(0, 0, 100, 100);
    let warmup = build_slot(
        0,
        SessionActivity::Corpus(warmup_drill),
        edge_minutes,
        full_rink,
        ZONE_PALETTE[0],
        DiagramTemplate::Warmup,
    );
    let main: Vec<StationSlot> = main_activities
        .into_iter()
        .enumerate()
        .map(|(i, activity)| {
            let diagram = match activity.drill_type() {
                DrillType::Drill => DiagramTemplate::Drill,
                DrillType::Game => DiagramTemplate::Game,
            };
            build_slot(
                i,
                activity,
                station_minutes,
                zones[i],
                ZONE_PALETTE[i % ZONE_PALETTE.len()],
                diagram,
            )
        })
        .collect();
    let finish = build_slot(
        0,
        SessionActivity::Corpus(finish_drill),
        edge_minutes,
        full_rink,
        ZONE_PALETTE[(stations + 1) % ZONE_PALETTE.len()],
        DiagramTemplate::Finish,
    );

    // Equal split of 100 across the focus areas, rounded per entry.
    let skill_distribution: Vec<SkillWeight> = if request.focus_areas.is_empty() {
        Vec::new()
    } else {
        let weight = (100.0 / request.focus_areas.len() as f64).round() as u32;
        request
            .focus_areas
            .iter()
            .map(|focus| SkillWeight {
                focus: focus.clone(),
                weight,
            })
            .collect()
    };

    debug!(
        "assembled session locally: {} stations, methodology {}",
        stations, methodology
    );

    Some(SessionPlan {
        warmup,
        main,
        finish,
        metadata: SessionMetadata {
            methodology,
            age_category,
            total_duration_minutes: total,
            skill_distribution,
            cognitive_load: request.cognitive_load.clone(),
            source: AssemblySource::LocalCorpus,
            created_at: Utc::now(),
        },
    })
}

fn is_used(used: &HashSet<String>, title: &str) -> bool {
    used.contains(&normalize(title))
}

fn mark_used(used: &mut HashSet<String>, title: &str) {
    used.insert(normalize(title));
}

/// Skating-flavored or explicitly warm-up-tagged material.
fn is_warmup_material(drill: &DrillRecord) -> bool {
    if normalize(&drill.category).contains("skating") {
        return true;
    }
    drill.tags.iter().any(|tag| {
        let tag = normalize(tag);
        tag.contains("warm") || tag.contains("rozbrusl")
    })
}

/// First unused warm-up candidate, falling back to the first unused drill
/// of type Drill.
fn pick_warmup(eligible: &[ScoredDrill], used: &mut HashSet<String>) -> Option<DrillRecord> {
    let picked = eligible
        .iter()
        .find(|s| !is_used(used, &s.drill.title) && is_warmup_material(s.drill))
        .or_else(|| {
            eligible
                .iter()
                .find(|s| !is_used(used, &s.drill.title) && s.drill.drill_type == DrillType::Drill)
        })?;
    mark_used(used, &picked.drill.title);
    Some(picked.drill.clone())
}

/// First unused game, then anything game-flavored, then anything at all.
fn pick_finish(eligible: &[ScoredDrill], used: &mut HashSet<String>) -> Option<DrillRecord> {
    let game_flavored = |drill: &DrillRecord| {
        normalize(&drill.category).contains("game")
            || drill.tags.iter().any(|t| normalize(t).contains("game"))
    };
    let picked = eligible
        .iter()
        .find(|s| !is_used(used, &s.drill.title) && s.drill.drill_type == DrillType::Game)
        .or_else(|| {
            eligible
                .iter()
                .find(|s| !is_used(used, &s.drill.title) && game_flavored(s.drill))
        })
        .or_else(|| eligible.iter().find(|s| !is_used(used, &s.drill.title)))?;
    mark_used(used, &picked.drill.title);
    Some(picked.drill.clone())
}

fn custom_matches_focus(drill: &CoachCustomDrill, focus_areas: &[String]) -> bool {
    if focus_areas.is_empty() {
        return false;
    }
    let category = drill.category.as_deref().map(normalize).unwrap_or_default();
    let tags: Vec<String> = drill
        .tags
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|t| normalize(t))
        .collect();
    focus_areas
        .iter()
        .any(|focus| category == *focus || tags.iter().any(|t| t.contains(focus.as_str())))
}

/// Fill one main station.
///
/// Order: a focus-matching custom drill while under the custom cap (with a
/// bootstrap exception on the very first attempt), then a corpus drill of
/// the station's leaning, then any unused corpus drill, then any unused
/// custom drill as the last resort when the corpus is exhausted.
#[allow(clippy::too_many_arguments)]
fn pick_station(
    eligible: &[ScoredDrill],
    customs: &[&CoachCustomDrill],
    focus_areas: &[String],
    leaning: DrillType,
    custom_cap: usize,
    custom_attempts: &mut usize,
    custom_picks: &mut usize,
    used: &mut HashSet<String>,
) -> Option<SessionActivity> {
    if *custom_picks < custom_cap {
        *custom_attempts += 1;
        let matching = customs
            .iter()
            .find(|c| !is_used(used, &c.title) && custom_matches_focus(c, focus_areas));
        let picked = match matching {
            Some(c) => Some(c),
            // Bootstrap exception: the first attempt accepts any custom
            // drill so a coach's library is represented at all.
            None if *custom_attempts == 1 => {
                customs.iter().find(|c| !is_used(used, &c.title))
            }
            None => None,
        };
        if let Some(custom) = picked {
            mark_used(used, &custom.title);
            *custom_picks += 1;
            return Some(SessionActivity::Custom((*custom).clone()));
        }
    }

    let corpus_pick = eligible
        .iter()
        .find(|s| !is_used(used, &s.drill.title) && s.drill.drill_type == leaning)
        .or_else(|| eligible.iter().find(|s| !is_used(used, &s.drill.title)));
    if let Some(scored) = corpus_pick {
        mark_used(used, &scored.drill.title);
        return Some(SessionActivity::Corpus(scored.drill.clone()));
    }

    let fallback = customs.iter().find(|c| !is_used(used, &c.title))?;
    mark_used(used, &fallback.title);
    Some(SessionActivity::Custom((*fallback).clone()))
}

fn build_slot(
    station_index: usize,
    activity: SessionActivity,
    duration_minutes: u32,
    zone: ZoneArea,
    color: &str,
    diagram: DiagramTemplate,
) -> StationSlot {
    StationSlot {
        station_index,
        duration_minutes,
        rink_view: infer_rink_view(&zone),
        zone,
        zone_color: color.to_string(),
        diagram: diagram.elements(),
        activity,
    }
}
