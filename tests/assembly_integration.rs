//! End-to-end assembly over the embedded corpus.

use proptest::prelude::*;

use hti_rust::knowledge::drill_corpus;
use hti_rust::models::drill::DrillType;
use hti_rust::models::request::{CoachProfile, FeedbackSnapshot, SessionRequest};
use hti_rust::models::session::{AssemblySource, SessionPlan};
use hti_rust::services::assemble_session;

fn czech_u12_request(stations: usize) -> SessionRequest {
    SessionRequest {
        methodology: Some("Czech".to_string()),
        age_category: Some("U12".to_string()),
        duration_minutes: 60,
        ice_config: "Full Ice".to_string(),
        station_count: stations,
        focus_areas: vec!["Skating".to_string()],
        drill_ratio: Some(60),
        cognitive_load: Some("medium".to_string()),
        layout: None,
        zone_override: None,
    }
}

#[test]
fn czech_u12_skating_session_assembles_from_the_corpus() {
    let request = czech_u12_request(3);
    request.validate().unwrap();

    let plan = assemble_session(&request, &CoachProfile::default(), None, &[])
        .expect("the embedded corpus covers this request");

    // Five slots, each filled by a distinct drill.
    assert_eq!(plan.main.len(), 3);
    let mut titles: Vec<String> = plan
        .slots()
        .map(|s| s.activity.title().to_lowercase())
        .collect();
    assert_eq!(titles.len(), 5);
    titles.sort();
    titles.dedup();
    assert_eq!(titles.len(), 5, "a drill filled two slots");

    // Warm-up comes from skating or warm-up-tagged material; the finish is
    // a game.
    let warmup_title = plan.warmup.activity.title().to_string();
    let warmup = drill_corpus()
        .iter()
        .find(|d| d.title == warmup_title)
        .expect("warm-up comes from the corpus");
    assert!(
        warmup.category.eq_ignore_ascii_case("skating")
            || warmup.tags.iter().any(|t| t.to_lowercase().contains("warm")),
        "unexpected warm-up: {warmup_title}"
    );
    assert_eq!(plan.finish.activity.drill_type(), DrillType::Game);

    // Ratio 60 over 3 stations: two drill-leaning stations, then one
    // game-leaning; the corpus has both types available here.
    assert_eq!(plan.main[0].activity.drill_type(), DrillType::Drill);
    assert_eq!(plan.main[1].activity.drill_type(), DrillType::Drill);
    assert_eq!(plan.main[2].activity.drill_type(), DrillType::Game);

    // 60 minutes: 7 for each edge slot, 15 per station.
    assert_eq!(plan.warmup.duration_minutes, 7);
    assert_eq!(plan.finish.duration_minutes, 7);
    assert!(plan.main.iter().all(|s| s.duration_minutes == 15));

    // Metadata reflects the request.
    assert_eq!(plan.metadata.methodology, "Czech");
    assert_eq!(plan.metadata.age_category, "U12");
    assert_eq!(plan.metadata.total_duration_minutes, 60);
    assert_eq!(plan.metadata.source, AssemblySource::LocalCorpus);
    assert_eq!(plan.metadata.cognitive_load.as_deref(), Some("medium"));
    assert_eq!(plan.metadata.skill_distribution.len(), 1);
    assert_eq!(plan.metadata.skill_distribution[0].weight, 100);

    // Station zones are three equal-width strips with the rounding
    // remainder on the last one.
    let widths: Vec<u32> = plan.main.iter().map(|s| s.zone.width).collect();
    assert_eq!(widths, vec![33, 33, 34]);
}

#[test]
fn methodology_gate_keeps_foreign_drills_out() {
    let plan = assemble_session(&czech_u12_request(5), &CoachProfile::default(), None, &[])
        .expect("five stations are still coverable");
    for slot in plan.slots() {
        let drill = drill_corpus()
            .iter()
            .find(|d| d.title == slot.activity.title())
            .expect("all slots come from the corpus");
        assert!(
            drill.methodologies.is_empty()
                || drill
                    .methodologies
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case("czech") || m.eq_ignore_ascii_case("all")),
            "gated drill selected: {}",
            drill.title
        );
    }
}

#[test]
fn banning_the_whole_corpus_forces_the_fallback() {
    let feedback = FeedbackSnapshot {
        banned_titles: drill_corpus().iter().map(|d| d.title.clone()).collect(),
        ..FeedbackSnapshot::default()
    };
    let plan = assemble_session(
        &czech_u12_request(3),
        &CoachProfile::default(),
        Some(&feedback),
        &[],
    );
    assert!(plan.is_none());
}

#[test]
fn session_plan_round_trips_through_json() {
    let plan = assemble_session(&czech_u12_request(3), &CoachProfile::default(), None, &[])
        .expect("the embedded corpus covers this request");
    let json = serde_json::to_string(&plan).unwrap();
    let back: SessionPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, back);
}

proptest! {
    /// Any feasible request shape yields a structurally sound plan: one
    /// main slot per station and no drill reused across slots.
    #[test]
    fn assembled_plans_are_structurally_sound(
        stations in 1usize..=5,
        ratio in 0u8..=100,
        duration in 30u32..=120,
    ) {
        let mut request = czech_u12_request(stations);
        request.drill_ratio = Some(ratio);
        request.duration_minutes = duration;
        prop_assert!(request.validate().is_ok());

        if let Some(plan) = assemble_session(&request, &CoachProfile::default(), None, &[]) {
            prop_assert_eq!(plan.main.len(), stations);
            let mut titles: Vec<String> = plan
                .slots()
                .map(|s| s.activity.title().to_lowercase())
                .collect();
            let total = titles.len();
            titles.sort();
            titles.dedup();
            prop_assert_eq!(titles.len(), total);
            prop_assert!(plan
                .slots()
                .all(|s| s.duration_minutes <= plan.metadata.total_duration_minutes));
        }
    }
}
