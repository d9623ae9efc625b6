//! Embedded drill corpus.
//!
//! The corpus is literal data compiled into the binary: an immutable list
//! built once per process and shared read-only across all assembly calls.
//! Titles are unique; they are the join key for scoring, selection, and
//! per-session de-duplication.
//!
//! Matching conventions (see [`crate::services::scoring`]):
//! - empty `methodologies` matches any methodology; "all" is a sentinel
//!   that matches any methodology with a reduced bonus
//! - empty `age_groups` matches any age
//! - empty `ice_configs` or the "any" sentinel matches any configuration

use once_cell::sync::Lazy;

use crate::models::drill::{DrillRecord, DrillType};

fn rec(
    title: &str,
    category: &str,
    drill_type: DrillType,
    tags: &[&str],
    methodologies: &[&str],
    age_groups: &[&str],
    ice_configs: &[&str],
    content: &str,
) -> DrillRecord {
    DrillRecord {
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        drill_type,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        methodologies: methodologies.iter().map(|m| m.to_string()).collect(),
        age_groups: age_groups.iter().map(|a| a.to_string()).collect(),
        ice_configs: ice_configs.iter().map(|c| c.to_string()).collect(),
    }
}

static CORPUS: Lazy<Vec<DrillRecord>> = Lazy::new(|| {
    use DrillType::{Drill, Game};

    vec![
        // =====================================================================
        // Skating
        // =====================================================================
        rec(
            "Edge Work Stations",
            "Skating",
            Drill,
            &["edges", "balance", "warm-up"],
            &[],
            &[],
            &["any"],
            "Figure-eights on inside and outside edges around face-off dots, \
             sticks on knees; progress to one-foot holds through the circle.",
        ),
        rec(
            "Crossover Acceleration Laps",
            "Skating",
            Drill,
            &["crossovers", "speed", "rozbruslení"],
            &["Canadian", "Czech"],
            &["U10", "U11", "U12", "U13"],
            &["Full Ice"],
            "Continuous laps with three hard crossovers out of every turn, \
             accelerating to top speed down each wall.",
        ),
        rec(
            "Backward C-Cut Waves",
            "Skating",
            Drill,
            &["backward", "c-cuts"],
            &["all"],
            &["U10", "U11", "U12"],
            &["Full Ice", "Half Ice"],
            "Waves of players skate backward blue line to blue line using \
             alternating c-cuts, chest up and stick on the ice.",
        ),
        rec(
            "Tight Turn Gauntlet",
            "Skating",
            Drill,
            &["tight turns", "agility"],
            &["Swedish", "Finnish"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Five-cone gauntlet of alternating tight turns at full speed; \
             finish with a shot from the high slot.",
        ),
        rec(
            "Stop-and-Start Ladder",
            "Skating",
            Drill,
            &["stops", "conditioning", "warm-up"],
            &["Czech", "Hybrid"],
            &["U10", "U11", "U12"],
            &[],
            "Line-to-line ladder with two-foot stops facing the same wall \
             every repetition; build from half to full speed.",
        ),
        rec(
            "Figure Eight Speed Circuit",
            "Skating",
            Drill,
            &["speed", "edges"],
            &["Canadian"],
            &["U16", "U17", "U18"],
            &["Full Ice"],
            "Timed figure-eight circuit around both end-zone circles with a \
             full-ice sprint between them.",
        ),
        rec(
            "Freeze Tag on Ice",
            "Skating",
            Game,
            &["tag", "fun", "warm-up"],
            &[],
            &["U7", "U8", "U9"],
            &["Half Ice"],
            "Classic freeze tag inside the zone; frozen players are freed by \
             a teammate skating a circle around them.",
        ),
        rec(
            "Obstacle Course Skate",
            "Skating",
            Drill,
            &["agility", "fun", "rozbruslení"],
            &["all"],
            &["U7", "U8", "U9", "U10"],
            &["Half Ice"],
            "Course of tires, sticks, and cones: jump, duck, one-foot glide, \
             and tight turn segments in sequence.",
        ),
        rec(
            "Transition Pivot Flow",
            "Skating",
            Drill,
            &["pivots", "transition"],
            &["Hybrid", "Czech"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Continuous flow pattern of forward-to-backward and \
             backward-to-forward pivots at each line, both directions.",
        ),
        rec(
            "Power Stride Progression",
            "Skating",
            Drill,
            &["stride", "power"],
            &["Czech"],
            &["U10", "U11", "U12"],
            &["Full Ice"],
            "Full-extension stride work: glide-and-push sequences down the \
             ice with full recovery under the body each push.",
        ),
        rec(
            "Red Light Green Light",
            "Skating",
            Game,
            &["fun", "stops", "warm-up"],
            &[],
            &["U7", "U8", "U9", "U10"],
            &["any"],
            "Coach calls green, yellow, red: sprint, glide, stop. Last \
             skater moving on red returns to the start line.",
        ),
        // =====================================================================
        // Shooting
        // =====================================================================
        rec(
            "Quick Release Stations",
            "Shooting",
            Drill,
            &["wrist shot", "release"],
            &["Canadian", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Three shooting stations with pucks in the feet, off the wall, \
             and in stride; one-touch setup into an immediate release.",
        ),
        rec(
            "One-Timer Carousel",
            "Shooting",
            Drill,
            &["one-timer", "timing"],
            &["Canadian"],
            &["U16", "U17", "U18"],
            &["Full Ice"],
            "Rotating carousel of passers and shooters; catch the seam pass \
             and one-time from the dot, then rotate lines.",
        ),
        rec(
            "Screen and Tip Traffic",
            "Shooting",
            Drill,
            &["deflections", "net-front"],
            &["Czech"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Point shots through a net-front screen; forwards battle for \
             position and tip pucks while boxing out a passive defender.",
        ),
        rec(
            "Shooting Accuracy Ladder",
            "Shooting",
            Drill,
            &["accuracy", "corners"],
            &["all"],
            &[],
            &["any"],
            "Target ladder in the corners of the net; players climb a rung \
             per hit target and restart on a miss.",
        ),
        rec(
            "Rebound Scramble",
            "Shooting",
            Game,
            &["rebounds", "compete"],
            &[],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Coach shoots for rebounds, two attackers bury second chances \
             against one defender; first to three goals stays on.",
        ),
        rec(
            "Catch and Shoot Flow",
            "Shooting",
            Drill,
            &["release", "passing"],
            &["Swedish", "Hybrid"],
            &["U13", "U14", "U15", "U16"],
            &["Full Ice"],
            "Flow drill with a wall pass, middle drive, and catch-and-shoot \
             finish; next player leaves on the shot.",
        ),
        rec(
            "Five-Puck Shootout",
            "Shooting",
            Game,
            &["shootout", "fun"],
            &[],
            &[],
            &["Half Ice"],
            "Each player gets five breakaway pucks from center; goals are \
             tallied per line, losers skate a lap.",
        ),
        rec(
            "Walk the Line Snipe",
            "Shooting",
            Drill,
            &["stickhandling", "release"],
            &["Finnish"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Walk the top of the circle with quick hands, change the shot \
             angle on the last touch, and pick a corner.",
        ),
        rec(
            "Point Shot Lanes",
            "Shooting",
            Drill,
            &["slap shot", "screens"],
            &["Canadian", "Czech"],
            &["U16", "U17", "U18"],
            &["Full Ice"],
            "Defensemen walk the blue line and shoot through lanes called by \
             the coach; wingers time their drive to the net.",
        ),
        // =====================================================================
        // Passing
        // =====================================================================
        rec(
            "Give-and-Go Triangle",
            "Passing",
            Drill,
            &["give-and-go", "support"],
            &["Swedish"],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Three-player triangle rotating give-and-go sequences; the passer \
             always moves to a new support spot after releasing.",
        ),
        rec(
            "Stationary Partner Passing",
            "Passing",
            Drill,
            &["first touch", "warm-up"],
            &["all"],
            &["U7", "U8", "U9", "U10"],
            &["any"],
            "Pairs pass forehand and backhand at increasing distance, \
             cushioning each reception ahead of the body.",
        ),
        rec(
            "Four-Corner Overspeed Passing",
            "Passing",
            Drill,
            &["overspeed", "timing"],
            &["Swedish", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Four corner groups move pucks clockwise with one-touch passes \
             while skaters sprint the diagonal to replace.",
        ),
        rec(
            "Breakout Outlet Reps",
            "Passing",
            Drill,
            &["breakout", "outlets"],
            &["Canadian", "Czech"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Defensemen retrieve dump-ins and hit wheel, reverse, or wall \
             outlets on the coach's call; wingers present targets.",
        ),
        rec(
            "Saucer Pass Golf",
            "Passing",
            Game,
            &["saucer", "fun"],
            &[],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Nine-hole course of stick-and-glove targets; fewest saucer \
             passes to land flat on each target wins.",
        ),
        rec(
            "Neutral Zone Stretch Passes",
            "Passing",
            Drill,
            &["stretch pass", "transition"],
            &["Czech"],
            &["U16", "U17", "U18"],
            &["Full Ice"],
            "Defense-to-forward stretch passes against a passive forecheck; \
             receivers time the blue line to stay onside.",
        ),
        rec(
            "Monkey in the Middle",
            "Passing",
            Game,
            &["keep-away", "pressure"],
            &[],
            &["U10", "U11", "U12"],
            &["Cross-Ice"],
            "Four players keep the puck from one chaser inside a circle; \
             lose possession and you become the chaser.",
        ),
        rec(
            "Rim and Retrieve",
            "Passing",
            Drill,
            &["rims", "retrievals"],
            &["Finnish", "Czech"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Hard rims around the boards with a partner retrieving on the \
             far side; progress to contested retrievals.",
        ),
        // =====================================================================
        // Puck Control
        // =====================================================================
        rec(
            "Cone Maze Stickhandling",
            "Puck Control",
            Drill,
            &["stickhandling", "cones"],
            &["all"],
            &["U7", "U8", "U9", "U10"],
            &["any"],
            "Dense cone maze worked at walking pace, then at speed; eyes up \
             on the coach's hand signals the whole way through.",
        ),
        rec(
            "Attack Triangle Dangles",
            "Puck Control",
            Drill,
            &["dekes", "one-on-one"],
            &["Finnish"],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Attack a stationary triangle obstacle with toe drags, pull \
             backs, and fakes; finish each rep with a shot in tight.",
        ),
        rec(
            "Glove-Side Toe Drags",
            "Puck Control",
            Drill,
            &["toe drag", "hands"],
            &["Finnish", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Repetition block of toe drags around stick obstacles to the \
             glove side, shielding with the inside shoulder.",
        ),
        rec(
            "Puck Protection Circles",
            "Puck Control",
            Drill,
            &["body position", "protection"],
            &["Czech", "Hybrid"],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Pairs battle around a face-off circle; the carrier keeps the \
             puck on the far hip and rolls off contact.",
        ),
        rec(
            "Blind Retrieval Scan",
            "Puck Control",
            Drill,
            &["scanning", "retrievals"],
            &["Swedish"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Retrieve pucks dumped behind the net while the coach flashes a \
             number; call it out before making the first touch.",
        ),
        rec(
            "Keep Your Yard Clean",
            "Puck Control",
            Game,
            &["compete", "protection"],
            &[],
            &["U10", "U11", "U12"],
            &["Cross-Ice"],
            "Everyone stickhandles in a shrinking box while clearing other \
             pucks out; lose your puck and you are out.",
        ),
        rec(
            "Soft Hands Warmup",
            "Puck Control",
            Drill,
            &["soft hands", "warm-up"],
            &["all"],
            &["U7", "U8", "U9"],
            &["any"],
            "Stationary stickhandling with a ball then a puck: narrow, wide, \
             front, and side boxes to loosen the hands.",
        ),
        rec(
            "Gauntlet Carry",
            "Puck Control",
            Game,
            &["pressure", "carries"],
            &[],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Carry through a gauntlet of three stick-checking defenders in \
             lanes; a clean carry scores a point for your team.",
        ),
        // =====================================================================
        // Defense
        // =====================================================================
        rec(
            "Gap Control Mirrors",
            "Defense",
            Drill,
            &["gap control", "skating"],
            &["Canadian", "Czech"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Defender mirrors an attacking forward through the neutral zone, \
             holding a one-stick gap without crossing feet.",
        ),
        rec(
            "One-on-One Angling",
            "Defense",
            Drill,
            &["angling", "stick position"],
            &["Swedish"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Steer the puck carrier to the wall with stick on puck, body on \
             body; finish with a controlled pin.",
        ),
        rec(
            "Box-Out Net Battles",
            "Defense",
            Drill,
            &["net front", "boxing out"],
            &["Canadian"],
            &["U16", "U17", "U18"],
            &["Half Ice"],
            "Net-front pairs battle for rebounds off point shots; defenders \
             work early stick lifts and box-outs.",
        ),
        rec(
            "Retrieval Under Pressure",
            "Defense",
            Drill,
            &["retrievals", "escapes"],
            &["Czech", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Defensemen retrieve with a forechecker arriving; shoulder check \
             twice, escape with a cut-back or wall outlet.",
        ),
        rec(
            "Two-on-Two Closeouts",
            "Defense",
            Game,
            &["compete", "closing"],
            &[],
            &["U13", "U14", "U15"],
            &["Cross-Ice"],
            "Continuous 2v2 in the zone; on the coach's whistle defenders \
             must close out and force the play wide within three seconds.",
        ),
        rec(
            "Shot Block Technique",
            "Defense",
            Drill,
            &["blocking", "courage"],
            &["Canadian"],
            &["U16", "U17", "U18"],
            &["Half Ice"],
            "Progression from foam pucks to real pucks: one-knee and \
             two-pad blocking positions with proper head protection habits.",
        ),
        // =====================================================================
        // Small Area Games
        // =====================================================================
        rec(
            "Three-on-Three Cross-Ice",
            "Small Area Games",
            Game,
            &["3v3", "compete", "game sense"],
            &["all"],
            &[],
            &["Cross-Ice"],
            "Straight 3v3 cross-ice with small nets; change on the fly every \
             forty-five seconds, goals off the rush count double.",
        ),
        rec(
            "Two-Touch Rondo",
            "Small Area Games",
            Game,
            &["possession", "quick passing"],
            &["Swedish", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Cross-Ice"],
            "Keep-away rondo limited to two touches; ten connected passes \
             equal a goal, defenders rotate out on a steal.",
        ),
        rec(
            "Net-Front Chaos 2v2",
            "Small Area Games",
            Game,
            &["2v2", "net front"],
            &[],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "2v2 below the dots with a coach feeding new pucks every ten \
             seconds; everything must go through the net-front.",
        ),
        rec(
            "Corner Battle Royale",
            "Small Area Games",
            Game,
            &["battles", "compete"],
            &["Canadian", "Czech"],
            &["U13", "U14", "U15"],
            &["Cross-Ice"],
            "1v1 corner battles for a loose puck; winner attacks the small \
             net, loser backchecks, next pair enters on the goal.",
        ),
        rec(
            "Four-Goal Transition Game",
            "Small Area Games",
            Game,
            &["transition", "scanning"],
            &["Finnish", "Swedish"],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Two nets per team facing opposite ways; teams can score on \
             either net, forcing constant scanning and re-orientation.",
        ),
        rec(
            "One-on-One Showdown",
            "Small Area Games",
            Game,
            &["1v1", "dekes"],
            &[],
            &[],
            &["Cross-Ice"],
            "Ladder of 1v1s from the half wall; win and stay on, lose and \
             join the passing line.",
        ),
        rec(
            "Gates Possession Game",
            "Small Area Games",
            Game,
            &["possession", "support"],
            &["Swedish"],
            &["U10", "U11", "U12"],
            &["Cross-Ice"],
            "Score by passing through any of four cone gates to a teammate; \
             gates close for five seconds after each use.",
        ),
        rec(
            "Rebound Rumble Relay",
            "Small Area Games",
            Game,
            &["relay", "shootout", "fun"],
            &["Czech"],
            &["U10", "U11", "U12"],
            &["Half Ice"],
            "Relay teams alternate breakaways; any rebound is live for the \
             next skater in line, first team to ten goals wins.",
        ),
        // =====================================================================
        // Conditioning
        // =====================================================================
        rec(
            "Herringbone Sprints",
            "Conditioning",
            Drill,
            &["sprints", "legs"],
            &["Canadian"],
            &["U16", "U17", "U18"],
            &["Full Ice"],
            "Goal line to far blue and back in herringbone start position \
             sets; full recovery between reps, quality over volume.",
        ),
        rec(
            "Over-Speed Circles",
            "Conditioning",
            Drill,
            &["overspeed", "laps"],
            &["Czech"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Laps of all five circles at above-race pace with a partner \
             drafting and swapping the lead every circle.",
        ),
        rec(
            "Shuttle Interval Ladders",
            "Conditioning",
            Drill,
            &["intervals", "stops"],
            &["all"],
            &["U13", "U14", "U15", "U16"],
            &["Half Ice"],
            "Shuttle ladder between cones at 15, 30, and 45 feet; work \
             twenty seconds, rest forty, four rounds.",
        ),
        rec(
            "Last Man Relay",
            "Conditioning",
            Game,
            &["relay", "fun", "compete"],
            &[],
            &["U10", "U11", "U12"],
            &["Full Ice"],
            "Team relay laps where the last-place team each round adds one \
             extra skater's lap; ends when one team laps the field.",
        ),
        rec(
            "Cool-Down Flow Skate",
            "Conditioning",
            Drill,
            &["cool-down", "stretching"],
            &["all"],
            &[],
            &["any"],
            "Easy flow skate narrowing to gliding stretches at center ice; \
             heart rate down, short team talk to close.",
        ),
        // =====================================================================
        // Goaltending
        // =====================================================================
        rec(
            "Butterfly Recovery Ladder",
            "Goaltending",
            Drill,
            &["butterfly", "recovery"],
            &["Finnish"],
            &["U13", "U14", "U15"],
            &["Half Ice"],
            "Ladder of butterfly drops with alternating-leg recoveries along \
             the crease, tracking a coach-held puck throughout.",
        ),
        rec(
            "Post-to-Post Tracking",
            "Goaltending",
            Drill,
            &["tracking", "posts"],
            &["Finnish", "Hybrid"],
            &["U13", "U14", "U15", "U16"],
            &["Half Ice"],
            "Low-ice passes behind the net force post-to-post pushes; sealed \
             post integration on each arrival.",
        ),
        rec(
            "Screened Save Reps",
            "Goaltending",
            Drill,
            &["screens", "sightlines"],
            &["Czech"],
            &["U16", "U17", "U18"],
            &["Half Ice"],
            "Point shots through live screens; goalies fight for sightlines \
             high and low before committing to the save.",
        ),
        rec(
            "Rapid-Fire Low Shots",
            "Goaltending",
            Drill,
            &["reflexes", "low shots"],
            &["all"],
            &[],
            &["Half Ice"],
            "Quick sequence of low pad shots from the slot; focus on \
             economical butterfly seals and rebound steering.",
        ),
        // =====================================================================
        // Hockey IQ
        // =====================================================================
        rec(
            "Read-and-React Regroups",
            "Hockey IQ",
            Drill,
            &["regroup", "reads"],
            &["Czech", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Five-player regroups where the coach removes or adds a passing \
             option mid-sequence; players adjust routes on the read.",
        ),
        rec(
            "Silent Hockey Scrimmage",
            "Hockey IQ",
            Game,
            &["communication", "scanning", "game sense"],
            &["Swedish", "Finnish"],
            &["U10", "U11", "U12"],
            &["Full Ice"],
            "Scrimmage with no talking allowed: players must scan and use \
             stick signals, rewarding heads-up play.",
        ),
        rec(
            "Odd-Man Rush Decisions",
            "Hockey IQ",
            Drill,
            &["2v1", "decisions"],
            &["Canadian", "Hybrid"],
            &["U13", "U14", "U15"],
            &["Full Ice"],
            "Continuous 2v1 and 3v2 rushes; attackers must make the pass or \
             shot decision before the top of the circles.",
        ),
        rec(
            "Power Play Box Rotation",
            "Hockey IQ",
            Drill,
            &["power play", "přesilovka"],
            &["Czech"],
            &["U16", "U17", "U18"],
            &["Half Ice"],
            "Umbrella-to-box rotations against a passive penalty kill; \
             one-touch puck movement until the seam opens.",
        ),
    ]
});

/// The embedded drill corpus, built once per process.
pub fn drill_corpus() -> &'static [DrillRecord] {
    &CORPUS
}
