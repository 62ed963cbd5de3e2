//! Unit coverage for dashboard sectioning, list ranking, and the map
//! projection.
#![forbid(unsafe_code)]

use geo::Coord;
use powline_core::test_support::{forecast_day_cm, ranked_signal};
use powline_core::{DriveRadius, GoNoGo, GoNoGoAssessment, Pass, Region, ResortSignal, Verdict};
use rstest::rstest;

use crate::{
    Gazetteer, ListEntry, ListFilters, MapFilters, MapItem, VerdictFilter, approx_score,
    group_by_region, nearby, project, rank_for_dashboard, search, top_conditions,
};

fn assessment(overall: GoNoGo) -> GoNoGoAssessment {
    GoNoGoAssessment {
        overall,
        summary: "Assessed upstream".to_owned(),
        factors: Vec::new(),
    }
}

fn with_assessment(mut signal: ResortSignal, overall: GoNoGo) -> ResortSignal {
    signal.go_no_go = Some(assessment(overall));
    signal
}

fn slugs(signals: &[ResortSignal]) -> Vec<&str> {
    signals.iter().map(|signal| signal.slug.as_str()).collect()
}

fn row_slugs(rows: &[ListEntry]) -> Vec<&str> {
    rows.iter().map(|row| row.signal.slug.as_str()).collect()
}

fn regional_signal(slug: &str, region: &str, state: &str) -> ResortSignal {
    let mut signal = ranked_signal(slug, 8.0, 45);
    signal.region = region.to_owned();
    signal.state = state.to_owned();
    signal
}

#[rstest]
fn dashboard_splits_by_drive_radius() {
    let resorts = vec![
        ranked_signal("jackson-hole", 20.0, 120),
        ranked_signal("eldora", 5.0, 30),
    ];

    let sections = rank_for_dashboard(resorts, DriveRadius::Within60);

    assert_eq!(
        sections.top_pick.map(|top| top.slug),
        Some("eldora".to_owned())
    );
    assert!(sections.your_resorts.is_empty());
    // 20 inches clears both the 4 inch floor and half the top pick's 5.
    assert_eq!(slugs(&sections.worth_the_drive), ["jackson-hole"]);
}

#[rstest]
fn dashboard_falls_back_to_the_whole_payload() {
    let resorts = vec![
        ranked_signal("brighton", 10.0, 200),
        ranked_signal("alta", 20.0, 300),
        ranked_signal("sundance", 2.0, 400),
    ];

    let sections = rank_for_dashboard(resorts, DriveRadius::Within45);

    // Nothing is in radius, so the whole payload stands in and the
    // showcase stays empty.
    assert_eq!(
        sections.top_pick.map(|top| top.slug),
        Some("brighton".to_owned())
    );
    assert_eq!(slugs(&sections.your_resorts), ["alta", "sundance"]);
    assert!(sections.worth_the_drive.is_empty());
}

#[rstest]
fn dashboard_handles_an_empty_payload() {
    let sections = rank_for_dashboard(Vec::new(), DriveRadius::Within60);

    assert!(sections.top_pick.is_none());
    assert!(sections.your_resorts.is_empty());
    assert!(sections.worth_the_drive.is_empty());
}

#[rstest]
fn your_resorts_sort_by_verdict_then_snowfall() {
    let resorts = vec![
        ranked_signal("top", 25.0, 10),
        ranked_signal("quiet", 2.0, 20),
        ranked_signal("steady", 9.0, 30),
        ranked_signal("fair", 5.0, 40),
        ranked_signal("deep", 12.0, 50),
    ];

    let sections = rank_for_dashboard(resorts, DriveRadius::Fly);

    // Go resorts by snowfall, then the maybe, then the skip.
    assert_eq!(
        slugs(&sections.your_resorts),
        ["deep", "steady", "fair", "quiet"]
    );
}

#[rstest]
fn unknown_drive_times_count_as_nearby() {
    let resorts = vec![
        ranked_signal("far-storm", 10.0, 100),
        ranked_signal("mystery", 3.0, 0),
    ];

    let sections = rank_for_dashboard(resorts, DriveRadius::Within45);

    assert_eq!(
        sections.top_pick.map(|top| top.slug),
        Some("mystery".to_owned())
    );
    assert_eq!(slugs(&sections.worth_the_drive), ["far-storm"]);
}

#[rstest]
fn worth_the_drive_needs_meaningfully_more_snow() {
    let resorts = vec![
        ranked_signal("home-hill", 10.0, 30),
        ranked_signal("deep", 5.1, 120),
        ranked_signal("half-exactly", 5.0, 130),
        ranked_signal("shallow", 4.9, 140),
        ranked_signal("dusting", 3.9, 150),
    ];

    let sections = rank_for_dashboard(resorts, DriveRadius::Within60);

    // Only strictly more than half the top pick's 10 inches survives.
    assert_eq!(slugs(&sections.worth_the_drive), ["deep"]);
}

#[rstest]
fn worth_the_drive_caps_at_five() {
    let mut resorts = vec![ranked_signal("home-hill", 6.0, 20)];
    for n in 0..7 {
        resorts.push(ranked_signal(&format!("storm-{n}"), 20.0, 200));
    }

    let sections = rank_for_dashboard(resorts, DriveRadius::Within60);

    assert_eq!(sections.worth_the_drive.len(), 5);
}

#[rstest]
fn a_no_go_assessment_sinks_the_sort() {
    let resorts = vec![
        ranked_signal("top", 25.0, 10),
        with_assessment(ranked_signal("closed-bowl", 18.0, 20), GoNoGo::NoGo),
        ranked_signal("steady", 9.0, 30),
    ];

    let sections = rank_for_dashboard(resorts, DriveRadius::Fly);

    assert_eq!(slugs(&sections.your_resorts), ["steady", "closed-bowl"]);
}

#[rstest]
fn dashboard_sections_serialise_for_reports() {
    let sections = rank_for_dashboard(
        vec![ranked_signal("eldora", 5.0, 30)],
        DriveRadius::Within60,
    );

    let report = serde_json::to_value(&sections).expect("sections serialise");

    let top = report.get("top_pick").and_then(|pick| pick.get("slug"));
    assert_eq!(top, Some(&serde_json::json!("eldora")));
    assert!(report.get("worth_the_drive").is_some());
}

#[rstest]
#[case(0, 0, 30)]
#[case(0, 1, 30)]
#[case(0, 2, 35)]
#[case(1, 2, 15)]
#[case(1, 3, 25)]
#[case(0, 5, 35)]
#[case(1, 5, 30)]
#[case(2, 5, 25)]
#[case(3, 5, 20)]
#[case(4, 5, 15)]
fn approx_score_interpolates_by_rank(
    #[case] index: usize,
    #[case] len: usize,
    #[case] expected: u32,
) {
    assert_eq!(approx_score(index, len), expected);
}

#[rstest]
#[expect(
    clippy::float_cmp,
    reason = "the daily totals sum exactly representable values"
)]
fn list_rows_carry_scores_buckets_and_totals() {
    let mut snowy = ranked_signal("alta", 18.0, 35);
    snowy.daily_forecast = Some(vec![
        forecast_day_cm("2026-01-10", 10.0),
        forecast_day_cm("2026-01-11", 10.0),
        forecast_day_cm("2026-01-12", 10.0),
    ]);
    let rows = ListEntry::from_ranked(vec![
        snowy,
        ranked_signal("brighton", 12.0, 40),
        ranked_signal("sundance", 3.0, 55),
    ]);

    let scores: Vec<u32> = rows.iter().map(|row| row.approx_score).collect();
    assert_eq!(scores, [35, 25, 15]);
    assert!(rows.iter().all(|row| row.region == Region::Colorado));
    // Three 10 cm days round to 3.9 inches each.
    assert_eq!(rows.first().map_or(0.0, |row| row.snowfall), 11.7);
    assert_eq!(rows.last().map_or(0.0, |row| row.snowfall), 3.0);
}

#[rstest]
#[case("alta", &["alta"])]
#[case("VT", &["stowe"])]
#[case("northeast", &["stowe"])]
#[case("   ", &["alta", "stowe", "vail"])]
#[case("chamonix", &[])]
fn search_matches_name_state_and_region_label(
    #[case] query: &str,
    #[case] expected: &[&str],
) {
    let rows = ListEntry::from_ranked(vec![
        regional_signal("alta", "utah-cottonwoods", "UT"),
        regional_signal("stowe", "new-england", "VT"),
        regional_signal("vail", "colorado-i70", "CO"),
    ]);

    let found = search(rows, query);

    assert_eq!(row_slugs(&found), expected);
}

fn filterable_rows() -> Vec<ListEntry> {
    let mut far = regional_signal("jackson-hole", "wyoming", "WY");
    far.drive_time_minutes = 90;
    far.passes = vec!["ikon".to_owned()];
    let mut dry = regional_signal("sundance", "utah-wasatch", "UT");
    dry.forecast_total_inches = 3.0;
    let mut mystery = regional_signal("stowe", "new-england", "VT");
    mystery.drive_time_minutes = 0;
    ListEntry::from_ranked(vec![
        regional_signal("vail", "colorado-i70", "CO"),
        far,
        dry,
        mystery,
    ])
}

#[rstest]
#[case(ListFilters::default(), &["vail", "jackson-hole", "sundance", "stowe"])]
#[case(ListFilters { pass: Some(Pass::Ikon), ..ListFilters::default() }, &["jackson-hole"])]
#[case(ListFilters { within_hour: true, ..ListFilters::default() }, &["vail", "sundance", "stowe"])]
#[case(ListFilters { six_plus: true, ..ListFilters::default() }, &["vail", "jackson-hole", "stowe"])]
#[case(ListFilters { region: Some(Region::Utah), ..ListFilters::default() }, &["sundance"])]
#[case(ListFilters { state: Some("VT".to_owned()), ..ListFilters::default() }, &["stowe"])]
#[case(ListFilters { within_hour: true, six_plus: true, ..ListFilters::default() }, &["vail", "stowe"])]
fn filters_conjoin(#[case] filters: ListFilters, #[case] expected: &[&str]) {
    let kept = filters.apply(filterable_rows());

    assert_eq!(row_slugs(&kept), expected);
}

#[rstest]
fn grouping_buckets_by_region_and_sorts_inside() {
    let rows = ListEntry::from_ranked(vec![
        regional_signal("vail", "colorado-i70", "CO"),
        regional_signal("alta", "utah-cottonwoods", "UT"),
        regional_signal("eldora", "colorado-i70", "CO"),
        regional_signal("brighton", "utah-cottonwoods", "UT"),
    ]);

    let grouped = group_by_region(rows);

    let regions: Vec<Region> = grouped.keys().copied().collect();
    assert_eq!(regions, [Region::Colorado, Region::Utah]);
    let colorado: Vec<u32> = grouped
        .get(&Region::Colorado)
        .map(|bucket| bucket.iter().map(|row| row.approx_score).collect())
        .unwrap_or_default();
    assert_eq!(colorado, [35, 22]);
}

#[rstest]
fn nearby_excludes_unknown_drives_and_caps_at_eight() {
    let mut drives: Vec<ResortSignal> = (1..=10)
        .map(|n| ranked_signal(&format!("resort-{n}"), 6.0, n * 25))
        .collect();
    drives.push(ranked_signal("mystery", 6.0, 0));
    drives.reverse();
    let rows = ListEntry::from_ranked(drives);

    let close = nearby(&rows);

    assert_eq!(close.len(), 8);
    let minutes: Vec<u32> = close
        .iter()
        .map(|row| row.signal.drive_time_minutes)
        .collect();
    assert_eq!(minutes, [25, 50, 75, 100, 125, 150, 175, 200]);
}

#[rstest]
fn top_conditions_caps_at_ten_descending() {
    let rows = ListEntry::from_ranked(
        (0..12)
            .map(|n| ranked_signal(&format!("resort-{n}"), 6.0, 30))
            .collect(),
    );

    let best = top_conditions(&rows);

    assert_eq!(best.len(), 10);
    assert_eq!(best.first().map(|row| row.approx_score), Some(35));
    assert!(
        best.iter()
            .zip(best.iter().skip(1))
            .all(|(higher, lower)| higher.approx_score >= lower.approx_score)
    );
}

#[rstest]
fn projection_drops_resorts_without_coordinates() {
    let signals = vec![
        ranked_signal("alta", 12.0, 40),
        ranked_signal("narnia", 30.0, 10),
    ];

    let pins = project(&signals, &Gazetteer::builtin());

    assert_eq!(pins.len(), 1);
    let pin = pins.first().expect("alta has shipped coordinates");
    assert_eq!(pin.slug, "alta");
    assert_eq!(pin.name, "Alta");
    assert_eq!(pin.pass, Pass::Epic);
    // No assessment means skip on the map, never maybe.
    assert_eq!(pin.verdict, Verdict::Skip);
    assert_eq!(pin.drive_minutes, 40);
}

#[rstest]
#[case(GoNoGo::Go, Verdict::Go)]
#[case(GoNoGo::Conditional, Verdict::Maybe)]
#[case(GoNoGo::NoGo, Verdict::Skip)]
fn projection_prefers_the_assessment_verdict(
    #[case] overall: GoNoGo,
    #[case] expected: Verdict,
) {
    let signals = vec![with_assessment(ranked_signal("alta", 12.0, 40), overall)];

    let pins = project(&signals, &Gazetteer::builtin());

    assert_eq!(pins.first().map(|pin| pin.verdict), Some(expected));
}

fn pin(snowfall: f64) -> MapItem {
    MapItem {
        slug: "alta".to_owned(),
        name: "Alta".to_owned(),
        pass: Pass::Epic,
        verdict: Verdict::Go,
        snowfall,
        drive_minutes: 40,
        location: Coord {
            x: -111.6386,
            y: 40.5884,
        },
    }
}

#[rstest]
#[case(0.0, 5.0)]
#[case(10.0, 10.0)]
#[case(18.0, 14.0)]
#[case(30.0, 14.0)]
#[expect(
    clippy::float_cmp,
    reason = "the radius formula lands on exactly representable values"
)]
fn pin_radius_scales_and_clamps(#[case] snowfall: f64, #[case] expected: f64) {
    assert_eq!(pin(snowfall).pin_radius(), expected);
}

#[rstest]
#[case(VerdictFilter::All, Verdict::Go, true)]
#[case(VerdictFilter::All, Verdict::Maybe, true)]
#[case(VerdictFilter::All, Verdict::Skip, true)]
#[case(VerdictFilter::Go, Verdict::Go, true)]
#[case(VerdictFilter::Go, Verdict::Maybe, false)]
#[case(VerdictFilter::Go, Verdict::Skip, false)]
#[case(VerdictFilter::MaybePlus, Verdict::Go, true)]
#[case(VerdictFilter::MaybePlus, Verdict::Maybe, true)]
#[case(VerdictFilter::MaybePlus, Verdict::Skip, false)]
fn verdict_filter_modes(
    #[case] filter: VerdictFilter,
    #[case] verdict: Verdict,
    #[case] admitted: bool,
) {
    assert_eq!(filter.admits(verdict), admitted);
}

#[rstest]
fn map_filters_conjoin() {
    let mut ikon_go = pin(10.0);
    ikon_go.slug = "jackson-hole".to_owned();
    ikon_go.pass = Pass::Ikon;
    let mut epic_skip = pin(2.0);
    epic_skip.slug = "keystone".to_owned();
    epic_skip.verdict = Verdict::Skip;
    let items = vec![pin(10.0), ikon_go, epic_skip];

    let filters = MapFilters {
        pass: Some(Pass::Epic),
        verdict: VerdictFilter::MaybePlus,
    };
    let kept = filters.apply(items);

    let kept_slugs: Vec<&str> = kept.iter().map(|item| item.slug.as_str()).collect();
    assert_eq!(kept_slugs, ["alta"]);
}

#[rstest]
#[expect(
    clippy::float_cmp,
    reason = "gazetteer coordinates are compared verbatim"
)]
fn builtin_gazetteer_covers_the_shipped_resorts() {
    let gazetteer = Gazetteer::builtin();

    assert_eq!(gazetteer.len(), 100);
    let vail = gazetteer.lookup("vail").expect("vail ships coordinates");
    assert_eq!(vail.y, 39.6403);
    assert_eq!(vail.x, -106.3742);
    assert!(gazetteer.lookup("narnia").is_none());
    assert!(Gazetteer::default().is_empty());
}

#[rstest]
fn gazetteer_accepts_custom_tables() {
    let gazetteer = Gazetteer::from_pairs([(
        "backyard-hill".to_owned(),
        Coord { x: -105.0, y: 40.0 },
    )]);

    assert_eq!(gazetteer.len(), 1);
    assert!(gazetteer.lookup("backyard-hill").is_some());
}

#[rstest]
fn map_items_serialise_with_flat_coordinates() {
    let report = serde_json::to_value(pin(10.0)).expect("pins serialise");

    assert_eq!(report.get("lat"), Some(&serde_json::json!(40.5884)));
    assert_eq!(report.get("lon"), Some(&serde_json::json!(-111.6386)));
    assert_eq!(report.get("pass"), Some(&serde_json::json!("epic")));
    assert_eq!(report.get("verdict"), Some(&serde_json::json!("go")));
}
