//! Integration tests for the skills dashboard

use skills_dashboard::config::{Config, OutputFormat};
use skills_dashboard::engine::matching::user_skill_set;
use skills_dashboard::engine::{
    aggregate_skill_counts, apply_filters, compute_match_score, filter_by_min_count,
    DashboardEngine, Dimension, SelectionSet, SkillSelections,
};
use skills_dashboard::input::loader::TableLoader;
use skills_dashboard::input::{SkillCategory, TableCache};
use skills_dashboard::output::{Report, ReportGenerator};
use skills_dashboard::SkillsDashboardError;
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/skills_with_jobs.csv";

fn engine() -> DashboardEngine {
    DashboardEngine::new(&Config::default())
        .unwrap()
        .with_data_path(FIXTURE)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_load_ignores_extra_columns() {
    let table = TableLoader::default().load(Path::new(FIXTURE)).unwrap();

    assert_eq!(table.len(), 16);
    let first = &table.records()[0];
    assert_eq!(first.company_name, "Acme");
    assert_eq!(first.skill, "Python");
    assert_eq!(first.skill_type, "TECHNOLOGY");
}

#[test]
fn test_load_tab_separated() {
    let table = TableLoader::default()
        .load(Path::new("tests/fixtures/skills_with_jobs.tsv"))
        .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[1].skill, "SQL, advanced");
}

#[test]
fn test_missing_columns_reported_together() {
    let result = TableLoader::default().load(Path::new("tests/fixtures/missing_column.csv"));

    match result {
        Err(SkillsDashboardError::MissingColumn(columns)) => {
            assert!(columns.contains("Skill"));
            assert!(columns.contains("Type"));
        }
        other => panic!("expected MissingColumn, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_unsupported_table_file() {
    let result = TableLoader::default().load(Path::new("Cargo.toml"));
    assert!(matches!(result, Err(SkillsDashboardError::UnsupportedFormat(_))));
}

#[test]
fn test_filters_and_across_dimensions_or_within() {
    let table = TableLoader::default().load(Path::new(FIXTURE)).unwrap();

    let germany_or_spain = SelectionSet::new().with(Dimension::Country, ["Germany", "Spain"]);
    assert_eq!(apply_filters(table.records(), &germany_or_spain).len(), 13);

    let entry_level_germany = SelectionSet::new()
        .with(Dimension::Country, ["Germany"])
        .with(Dimension::SeniorityLevel, ["Entry level"]);
    assert_eq!(apply_filters(table.records(), &entry_level_germany).len(), 4);

    let everything = SelectionSet::new()
        .with(Dimension::Country, ["All"])
        .with(Dimension::Company, Vec::<String>::new());
    assert_eq!(apply_filters(table.records(), &everything).len(), 16);

    let nowhere = SelectionSet::new().with(Dimension::Country, ["Atlantis"]);
    assert!(apply_filters(table.records(), &nowhere).is_empty());
}

#[test]
fn test_company_filter_uses_company_column() {
    let table = TableLoader::default().load(Path::new(FIXTURE)).unwrap();
    let globex = SelectionSet::new().with(Dimension::Company, ["Globex"]);

    let skills: Vec<&str> = apply_filters(table.records(), &globex)
        .iter()
        .map(|r| r.skill.as_str())
        .collect();
    assert_eq!(skills, vec!["Python", "Excel", "Reporting"]);
}

#[test]
fn test_counts_and_threshold() {
    let table = TableLoader::default().load(Path::new(FIXTURE)).unwrap();
    let counts = aggregate_skill_counts(table.records());

    assert_eq!(counts.len(), 10);
    assert_eq!(counts[0].skill, "Python");
    assert_eq!(counts[0].count, 4);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 16);

    let kept = filter_by_min_count(&counts, 1);
    let frequent: Vec<&str> = kept.iter().map(|c| c.skill.as_str()).collect();
    assert_eq!(frequent, vec!["Python", "SQL", "Communication", "Statistics"]);
    assert!(filter_by_min_count(&counts, 4).is_empty());
}

#[test]
fn test_skill_chart_display_order() {
    let mut engine = engine();
    let report = engine.skill_chart(&SelectionSet::new(), Some(1)).unwrap();

    let skills: Vec<&str> = report.skills.iter().map(|s| s.skill.as_str()).collect();
    assert_eq!(skills, vec!["SQL", "Communication", "Statistics", "Python"]);
    assert_eq!(report.count_range, Some((1, 4)));
}

#[test]
fn test_skill_chart_default_threshold_keeps_top_skill() {
    let mut engine = engine();
    let report = engine.skill_chart(&SelectionSet::new(), None).unwrap();

    assert_eq!(report.requested_threshold, 10);
    assert_eq!(report.threshold, 3);
    let skills: Vec<&str> = report.skills.iter().map(|s| s.skill.as_str()).collect();
    assert_eq!(skills, vec!["Python"]);
}

#[test]
fn test_skill_chart_default_on_narrow_selections() {
    let mut engine = engine();

    let acme = SelectionSet::new().with(Dimension::Company, ["Acme"]);
    let report = engine.skill_chart(&acme, None).unwrap();
    assert_eq!(report.count_range, Some((1, 2)));
    assert_eq!(report.threshold, 1);
    assert!(!report.skills.is_empty());

    // Every Spanish skill appears once, so all of them are charted.
    let spain = SelectionSet::new().with(Dimension::Country, ["Spain"]);
    let report = engine.skill_chart(&spain, None).unwrap();
    assert_eq!(report.count_range, Some((1, 1)));
    assert_eq!(report.threshold, 0);
    assert_eq!(report.skills.len(), 3);
}

#[test]
fn test_match_with_every_category_named() {
    let mut engine = engine();
    let context = SelectionSet::new().with(Dimension::Country, ["Germany"]);
    let skills = SkillSelections::new()
        .with(SkillCategory::Technology, ["Python"])
        .with(SkillCategory::Technical, ["Statistics"])
        .with(SkillCategory::Business, ["Accounting"])
        .with(SkillCategory::Soft, ["Teamwork"]);

    let report = engine.match_score(&context, &skills).unwrap();
    assert_eq!(report.score.total, 10);
    assert_eq!(report.score.matching, 6);
    assert!(close(report.score.score, 0.6));
    assert!(close(report.score.complement, 0.4));
}

#[test]
fn test_match_unset_categories_count_in_full() {
    let mut engine = engine();
    let context = SelectionSet::new()
        .with(Dimension::Country, ["Germany"])
        .with(Dimension::EmploymentType, ["Full-time"]);
    let skills = SkillSelections::new().with(SkillCategory::Technology, ["Python"]);

    // 3 Python rows plus every TECHNICAL and SOFT row; only the SQL row is missed.
    let report = engine.match_score(&context, &skills).unwrap();
    assert_eq!(report.score.matching, 9);
    assert!(close(report.score.score, 0.9));
}

#[test]
fn test_match_on_empty_context_has_no_score() {
    let mut engine = engine();
    let context = SelectionSet::new()
        .with(Dimension::Country, ["Spain"])
        .with(Dimension::SeniorityLevel, ["Entry level"]);

    let result = engine.match_score(&context, &SkillSelections::new());
    assert!(matches!(result, Err(SkillsDashboardError::EmptyContextSet)));
}

#[test]
fn test_match_pipeline_by_hand() {
    let table = TableLoader::default().load(Path::new(FIXTURE)).unwrap();
    let context = SelectionSet::new().with(Dimension::Country, ["France"]);
    let context_set = apply_filters(table.records(), &context);
    let skills = SkillSelections::new()
        .with(SkillCategory::Technology, ["Excel"])
        .with(SkillCategory::Business, ["Negotiation"]);

    // Excel plus nothing from BUSINESS; France has no TECHNICAL or SOFT rows.
    let matching = user_skill_set(&context_set, &skills);
    let score = compute_match_score(&context_set, &matching).unwrap();
    assert_eq!(score.matching, 1);
    assert!(close(score.score, 0.33));
}

#[test]
fn test_match_rejects_non_context_dimensions() {
    let mut engine = engine();
    let context = SelectionSet::new().with(Dimension::JobPosition, ["Data Analyst"]);

    let result = engine.match_score(&context, &SkillSelections::new());
    assert!(matches!(result, Err(SkillsDashboardError::InvalidDimension(_))));
}

#[test]
fn test_candidates_for_context() {
    let mut engine = engine();
    let context = SelectionSet::new().with(Dimension::Country, ["Germany"]);
    let report = engine.candidates(&context).unwrap();

    assert_eq!(report.context_records, 10);
    let lists: Vec<(SkillCategory, Vec<String>)> = report
        .categories
        .into_iter()
        .map(|c| (c.category, c.skills))
        .collect();
    assert_eq!(lists[0].0, SkillCategory::Technical);
    assert_eq!(lists[0].1, vec!["Statistics", "Machine Learning"]);
    assert_eq!(lists[1].0, SkillCategory::Technology);
    assert_eq!(lists[1].1, vec!["Python", "SQL"]);
    assert!(lists[2].1.is_empty());
    assert_eq!(lists[3].1, vec!["Communication", "Teamwork"]);
}

#[test]
fn test_options_lists() {
    let mut engine = engine();
    let report = engine.options(&[Dimension::Country, Dimension::EmploymentType]).unwrap();

    assert_eq!(report.dimensions[0].options, vec!["All", "Germany", "France", "Spain"]);
    assert_eq!(report.dimensions[1].options, vec!["All", "Full-time", "Contract", "Part-time"]);
}

#[test]
fn test_invalid_dimension_name() {
    let mut selections = SelectionSet::new();
    let result = selections.parse_filter("contry=Germany");

    match result {
        Err(SkillsDashboardError::InvalidDimension(message)) => {
            assert!(message.contains("country"))
        }
        other => panic!("expected InvalidDimension, got {:?}", other),
    }
}

#[test]
fn test_cache_reloads_only_on_path_change() {
    let mut cache = TableCache::new(TableLoader::default());

    let first = cache.get_or_load(Path::new(FIXTURE)).unwrap();
    let second = cache.get_or_load(Path::new(FIXTURE)).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(cache.load_count(), 1);

    cache.get_or_load(Path::new("tests/fixtures/skills_with_jobs.tsv")).unwrap();
    assert_eq!(cache.load_count(), 2);

    cache.invalidate();
    cache.get_or_load(Path::new(FIXTURE)).unwrap();
    assert_eq!(cache.load_count(), 3);
}

#[test]
fn test_reports_render_in_every_format() {
    let mut engine = engine();
    let chart = Report::SkillChart(engine.skill_chart(&SelectionSet::new(), Some(1)).unwrap());
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    let console = generator.generate_report(&chart, &OutputFormat::Console).unwrap();
    assert!(console.contains("Python"));

    let json = generator.generate_report(&chart, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["skills"][3]["skill"], "Python");
    assert_eq!(value["skills"][3]["type"], "TECHNOLOGY");

    let markdown = generator.generate_report(&chart, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("| Python | 4 | TECHNOLOGY |"));

    let html = generator.generate_report(&chart, &OutputFormat::Html).unwrap();
    assert!(html.contains("<h1>Skill Frequency</h1>"));
}
