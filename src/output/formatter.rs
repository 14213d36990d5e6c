//! Output formatters for dashboard reports

use crate::config::OutputFormat;
use crate::engine::aggregate::SkillCount;
use crate::error::{Result, SkillsDashboardError};
use crate::input::record::SkillCategory;
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 40;
const MAX_LABEL_WIDTH: usize = 32;

/// Trait for rendering dashboard reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored bar charts
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with CSS bar charts
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

const HTML_STYLES: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #333;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { border-bottom: 3px solid #007acc; padding-bottom: 15px; margin-bottom: 20px; }
        .filters { color: #6c757d; font-size: 0.95em; }
        .legend span { display: inline-block; margin-right: 15px; }
        .swatch { display: inline-block; width: 12px; height: 12px; margin-right: 5px; border-radius: 2px; }
        .bar-row { display: grid; grid-template-columns: 240px 1fr 60px; align-items: center; gap: 10px; margin: 3px 0; }
        .bar-label { text-align: right; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
        .bar { height: 16px; border-radius: 3px; }
        .donut { width: 260px; height: 260px; border-radius: 50%; margin: 20px auto; position: relative; }
        .donut-hole { position: absolute; inset: 30%; background: white; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 1.6em; font-weight: bold; }
        .category { margin: 15px 0; }
        .metadata { background: #e9ecef; padding: 12px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
"#;

/// Askama template for HTML skill charts
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}<style>{{ styles|safe }}</style>{% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ title }}</h1>
            <p class="filters">{{ filters }}</p>
            <p>{{ summary }}</p>
        </div>
        <div class="legend">
            {% for entry in legend %}<span><span class="swatch" style="background: {{ entry.color }}"></span>{{ entry.label }}</span>{% endfor %}
        </div>
        <div class="chart">
            {% for bar in bars %}
            <div class="bar-row">
                <div class="bar-label" title="{{ bar.label }}">{{ bar.label }}</div>
                <div><div class="bar" style="width: {{ bar.width }}%; background: {{ bar.color }}"></div></div>
                <div>{{ bar.count }}</div>
            </div>
            {% endfor %}
            {% if bars.is_empty() %}<p>No skill appears more than {{ threshold }} times for this selection.</p>{% endif %}
        </div>
        <div class="metadata">{{ metadata }}</div>
    </div>
</body>
</html>"#, ext = "html")]
struct ChartHtmlTemplate {
    include_styles: bool,
    styles: &'static str,
    title: String,
    filters: String,
    summary: String,
    threshold: usize,
    legend: Vec<HtmlLegendEntry>,
    bars: Vec<HtmlBar>,
    metadata: String,
}

/// Askama template for the HTML match score donut
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}<style>{{ styles|safe }}</style>{% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ title }}</h1>
            <p class="filters">{{ filters }}</p>
        </div>
        <div class="donut" style="background: conic-gradient(#2ca02c 0 {{ matching_pct }}%, #d62728 {{ matching_pct }}% 100%)">
            <div class="donut-hole">{{ matching_pct }}%</div>
        </div>
        <p><strong>Matching:</strong> {{ score }} | <strong>Not Matching:</strong> {{ complement }} ({{ matching }} of {{ total }} skill mentions)</p>
        <h2>Your Skills</h2>
        <ul>
            {% for line in selections %}<li>{{ line }}</li>{% endfor %}
        </ul>
        <div class="metadata">{{ metadata }}</div>
    </div>
</body>
</html>"#, ext = "html")]
struct MatchHtmlTemplate {
    include_styles: bool,
    styles: &'static str,
    title: String,
    filters: String,
    matching_pct: u8,
    score: String,
    complement: String,
    matching: usize,
    total: usize,
    selections: Vec<String>,
    metadata: String,
}

/// Askama template for grouped value lists (candidates, options)
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
    {% if include_styles %}<style>{{ styles|safe }}</style>{% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ title }}</h1>
            <p class="filters">{{ subtitle }}</p>
        </div>
        {% for group in groups %}
        <div class="category">
            <h3>{{ group.heading }}</h3>
            <p>{{ group.items }}</p>
        </div>
        {% endfor %}
        <div class="metadata">{{ metadata }}</div>
    </div>
</body>
</html>"#, ext = "html")]
struct ListHtmlTemplate {
    include_styles: bool,
    styles: &'static str,
    title: String,
    subtitle: String,
    groups: Vec<HtmlGroup>,
    metadata: String,
}

#[derive(Debug, Clone)]
struct HtmlBar {
    label: String,
    count: usize,
    width: String,
    color: &'static str,
}

#[derive(Debug, Clone)]
struct HtmlLegendEntry {
    label: &'static str,
    color: &'static str,
}

#[derive(Debug, Clone)]
struct HtmlGroup {
    heading: String,
    items: String,
}

/// Chart color for a raw `Type` value.
fn category_color(skill_type: &str) -> Color {
    match SkillCategory::parse(skill_type) {
        Some(SkillCategory::Technical) => Color::Blue,
        Some(SkillCategory::Technology) => Color::Green,
        Some(SkillCategory::Business) => Color::Yellow,
        Some(SkillCategory::Soft) => Color::Magenta,
        None => Color::White,
    }
}

fn category_hex(skill_type: &str) -> &'static str {
    match SkillCategory::parse(skill_type) {
        Some(SkillCategory::Technical) => "#2f6fb0",
        Some(SkillCategory::Technology) => "#2ca02c",
        Some(SkillCategory::Business) => "#e5ae38",
        Some(SkillCategory::Soft) => "#a44aa8",
        None => "#8c8c8c",
    }
}

fn describe_filters(filters: &[AppliedFilter]) -> String {
    if filters.is_empty() {
        return "Filters: none (all records)".to_string();
    }
    let parts: Vec<String> = filters
        .iter()
        .map(|f| format!("{}: {}", f.label, f.values.join(", ")))
        .collect();
    format!("Filters: {}", parts.join(" | "))
}

fn describe_selection(selection: &CategorySelection) -> String {
    if selection.whole_category {
        format!("{}: all (no skills named)", selection.category.label())
    } else {
        format!("{}: {}", selection.category.label(), selection.skills.join(", "))
    }
}

fn bar_length(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    ((count as f64 / max_count as f64) * width as f64).round().max(1.0) as usize
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG MATCH", Color::Green),
            60..=79 => ("GOOD MATCH", Color::BrightGreen),
            40..=59 => ("PARTIAL MATCH", Color::Yellow),
            20..=39 => ("WEAK MATCH", Color::BrightRed),
            _ => ("POOR MATCH", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_legend(&self, order: &[SkillCategory]) -> String {
        let entries: Vec<String> = order
            .iter()
            .map(|c| format!("{} {}", self.colorize("■", category_color(c.as_str())), c.label()))
            .collect();
        format!("Legend: {}\n", entries.join("  "))
    }

    fn format_bar(&self, entry: &SkillCount, max_count: usize, label_width: usize) -> String {
        let label = truncate_label(&entry.skill, MAX_LABEL_WIDTH);
        let bar = "█".repeat(bar_length(entry.count, max_count, BAR_WIDTH));
        let mut line = format!(
            "{:>width$} │ {} {}",
            label,
            self.colorize(&bar, category_color(&entry.skill_type)),
            entry.count,
            width = label_width
        );
        if self.detailed {
            let skill_type = format!("({})", entry.skill_type);
            line.push_str(&format!(" {}", self.colorize(&skill_type, Color::BrightBlack)));
        }
        line.push('\n');
        line
    }

    fn format_chart(&self, report: &SkillChartReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 SKILL FREQUENCY", 1));
        output.push_str(&format!("{}\n", describe_filters(&report.filters)));
        output.push_str(&format!(
            "{} of {} records | {} distinct skills | showing skills seen more than {} times\n",
            report.filtered_records,
            report.metadata.total_records,
            report.distinct_skills,
            report.threshold
        ));
        if let Some((min, max)) = report.count_range {
            output.push_str(&format!("Count range: {} - {}\n", min, max));
        }
        if report.threshold != report.requested_threshold {
            output.push_str(&self.colorize(
                &format!(
                    "Threshold {} adjusted to {}\n",
                    report.requested_threshold, report.threshold
                ),
                Color::Yellow,
            ));
        }
        output.push_str(&self.format_legend(&report.category_order));
        output.push('\n');

        if report.skills.is_empty() {
            output.push_str(&self.colorize(
                "No skills above the threshold for this selection.\n",
                Color::Yellow,
            ));
            return output;
        }

        let label_width = report
            .skills
            .iter()
            .map(|s| s.skill.chars().count().min(MAX_LABEL_WIDTH))
            .max()
            .unwrap_or(0);
        let max_count = report.max_count();

        // Largest bar on top, like a horizontal bar chart read top-down.
        for entry in report.skills.iter().rev() {
            output.push_str(&self.format_bar(entry, max_count, label_width));
        }
        output
    }

    fn format_match(&self, report: &MatchReport) -> String {
        let mut output = String::new();
        let score = &report.score;

        output.push_str(&self.format_header("🎯 SKILLS MATCH", 1));
        output.push_str(&format!("{}\n", describe_filters(&report.filters)));

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "Matching: {:.2} | Not Matching: {:.2} {}\n",
            score.score,
            score.complement,
            self.format_score_badge(score.percentage())
        ));
        let filled = bar_length(score.matching, score.total, BAR_WIDTH).min(BAR_WIDTH);
        let filled = if score.matching == 0 { 0 } else { filled };
        output.push_str(&format!(
            "{}{}\n",
            self.colorize(&"█".repeat(filled), Color::Green),
            self.colorize(&"░".repeat(BAR_WIDTH - filled), Color::Red)
        ));
        output.push_str(&format!("{} of {} skill mentions covered\n", score.matching, score.total));

        output.push_str(&self.format_header("Your Skills", 3));
        for selection in &report.selected_skills {
            output.push_str(&format!("  • {}\n", describe_selection(selection)));
        }
        output
    }

    fn format_candidates(&self, report: &CandidateReport) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("🧰 AVAILABLE SKILLS", 1));
        output.push_str(&format!("{}\n", describe_filters(&report.filters)));
        output.push_str(&format!("{} context records\n", report.context_records));

        for group in &report.categories {
            output.push_str(&self.format_header(
                &format!("{} ({})", group.category.label(), group.skills.len()),
                3,
            ));
            let shown: Vec<&str> = if self.detailed {
                group.skills.iter().map(String::as_str).collect()
            } else {
                group.skills.iter().take(15).map(String::as_str).collect()
            };
            output.push_str(&format!("  {}\n", shown.join(", ")));
            if shown.len() < group.skills.len() {
                output.push_str(&format!("  ... and {} more\n", group.skills.len() - shown.len()));
            }
        }
        output
    }

    fn format_options(&self, report: &OptionsReport) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("🔧 FILTER OPTIONS", 1));
        for dimension in &report.dimensions {
            let heading = if self.detailed {
                format!(
                    "{} ({}, column {})",
                    dimension.label, dimension.dimension, dimension.column
                )
            } else {
                format!("{} ({})", dimension.label, dimension.dimension)
            };
            output.push_str(&self.format_header(&heading, 3));
            for option in &dimension.options {
                output.push_str(&format!("  • {}\n", option));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = match report {
            Report::SkillChart(chart) => self.format_chart(chart),
            Report::Match(matching) => self.format_match(matching),
            Report::Candidates(candidates) => self.format_candidates(candidates),
            Report::Options(options) => self.format_options(options),
        };

        if self.detailed {
            let metadata = report_metadata(report);
            output.push_str(&format!(
                "\n{}\n",
                self.colorize(
                    &format!(
                        "Source: {} ({} records) | Generated: {}",
                        metadata.source,
                        metadata.total_records,
                        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
                    ),
                    Color::BrightBlack
                )
            ));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn format_chart(report: &SkillChartReport) -> String {
        let mut md = String::new();
        md.push_str("# Skill Frequency\n\n");
        md.push_str(&format!("{}\n\n", describe_filters(&report.filters)));
        md.push_str(&format!(
            "**Records:** {} of {} | **Distinct skills:** {} | **Threshold:** more than {}\n\n",
            report.filtered_records,
            report.metadata.total_records,
            report.distinct_skills,
            report.threshold
        ));

        if report.skills.is_empty() {
            md.push_str("_No skills above the threshold for this selection._\n");
            return md;
        }

        md.push_str("| Skill | Count | Type |\n");
        md.push_str("|-------|------:|------|\n");
        for entry in report.skills.iter().rev() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_markdown(&entry.skill),
                entry.count,
                entry.skill_type
            ));
        }
        md
    }

    fn format_match(report: &MatchReport) -> String {
        let mut md = String::new();
        md.push_str("# Skills Match\n\n");
        md.push_str(&format!("{}\n\n", describe_filters(&report.filters)));
        md.push_str("| | Score |\n|---|---:|\n");
        for (label, value) in report.score.slices() {
            md.push_str(&format!("| {} | {:.2} |\n", label, value));
        }
        md.push_str(&format!(
            "\n{} of {} skill mentions covered.\n\n## Your Skills\n\n",
            report.score.matching, report.score.total
        ));
        for selection in &report.selected_skills {
            md.push_str(&format!("- {}\n", escape_markdown(&describe_selection(selection))));
        }
        md
    }

    fn format_candidates(report: &CandidateReport) -> String {
        let mut md = String::new();
        md.push_str("# Available Skills\n\n");
        md.push_str(&format!(
            "{} ({} context records)\n",
            describe_filters(&report.filters),
            report.context_records
        ));
        for group in &report.categories {
            md.push_str(&format!("\n## {}\n\n", group.category.label()));
            for (i, skill) in group.skills.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, escape_markdown(skill)));
            }
        }
        md
    }

    fn format_options(report: &OptionsReport) -> String {
        let mut md = String::new();
        md.push_str("# Filter Options\n");
        for dimension in &report.dimensions {
            md.push_str(&format!(
                "\n## {} (`{}`, column `{}`)\n\n",
                dimension.label, dimension.dimension, dimension.column
            ));
            for option in &dimension.options {
                md.push_str(&format!("- {}\n", escape_markdown(option)));
            }
        }
        md
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut md = match report {
            Report::SkillChart(chart) => Self::format_chart(chart),
            Report::Match(matching) => Self::format_match(matching),
            Report::Candidates(candidates) => Self::format_candidates(candidates),
            Report::Options(options) => Self::format_options(options),
        };

        if self.include_metadata {
            let metadata = report_metadata(report);
            md.push_str(&format!(
                "\n---\n\n_Generated by Skills Dashboard v{} on {} from `{}` ({} records)_\n",
                metadata.dashboard_version,
                metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                metadata.source,
                metadata.total_records
            ));
        }
        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn metadata_line(metadata: &ReportMetadata) -> String {
        format!(
            "Generated by Skills Dashboard v{} on {} | Source: {} ({} records)",
            metadata.dashboard_version,
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.source,
            metadata.total_records
        )
    }

    fn chart_template(&self, report: &SkillChartReport) -> ChartHtmlTemplate {
        let max_count = report.max_count();
        let bars = report
            .skills
            .iter()
            .rev()
            .map(|entry| HtmlBar {
                label: entry.skill.clone(),
                count: entry.count,
                width: format!("{:.1}", entry.count as f64 / max_count.max(1) as f64 * 100.0),
                color: category_hex(&entry.skill_type),
            })
            .collect();

        ChartHtmlTemplate {
            include_styles: self.include_styles,
            styles: HTML_STYLES,
            title: "Skill Frequency".to_string(),
            filters: describe_filters(&report.filters),
            summary: format!(
                "{} of {} records, {} distinct skills, showing skills seen more than {} times",
                report.filtered_records,
            report.metadata.total_records,
            report.distinct_skills,
            report.threshold
            ),
            threshold: report.threshold,
            legend: report
                .category_order
                .iter()
                .map(|c| HtmlLegendEntry {
                    label: c.label(),
                    color: category_hex(c.as_str()),
                })
                .collect(),
            bars,
            metadata: Self::metadata_line(&report.metadata),
        }
    }

    fn match_template(&self, report: &MatchReport) -> MatchHtmlTemplate {
        MatchHtmlTemplate {
            include_styles: self.include_styles,
            styles: HTML_STYLES,
            title: "Skills Match".to_string(),
            filters: describe_filters(&report.filters),
            matching_pct: report.score.percentage(),
            score: format!("{:.2}", report.score.score),
            complement: format!("{:.2}", report.score.complement),
            matching: report.score.matching,
            total: report.score.total,
            selections: report.selected_skills.iter().map(describe_selection).collect(),
            metadata: Self::metadata_line(&report.metadata),
        }
    }

    fn list_template(
        &self,
        title: &str,
        subtitle: String,
        groups: Vec<HtmlGroup>,
        metadata: &ReportMetadata,
    ) -> ListHtmlTemplate {
        ListHtmlTemplate {
            include_styles: self.include_styles,
            styles: HTML_STYLES,
            title: title.to_string(),
            subtitle,
            groups,
            metadata: Self::metadata_line(metadata),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let html = match report {
            Report::SkillChart(chart) => self.chart_template(chart).render()?,
            Report::Match(matching) => self.match_template(matching).render()?,
            Report::Candidates(candidates) => {
                let groups = candidates
                    .categories
                    .iter()
                    .map(|g| HtmlGroup {
                        heading: format!("{} ({})", g.category.label(), g.skills.len()),
                        items: g.skills.join(", "),
                    })
                    .collect();
                let subtitle = format!(
                    "{} ({} context records)",
                    describe_filters(&candidates.filters),
                    candidates.context_records
                );
                self.list_template("Available Skills", subtitle, groups, &candidates.metadata)
                    .render()?
            }
            Report::Options(options) => {
                let groups = options
                    .dimensions
                    .iter()
                    .map(|d| HtmlGroup {
                        heading: d.label.clone(),
                        items: d.options.join(", "),
                    })
                    .collect();
                self.list_template("Filter Options", String::new(), groups, &options.metadata)
                    .render()?
            }
        };
        Ok(html)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

fn report_metadata(report: &Report) -> &ReportMetadata {
    match report {
        Report::SkillChart(r) => &r.metadata,
        Report::Match(r) => &r.metadata,
        Report::Candidates(r) => &r.metadata,
        Report::Options(r) => &r.metadata,
    }
}

impl ReportGenerator {
    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors, detailed)),
                Box::new(JsonFormatter::new(pretty_json)),
                Box::new(MarkdownFormatter::new(include_metadata)),
                Box::new(HtmlFormatter::new(include_html_styles)),
            ],
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        let formatter = self
            .formatters
            .iter()
            .find(|f| f.supports_format() == *format)
            .ok_or_else(|| {
                SkillsDashboardError::UnsupportedFormat(format!("No formatter for {:?}", format))
            })?;
        formatter.format_report(report)
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where `--save` writes: a directory gets a generated, timestamped file name.
pub fn resolve_save_path(target: &Path, format: &OutputFormat, report: &Report) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, report.file_stem(), true))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, report_name: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}{}.{}", report_name, timestamp_suffix, extension)
}
