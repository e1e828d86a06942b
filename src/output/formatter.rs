use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::analysis::AnalysisResult;
use crate::ranking::ScoredProject;
use crate::scoring::{Factor, PriorityCategory, Tag};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Scores are always shown with two decimals ("3.80")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Input values print without a trailing ".0" when integral ("4", "4.5")
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn paint_category(category: PriorityCategory, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match category {
        PriorityCategory::High => text.green().bold().to_string(),
        PriorityCategory::Medium => text.yellow().to_string(),
        PriorityCategory::Low => text.dimmed().to_string(),
    }
}

/// Join tags with ", ". Cautions get a warning marker.
pub fn format_explanation(tags: &[Tag], use_colors: bool) -> String {
    tags.iter()
        .map(|tag| {
            if tag.is_caution() {
                let label = format!("{} ⚠", tag.label());
                if use_colors {
                    label.yellow().to_string()
                } else {
                    label
                }
            } else {
                tag.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format projects as a ranked table with columns: Rank, Score, Category, Name, Explanation
/// No headers. Rank column right-aligned with trailing dot, score 5 chars ("5.00").
pub fn format_ranked_table(result: &AnalysisResult, use_colors: bool) -> String {
    render_table(result, use_colors, get_terminal_width())
}

fn render_table(result: &AnalysisResult, use_colors: bool, term_width: Option<usize>) -> String {
    if result.projects.is_empty() {
        return "No projects found.".to_string();
    }

    let rank_width = result.total_projects.to_string().len().max(2);
    let score_width = 5;
    let category_width = 6;
    let separator = "  ";

    result
        .projects
        .iter()
        .map(|project| {
            let rank_str = format!("{:>width$}.", project.rank, width = rank_width);
            let score_str = format!("{:>width$}", format_score(project.priority_score), width = score_width);
            let category_str = format!(
                "{:<width$}",
                project.priority_category.as_str(),
                width = category_width
            );
            let explanation = format_explanation(&project.explanation, use_colors);

            // Explanation is kept whole; the name gives way on narrow terminals
            let plain_explanation_len = format_explanation(&project.explanation, false).chars().count();
            let fixed_width = rank_width
                + 1
                + 1
                + score_width
                + category_width
                + separator.len() * 3
                + plain_explanation_len;

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_title(&project.project_name, width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_title(&project.project_name, 20),
                // No terminal (pipe), don't truncate
                None => project.project_name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    rank_str.dimmed(),
                    score_str.bold(),
                    separator,
                    paint_category(project.priority_category, &category_str, true),
                    separator,
                    name,
                    separator,
                    explanation
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    rank_str, score_str, separator, category_str, separator, name, separator, explanation
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line totals, e.g. "Total: 4 projects (High: 2, Medium: 1, Low: 1)"
pub fn format_summary(result: &AnalysisResult, use_colors: bool) -> String {
    let noun = if result.total_projects == 1 { "project" } else { "projects" };
    let summary = &result.summary;
    format!(
        "Total: {} {} ({}: {}, {}: {}, {}: {})",
        result.total_projects,
        noun,
        paint_category(PriorityCategory::High, "High", use_colors),
        summary.high,
        paint_category(PriorityCategory::Medium, "Medium", use_colors),
        summary.medium,
        paint_category(PriorityCategory::Low, "Low", use_colors),
        summary.low
    )
}

/// Format a single project with detailed multi-line output (for verbose mode)
pub fn format_project_detail(project: &ScoredProject, use_colors: bool) -> String {
    let mut lines = vec![format!(
        "{}. {}",
        project.rank,
        if use_colors {
            project.project_name.bold().to_string()
        } else {
            project.project_name.clone()
        }
    )];
    lines.push(format!(
        "  Score: {} ({})",
        format_score(project.priority_score),
        paint_category(project.priority_category, project.priority_category.as_str(), use_colors)
    ));
    for contribution in &project.breakdown {
        let label = match contribution.factor {
            Factor::Impact => "Impact",
            Factor::Urgency => "Urgency",
            Factor::Effort => "Effort",
            Factor::Cost => "Cost",
        };
        let value = if contribution.factor.is_inverted() {
            format!(
                "{} (inverted {})",
                format_value(contribution.raw),
                format_value(contribution.oriented)
            )
        } else {
            format_value(contribution.raw)
        };
        lines.push(format!(
            "  {}: {} x {} = {:.4}",
            label, value, contribution.weight, contribution.points
        ));
    }
    lines.push(format!(
        "  Why: {}",
        format_explanation(&project.explanation, use_colors)
    ));
    lines.join("\n")
}

/// Format projects as tab-separated values for scripting
/// Columns: rank, score, category, name, explanation (no headers, no colors)
pub fn format_tsv(result: &AnalysisResult) -> String {
    result
        .projects
        .iter()
        .map(|project| {
            let explanation = project
                .explanation
                .iter()
                .map(Tag::label)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{}\t{}\t{}\t{}\t{}",
                project.rank,
                format_score(project.priority_score),
                project.priority_category,
                tsv_field(&project.project_name),
                tsv_field(&explanation)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep one record per line and five columns per record.
fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    success: bool,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
}

/// Pretty JSON success payload: `{"success": true, "total_projects": .., ..}`
pub fn format_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SuccessBody {
        success: true,
        result,
    })
}

/// Pretty JSON failure payload: `{"success": false, "error": ".."}`
pub fn format_error_json(message: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ErrorBody {
        success: false,
        error: message,
    })
}
