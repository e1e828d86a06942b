pub mod formatter;
pub mod report;

pub use formatter::{
    format_error_json, format_explanation, format_json, format_project_detail,
    format_ranked_table, format_score, format_summary, format_tsv, should_use_colors,
};
pub use report::save_report;
