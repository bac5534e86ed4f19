pub mod formatter;

pub use formatter::{
    chart_series, format_date, format_entry_detail, format_entry_table, format_kg, format_score,
    format_score_summary, format_series_json, format_tsv, round_score, should_use_colors,
    ChartPoint, ScoredEntry,
};
