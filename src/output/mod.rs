pub mod markdown;

pub use markdown::{render_detail_table, render_detail_tables, render_summary_table, summary_total};
