use std::io::Write;

use owo_colors::OwoColorize;

use mostra_core::{CatalogStats, Work};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print one extracted record in the compact listing format.
pub fn print_work(w: &mut dyn Write, work: &Work, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "[p.{}] {} {}",
            work.page_number,
            work.title.cyan(),
            format!("({})", work.work_type).dimmed()
        )?;
    } else {
        writeln!(
            w,
            "[p.{}] {} ({})",
            work.page_number, work.title, work.work_type
        )?;
    }

    if !work.authors.is_empty() {
        writeln!(w, "    {}", work.authors.join(", "))?;
    }
    if !work.key_words.is_empty() {
        writeln!(w, "    palavras-chave: {}", work.key_words.join("; "))?;
    }

    let summary: String = work.summary.chars().take(100).collect();
    if !summary.is_empty() {
        let ellipsis = if summary.len() < work.summary.len() {
            "..."
        } else {
            ""
        };
        writeln!(w, "    {}{}", summary, ellipsis)?;
    }
    writeln!(w)?;
    Ok(())
}

/// Print the aggregate counts.
pub fn print_stats(w: &mut dyn Write, stats: &CatalogStats, color: ColorMode) -> std::io::Result<()> {
    writeln!(w, "Trabalhos: {}", stats.total_works)?;
    if color.enabled() {
        writeln!(
            w,
            "  {} apresentações orais",
            stats.oral_presentations.green()
        )?;
        writeln!(w, "  {} exposições", stats.expositions.green())?;
    } else {
        writeln!(w, "  {} apresentações orais", stats.oral_presentations)?;
        writeln!(w, "  {} exposições", stats.expositions)?;
    }
    Ok(())
}
