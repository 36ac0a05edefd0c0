use explorer_core::{Country, ExplorerView, FilterStore};
use std::io::{self, Write};

/// `83240525` -> `83,240,525`.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn country_line(c: &Country) -> String {
    let mut line = format!(
        "{} [{}] - Region: {} - Population: {}",
        c.name(),
        c.code(),
        c.region(),
        format_population(c.population())
    );
    if let Some(capital) = c.capital() {
        line.push_str(" - Capital: ");
        line.push_str(capital);
    }
    line
}

/// Prints filters, the summary line and (up to `limit`) matching countries.
pub fn render_view<S: FilterStore>(
    out: &mut impl Write,
    view: &ExplorerView<S>,
    limit: Option<usize>,
) -> io::Result<()> {
    let state = view.filter_state();
    writeln!(
        out,
        "[{}] search={:?} region={:?}",
        view.store().kind(),
        state.search_text,
        state.region_filter
    )?;
    writeln!(out, "{}", view.summary())?;

    let filtered = view.filtered();
    let shown = limit.unwrap_or(filtered.len()).min(filtered.len());
    for c in &filtered[..shown] {
        writeln!(out, "  {}", country_line(c))?;
    }
    if shown < filtered.len() {
        writeln!(out, "  … {} more", filtered.len() - shown)?;
    }
    Ok(())
}
