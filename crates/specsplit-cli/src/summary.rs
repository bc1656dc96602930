use std::path::PathBuf;

use console::Style;
use specsplit_core::pipeline::OutputLayout;

/// Counters accumulated over one batch run.
#[derive(Default)]
pub struct BatchStats {
    pub divided: usize,
    pub skipped: usize,
    pub failures: Vec<(PathBuf, String)>,
}

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    warn: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            warn: Style::new().yellow(),
        }
    }
}

pub fn print_batch_summary(stats: &BatchStats, layout: &OutputLayout) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Specsplit Summary"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<16}{}",
        s.label.apply_to("Divided"),
        s.value.apply_to(stats.divided)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("No transition"),
        s.value.apply_to(stats.skipped)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Failed"),
        s.value.apply_to(stats.failures.len())
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Before halves"),
        s.path.apply_to(layout.before_dir.display())
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("After halves"),
        s.path.apply_to(layout.after_dir.display())
    );

    for (path, error) in &stats.failures {
        println!(
            "  {} {}: {}",
            s.warn.apply_to("failed"),
            path.display(),
            error
        );
    }
    println!();
}
