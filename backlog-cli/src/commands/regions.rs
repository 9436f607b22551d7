use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use backlog_core::REGION_PREFERENCE;

/// List region codes in the order the resolver falls back through them.
pub(crate) fn run_regions() {
    log::info!(
        "{}",
        "Release regions (fallback order)".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    for (rank, region) in REGION_PREFERENCE.iter().enumerate() {
        log::info!(
            "  {:>2}. {} {}",
            rank + 1,
            format!("{:<14}", region.name()).if_supports_color(Stdout, |t| t.cyan()),
            format!("(code {})", region.code()).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
