//! Plain-text rendering of a snapshot for the terminal driver.

use std::fmt::{self, Write};

use crate::edition::view::{self, ExploreFilter, Screen};
use crate::edition::{AppState, ClarityFlag, ScheduleFlag};

/// Multi-line overview of the edition tab, the explore list under `filter`,
/// the saved list and settings.
pub fn summary(state: &AppState, hour: u32, filter: ExploreFilter) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, state, hour, filter);
    out
}

fn write_summary(
    out: &mut String,
    state: &AppState,
    hour: u32,
    filter: ExploreFilter,
) -> fmt::Result {
    let progress = view::progress(state);

    writeln!(out, "{}", view::edition_title(hour))?;
    match view::screen(state) {
        Screen::Welcome => writeln!(out, "  {} stories ready", state.stories.len())?,
        Screen::Reading { story, .. } => {
            writeln!(
                out,
                "  Story {} of {}  [{}] {}",
                progress.position, progress.total, story.id, story.headline
            )?;
            writeln!(out, "    {}", story.summary)?;
            writeln!(out, "    Why it matters: {}", story.why_matters)?;
            writeln!(out, "    What's new: {}", story.whats_new)?;
            writeln!(
                out,
                "    {} · {} · {}",
                story.source, story.timestamp, story.read_time
            )?;
        }
        Screen::Finished => writeln!(
            out,
            "  Edition complete: {} of {} read",
            view::read_count(state),
            progress.total
        )?,
    }
    writeln!(out, "  Progress: {:.0}%", progress.fraction * 100.0)?;

    writeln!(out, "Stories ({}):", filter.label())?;
    for story in view::explore(state, filter) {
        writeln!(
            out,
            "  [{}] {}{}{}",
            story.id,
            story.headline,
            if story.is_read { " (read)" } else { "" },
            if story.is_saved { " (saved)" } else { "" },
        )?;
    }

    writeln!(out, "Saved ({}):", state.saved_stories.len())?;
    for story in &state.saved_stories {
        writeln!(out, "  [{}] {}", story.id, story.headline)?;
    }

    let clarity = &state.clarity_settings;
    writeln!(
        out,
        "Clarity: font {} ({}pt)",
        clarity.font_size,
        clarity.font_size.points()
    )?;
    for flag in ClarityFlag::all() {
        writeln!(
            out,
            "  {:<18} {:<4} {}",
            flag.label(),
            on_off(clarity.get(*flag)),
            flag.description()
        )?;
    }

    writeln!(out, "Schedule:")?;
    for flag in ScheduleFlag::all() {
        writeln!(
            out,
            "  {:<18} {:<4} {}",
            flag.label(),
            on_off(state.edition_settings.get(*flag)),
            flag.description()
        )?;
    }
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::{EditionIntent, EditionReducer};
    use crate::mvi::Reducer;

    #[test]
    fn welcome_summary_lists_all_stories() {
        let text = summary(&AppState::default(), 8, ExploreFilter::Latest);
        assert!(text.starts_with("Your Morning Edition"));
        assert!(text.contains("6 stories ready"));
        assert!(text.contains("[6] Consumer prices ease slightly"));
        assert!(text.contains("Saved (0):"));
        assert!(text.contains("Stories (Latest):"));
        assert!(text.contains("font medium (16pt)"));
    }

    #[test]
    fn reading_summary_shows_current_story() {
        let state = EditionReducer::reduce(AppState::default(), EditionIntent::StartEdition);
        let state = EditionReducer::reduce(state, EditionIntent::toggle_save("1"));
        let text = summary(&state, 20, ExploreFilter::Latest);
        assert!(text.starts_with("Your Evening Edition"));
        assert!(text.contains("Story 1 of 6  [1] Markets steady as rates hold"));
        assert!(text.contains("Saved (1):"));
        assert!(text.contains("(saved)"));
    }

    #[test]
    fn finished_summary_reports_read_count() {
        let state = std::iter::repeat(EditionIntent::NextStory)
            .take(6)
            .fold(AppState::default(), EditionReducer::reduce);
        let text = summary(&state, 13, ExploreFilter::Latest);
        assert!(text.contains("Edition complete: 6 of 6 read"));
        assert!(text.contains("Progress: 100%"));
    }

    #[test]
    fn saved_filter_lists_only_saved_stories() {
        let state = EditionReducer::reduce(AppState::default(), EditionIntent::toggle_save("4"));
        let text = summary(&state, 9, ExploreFilter::Saved);
        let stories = text
            .split("Stories (Saved):")
            .nth(1)
            .and_then(|rest| rest.split("Saved (").next())
            .unwrap();
        assert_eq!(stories.lines().filter(|l| l.contains('[')).count(), 1);
        assert!(stories.contains("[4]"));
    }

    #[test]
    fn settings_rows_carry_descriptions() {
        let text = summary(&AppState::default(), 9, ExploreFilter::Latest);
        for flag in ClarityFlag::all() {
            assert!(text.contains(flag.description()), "{}", flag.label());
        }
        for flag in ScheduleFlag::all() {
            assert!(text.contains(flag.description()), "{}", flag.label());
        }
    }
}
