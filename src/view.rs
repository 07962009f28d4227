//! Page view for the directory client.
//!
//! The page has two regions, a show list and an episode list. A renderer
//! replaces a region's contents wholesale from a record sequence; nothing is
//! ever diffed or read back. The episode region starts hidden, is revealed
//! when episodes render, and is hidden again whenever a new show list
//! renders. Each region stamps its fetch requests with a generation so that
//! a slow earlier response can never overwrite a newer one.

use crate::directory::{Episode, Show};

/// Token identifying one fetch request issued against a page region.
///
/// Obtained from [`PageView::begin_show_request`] or
/// [`PageView::begin_episode_request`] and handed back with the render call
/// for the response. A render is applied only while its token is still the
/// latest one issued for that region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// The identifier and label retained for each rendered show, backing the
/// per-show "Episodes" action.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowAction {
    pub id: u64,
    pub name: String,
}

/// A line-oriented page region whose contents are replaced wholesale.
#[derive(Debug, Default)]
struct Region {
    lines: Vec<String>,
    issued: u64,
}

impl Region {
    fn begin_request(&mut self) -> Generation {
        self.issued += 1;
        Generation(self.issued)
    }

    fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.issued
    }

    fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }
}

/// The visible page: show list plus an episode list that can be hidden.
#[derive(Debug, Default)]
pub struct PageView {
    shows: Region,
    episodes: Region,
    episodes_visible: bool,
    actions: Vec<ShowAction>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps a new show-list request.
    ///
    /// The returned token must accompany the eventual render call for the
    /// response; issuing a newer token invalidates all older ones.
    pub fn begin_show_request(&mut self) -> Generation {
        self.shows.begin_request()
    }

    /// Stamps a new episode-list request.
    pub fn begin_episode_request(&mut self) -> Generation {
        self.episodes.begin_request()
    }

    /// Replaces the show list with one entry per record.
    ///
    /// Hides the episode region unconditionally first: a new search always
    /// collapses any prior episode view. Returns false when the token is
    /// stale, in which case the page is left untouched.
    pub fn render_shows(&mut self, generation: Generation, shows: &[Show]) -> bool {
        if !self.shows.is_current(generation) {
            return false;
        }

        self.episodes_visible = false;
        self.actions = shows
            .iter()
            .map(|show| ShowAction {
                id: show.id,
                name: show.name.clone(),
            })
            .collect();

        let mut lines = Vec::new();
        for (index, show) in shows.iter().enumerate() {
            lines.extend(show_entry(index, show));
        }
        self.shows.replace(lines);
        true
    }

    /// Replaces the show list with a single message line.
    ///
    /// Used as the empty state when a search fails; also hides the episode
    /// region and drops all show actions, like a regular show render.
    pub fn render_show_message(&mut self, generation: Generation, message: &str) -> bool {
        if !self.shows.is_current(generation) {
            return false;
        }

        self.episodes_visible = false;
        self.actions.clear();
        self.shows.replace(vec![message.to_string()]);
        true
    }

    /// Replaces the episode list with one line per record and reveals the
    /// region. Revealing is idempotent. Returns false on a stale token.
    pub fn render_episodes(&mut self, generation: Generation, episodes: &[Episode]) -> bool {
        if !self.episodes.is_current(generation) {
            return false;
        }

        self.episodes
            .replace(episodes.iter().map(episode_line).collect());
        self.episodes_visible = true;
        true
    }

    /// Replaces the episode list with a single message line and reveals the
    /// region, so a failed fetch is not a silent no-op.
    pub fn render_episode_message(&mut self, generation: Generation, message: &str) -> bool {
        if !self.episodes.is_current(generation) {
            return false;
        }

        self.episodes.replace(vec![message.to_string()]);
        self.episodes_visible = true;
        true
    }

    /// The rendered show-list lines.
    pub fn show_lines(&self) -> &[String] {
        &self.shows.lines
    }

    /// The rendered episode-list lines, or None while the region is hidden.
    pub fn episode_lines(&self) -> Option<&[String]> {
        self.episodes_visible.then_some(self.episodes.lines.as_slice())
    }

    /// The "Episodes" actions of the currently rendered show list.
    pub fn show_actions(&self) -> &[ShowAction] {
        &self.actions
    }
}

/// Formats one show as a block of lines: numbered name with the directory
/// identifier, poster URL, and the summary with its markup converted to
/// plain text for the terminal.
fn show_entry(index: usize, show: &Show) -> Vec<String> {
    let mut entry = vec![
        format!("{}. {} [id {}]", index + 1, show.name, show.id),
        format!("   {}", show.image),
    ];
    let summary = nanohtml2text::html2text(&show.summary);
    for line in summary.trim().lines().filter(|line| !line.is_empty()) {
        entry.push(format!("   {line}"));
    }
    entry
}

/// Formats one episode line.
fn episode_line(episode: &Episode) -> String {
    format!(
        "Season {}, Ep. {}: {}",
        episode.season, episode.number, episode.name
    )
}
