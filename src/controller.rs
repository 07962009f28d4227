//! Interaction controller wiring user triggers to fetch and render steps.

use crate::directory::ShowDirectory;
use crate::view::PageView;

/// Drives the two request/render pipelines against one page view.
///
/// Each trigger is an independent fetch-then-render sequence: a search replaces
/// the show list (collapsing any episode view), and opening a show's
/// episodes replaces and reveals the episode list. The controller holds no
/// state of its own beyond the directory handle and the view; failed fetches
/// are turned into an empty-state message in the affected region rather than
/// surfacing as errors.
pub struct Controller<D>
where
    D: ShowDirectory,
{
    directory: D,
    view: PageView,
}

impl<D> Controller<D>
where
    D: ShowDirectory,
{
    /// Creates a controller around the given directory with a fresh page.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            view: PageView::new(),
        }
    }

    /// Search trigger: fetches shows for the term and replaces the show list.
    ///
    /// The term is forwarded verbatim, empty included. Whether the fetch
    /// succeeds or not, the episode region ends up hidden.
    pub fn search(&mut self, term: &str) {
        let generation = self.view.begin_show_request();
        match self.directory.search_shows(term) {
            Ok(shows) => {
                self.view.render_shows(generation, &shows);
            }
            Err(err) => {
                self.view
                    .render_show_message(generation, &format!("Could not load shows: {err}"));
            }
        }
    }

    /// Episodes trigger: fetches the episode list for a rendered show and
    /// replaces and reveals the episode region.
    ///
    /// The identifier comes from one of the view's show actions.
    pub fn open_episodes(&mut self, show_id: u64) {
        let generation = self.view.begin_episode_request();
        match self.directory.episodes_of_show(show_id) {
            Ok(episodes) => {
                self.view.render_episodes(generation, &episodes);
            }
            Err(err) => {
                self.view
                    .render_episode_message(generation, &format!("Could not load episodes: {err}"));
            }
        }
    }

    /// The page as currently rendered.
    pub fn view(&self) -> &PageView {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectoryError, Episode, MISSING_IMAGE_URL, Show};

    /// Canned directory standing in for the remote service. A None slot
    /// simulates a failing fetch.
    struct StubDirectory {
        shows: Option<Vec<Show>>,
        episodes: Option<Vec<Episode>>,
    }

    impl ShowDirectory for StubDirectory {
        fn search_shows(&self, _term: &str) -> Result<Vec<Show>, DirectoryError> {
            self.shows
                .clone()
                .ok_or_else(|| DirectoryError::RequestError("unreachable".to_string()))
        }

        fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError> {
            self.episodes
                .clone()
                .ok_or(DirectoryError::ShowNotFound(show_id))
        }
    }

    fn bletchley() -> Show {
        Show {
            id: 139,
            name: "The Bletchley Circle".to_string(),
            summary: "<p>Code breakers turned detectives.</p>".to_string(),
            image: MISSING_IMAGE_URL.to_string(),
        }
    }

    fn pilot_and_two() -> Vec<Episode> {
        vec![
            Episode {
                id: 1,
                name: "Pilot".to_string(),
                season: 1,
                number: 1,
            },
            Episode {
                id: 2,
                name: "Two".to_string(),
                season: 1,
                number: 2,
            },
        ]
    }

    #[test]
    fn test_search_renders_shows_and_hides_episodes() {
        let mut controller = Controller::new(StubDirectory {
            shows: Some(vec![bletchley()]),
            episodes: Some(pilot_and_two()),
        });

        controller.open_episodes(139);
        assert!(controller.view().episode_lines().is_some());

        controller.search("bletchly");

        let view = controller.view();
        assert!(view.episode_lines().is_none());
        assert_eq!(view.show_actions().len(), 1);
        assert_eq!(view.show_actions()[0].id, 139);
        // The placeholder poster URL made it through to the page
        assert!(view.show_lines().iter().any(|l| l.contains(MISSING_IMAGE_URL)));
    }

    #[test]
    fn test_open_episodes_renders_and_reveals() {
        let mut controller = Controller::new(StubDirectory {
            shows: Some(vec![bletchley()]),
            episodes: Some(pilot_and_two()),
        });

        controller.search("bletchly");
        let id = controller.view().show_actions()[0].id;
        controller.open_episodes(id);

        let lines = controller.view().episode_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Season 1, Ep. 1: Pilot");
        assert_eq!(lines[1], "Season 1, Ep. 2: Two");
    }

    #[test]
    fn test_failed_search_renders_empty_state() {
        let mut controller = Controller::new(StubDirectory {
            shows: None,
            episodes: Some(Vec::new()),
        });

        controller.search("anything");

        let view = controller.view();
        assert!(view.show_actions().is_empty());
        assert_eq!(view.show_lines().len(), 1);
        assert!(view.show_lines()[0].starts_with("Could not load shows:"));
        assert!(view.episode_lines().is_none());
    }

    #[test]
    fn test_failed_episode_fetch_renders_visible_message() {
        let mut controller = Controller::new(StubDirectory {
            shows: Some(vec![bletchley()]),
            episodes: None,
        });

        controller.search("bletchly");
        controller.open_episodes(139);

        let lines = controller.view().episode_lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Could not load episodes:"));
    }
}
