/// TVMaze directory provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{DirectoryError, Episode, MISSING_IMAGE_URL, Show, ShowDirectory};

/// Show directory backed by the TVMaze API.
///
/// This provider queries https://api.tvmaze.com using the search endpoint
/// for shows and the per-show episodes endpoint for episode lists.
pub struct TvMazeDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeDirectory {
    /// Creates a new TVMaze directory instance.
    pub fn new() -> Self {
        Self::with_base_url("https://api.tvmaze.com")
    }

    /// Creates a directory instance pointed at a different endpoint,
    /// e.g. a local stub of the service.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Converts one TVMaze search hit to our internal Show structure.
    ///
    /// Unwraps the nested show record and keeps its medium image URL when
    /// present; shows without artwork get the fixed fallback URL. Name and
    /// summary pass through unchanged, markup included.
    fn convert_show(result: TvMazeSearchResult) -> Show {
        let show = result.show;
        Show {
            id: show.id,
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            image: show
                .image
                .and_then(|image| image.medium)
                .unwrap_or_else(|| MISSING_IMAGE_URL.to_string()),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(episode: TvMazeEpisode) -> Episode {
        Episode {
            id: episode.id,
            name: episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: episode.season,
            number: episode.number,
        }
    }

    /// Maps a non-success HTTP status to a request error.
    fn status_error(status: reqwest::StatusCode) -> DirectoryError {
        DirectoryError::RequestError(format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ))
    }
}

impl Default for TvMazeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowDirectory for TvMazeDirectory {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, DirectoryError> {
        // Build the API URL
        let url = format!("{}/search/shows", self.base_url);

        // Make the HTTP request with the term as a query parameter
        let response = self
            .client
            .get(&url)
            .query(&[("q", term)])
            .send()
            .map_err(|e| DirectoryError::RequestError(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        // Parse the JSON response
        let results: Vec<TvMazeSearchResult> = response
            .json()
            .map_err(|e| DirectoryError::ParseError(e.to_string()))?;

        // Convert to our internal structures, preserving remote ordering
        Ok(results.into_iter().map(Self::convert_show).collect())
    }

    fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DirectoryError::RequestError(e.to_string()))?;

        // Check if the show exists
        if response.status() == 404 {
            return Err(DirectoryError::ShowNotFound(show_id));
        }

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        let episodes: Vec<TvMazeEpisode> = response
            .json()
            .map_err(|e| DirectoryError::ParseError(e.to_string()))?;

        // Episodes keep the order the API delivered them in
        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}
