/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One entry of the TVMaze search response, wrapping the actual show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The show record nested inside the search hit
    pub show: TvMazeShow,
}

/// A show record from the TVMaze API.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// Numeric show identifier, unique within TVMaze
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster image URLs (may be null when TVMaze has no artwork)
    pub image: Option<TvMazeImage>,
}

/// Image URL pair attached to a TVMaze show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// Medium-resolution poster URL
    pub medium: Option<String>,
}

/// A single episode from the TVMaze API.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Numeric episode identifier
    pub id: u64,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
}
