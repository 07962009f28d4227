/// Data structures and traits for show directory access.
///
/// This module provides the local records for shows and episodes as surfaced
/// by a public television directory service, as well as the trait for
/// implementing directory providers.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeDirectory;

use thiserror::Error;

/// Fallback poster URL substituted when the directory has no artwork for a show.
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur while querying the show directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Request to the directory service failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the directory's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The requested show does not exist in the directory
    #[error("Show not found: {0}")]
    ShowNotFound(u64),
}

/// Represents a single television program as surfaced by the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Directory-assigned identifier, used to request episodes later
    pub id: u64,
    /// The display name of the show
    pub name: String,
    /// Summary text; may contain HTML markup as delivered by the service
    pub summary: String,
    /// Poster URL; never empty, falls back to [`MISSING_IMAGE_URL`]
    pub image: String,
}

/// Represents a single broadcast unit belonging to a show.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// Directory-assigned identifier
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub number: u32,
}

/// Trait for directory providers that can search shows and list episodes.
///
/// Implementors of this trait call a remote directory service and normalize
/// its responses into [`Show`] and [`Episode`] records, preserving the
/// remote ordering.
pub trait ShowDirectory {
    /// Searches the directory for shows matching the given term.
    ///
    /// The term is passed through verbatim as a query parameter; an empty
    /// term is valid and yields whatever the directory returns for it.
    ///
    /// # Returns
    ///
    /// A Result containing the matching shows in the order the directory
    /// returned them, or a DirectoryError
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, DirectoryError>;

    /// Fetches the episode list of a show previously returned by
    /// [`search_shows`](Self::search_shows).
    ///
    /// Episodes are returned in the order the directory delivers them,
    /// without re-sorting.
    fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError>;
}
