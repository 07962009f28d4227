//! tvscout - Search the TVMaze show directory and browse episode lists
//!
//! This library provides the core functionality for querying a public
//! television directory, normalizing its responses into local show and
//! episode records, and rendering those records into a two-region page view
//! (a show list and a collapsible episode list).

mod controller;
mod directory;
mod view;

pub use controller::Controller;
pub use directory::{
    DirectoryError, Episode, MISSING_IMAGE_URL, Show, ShowDirectory, TvMazeDirectory,
};
pub use view::{Generation, PageView, ShowAction};
