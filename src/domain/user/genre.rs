//! Favorite genre categories and their persisted form

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator used when a genre set is written to a single column
pub const GENRE_SEPARATOR: char = ',';

/// Genre a user can pick as a favorite during registration.
///
/// The upper-case token returned by [`FavoriteGenre::as_str`] is what gets
/// persisted; it must stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FavoriteGenre {
    #[serde(rename = "SUSPENSO")]
    Suspense,
    #[serde(rename = "ACCION")]
    Action,
    #[serde(rename = "MISTERIO")]
    Mystery,
    #[serde(rename = "FICCION")]
    Fiction,
    #[serde(rename = "TERROR")]
    Horror,
    #[serde(rename = "HISTORIA")]
    History,
}

impl FavoriteGenre {
    pub const ALL: [FavoriteGenre; 6] = [
        Self::Suspense,
        Self::Action,
        Self::Mystery,
        Self::Fiction,
        Self::Horror,
        Self::History,
    ];

    /// Persisted token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suspense => "SUSPENSO",
            Self::Action => "ACCION",
            Self::Mystery => "MISTERIO",
            Self::Fiction => "FICCION",
            Self::Horror => "TERROR",
            Self::History => "HISTORIA",
        }
    }

    /// Label shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Suspense => "Suspenso",
            Self::Action => "Acción",
            Self::Mystery => "Misterio",
            Self::Fiction => "Ficción",
            Self::Horror => "Terror",
            Self::History => "Historia",
        }
    }
}

impl fmt::Display for FavoriteGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl fmt::Display for UnknownGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown genre '{}'", self.0)
    }
}

impl std::error::Error for UnknownGenre {}

impl FromStr for FavoriteGenre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// Join a genre set into its column form, e.g. `ACCION,TERROR`
pub fn genres_to_column(genres: &BTreeSet<FavoriteGenre>) -> String {
    genres
        .iter()
        .map(FavoriteGenre::as_str)
        .collect::<Vec<_>>()
        .join(&GENRE_SEPARATOR.to_string())
}

/// Parse a column back into a set. Tokens that are not genre names are dropped.
pub fn genres_from_column(column: &str) -> BTreeSet<FavoriteGenre> {
    column
        .split(GENRE_SEPARATOR)
        .map(str::trim)
        .filter_map(|token| token.parse().ok())
        .collect()
}
