//! Screen routes
//!
//! Screens are keyed by plain string routes and carry no payload; data moves
//! between screens through controller state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    #[serde(rename = "registro")]
    Registration,
    #[serde(rename = "resumen")]
    Summary,
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "home_page")]
    Home,
    #[serde(rename = "profile_page")]
    Profile,
    #[serde(rename = "settings_page")]
    Settings,
    #[serde(rename = "catalog")]
    Catalog,
}

impl Route {
    pub const START: Route = Route::Registration;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registro",
            Self::Summary => "resumen",
            Self::Login => "login",
            Self::Home => "home_page",
            Self::Profile => "profile_page",
            Self::Settings => "settings_page",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registro" => Ok(Self::Registration),
            "resumen" => Ok(Self::Summary),
            "login" => Ok(Self::Login),
            "home_page" => Ok(Self::Home),
            "profile_page" => Ok(Self::Profile),
            "settings_page" => Ok(Self::Settings),
            "catalog" => Ok(Self::Catalog),
            other => Err(format!("Unknown route '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::START.as_str(), "registro");
        assert_eq!(Route::Home.to_string(), "home_page");
        assert_eq!("resumen".parse::<Route>(), Ok(Route::Summary));
        assert!("nowhere".parse::<Route>().is_err());
    }
}
