use crate::trip_id::TripId;

/// Server routes the client links to or calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripRoute {
    Home,
    Planner,
    Generate,
    Trips,
    Dashboard { trip_id: TripId },
    TripDetail { trip_id: TripId },
    Export { trip_id: TripId },
    DeleteTrip { trip_id: TripId },
}

impl TripRoute {
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Planner => "/planner".to_string(),
            Self::Generate => "/generate".to_string(),
            Self::Trips => "/trips".to_string(),
            Self::Dashboard { trip_id } => format!("/dashboard/{trip_id}"),
            Self::TripDetail { trip_id } => format!("/trip/{trip_id}"),
            Self::Export { trip_id } => format!("/export/{trip_id}"),
            Self::DeleteTrip { trip_id } => format!("/delete_trip/{trip_id}"),
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["planner"] => Some(Self::Planner),
            ["generate"] => Some(Self::Generate),
            ["trips"] => Some(Self::Trips),
            ["dashboard", id] => trip_id_segment(id).map(|trip_id| Self::Dashboard { trip_id }),
            ["trip", id] => trip_id_segment(id).map(|trip_id| Self::TripDetail { trip_id }),
            ["export", id] => trip_id_segment(id).map(|trip_id| Self::Export { trip_id }),
            ["delete_trip", id] => {
                trip_id_segment(id).map(|trip_id| Self::DeleteTrip { trip_id })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn trip_id(&self) -> Option<&TripId> {
        match self {
            Self::Dashboard { trip_id }
            | Self::TripDetail { trip_id }
            | Self::Export { trip_id }
            | Self::DeleteTrip { trip_id } => Some(trip_id),
            Self::Home | Self::Planner | Self::Generate | Self::Trips => None,
        }
    }
}

fn trip_id_segment(raw: &str) -> Option<TripId> {
    TripId::parse(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> TripId {
        TripId::parse(raw).expect("valid trip id")
    }

    #[test]
    fn trip_routes_round_trip() {
        let routes = [
            TripRoute::Home,
            TripRoute::Planner,
            TripRoute::Generate,
            TripRoute::Trips,
            TripRoute::Dashboard { trip_id: id("abc123") },
            TripRoute::TripDetail { trip_id: id("7") },
            TripRoute::Export { trip_id: id("7") },
            TripRoute::DeleteTrip { trip_id: id("42") },
        ];
        for route in routes {
            assert_eq!(TripRoute::from_path(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn from_path_ignores_query_hash_and_trailing_slash() {
        assert_eq!(
            TripRoute::from_path("/dashboard/9/?tab=budget#top"),
            Some(TripRoute::Dashboard { trip_id: id("9") })
        );
        assert_eq!(TripRoute::from_path(""), Some(TripRoute::Home));
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(TripRoute::from_path("/dashboard"), None);
        assert_eq!(TripRoute::from_path("/dashboard/1/extra"), None);
        assert_eq!(TripRoute::from_path("/settings"), None);
    }

    #[test]
    fn only_trip_scoped_routes_expose_ids() {
        assert_eq!(TripRoute::Trips.trip_id(), None);
        assert_eq!(
            TripRoute::Export { trip_id: id("3") }.trip_id(),
            Some(&id("3"))
        );
    }
}
