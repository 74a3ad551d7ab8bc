//! Listing services for venue and artist pages.
//!
//! These functions operate on rows already loaded by the persistence layer:
//! - Grouping venues into (city, state) areas
//! - Splitting joined shows into past and upcoming sets

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::{ShowDetails, VenueArea, VenueLocation, VenueSummary};

/// Groups venues by (city, state).
///
/// Areas are ordered by state, then city; venues inside an area by name.
/// Every venue lands in exactly one area regardless of input order.
pub fn group_venues_by_area(venues: Vec<VenueLocation>) -> Vec<VenueArea> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();

    for venue in venues {
        areas
            .entry((venue.state, venue.city))
            .or_default()
            .push(VenueSummary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows: venue.show_count,
            });
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            VenueArea {
                city,
                state,
                venues,
            }
        })
        .collect()
}

/// Shows split around a single instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowSchedule {
    pub past: Vec<ShowDetails>,
    pub upcoming: Vec<ShowDetails>,
}

/// Splits shows into past (`start_time < now`) and upcoming (`start_time > now`).
///
/// A show starting exactly at `now` is in neither set. Both sets are
/// ordered by start time.
pub fn partition_shows(shows: Vec<ShowDetails>, now: DateTime<Utc>) -> ShowSchedule {
    let mut schedule = ShowSchedule::default();

    for show in shows {
        if show.start_time < now {
            schedule.past.push(show);
        } else if show.start_time > now {
            schedule.upcoming.push(show);
        }
    }

    schedule.past.sort_by_key(|s| (s.start_time, s.show_id));
    schedule.upcoming.sort_by_key(|s| (s.start_time, s.show_id));
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use fake::faker::company::en::CompanyName;
    use fake::Fake;

    fn venue(id: i64, name: &str, city: &str, state: &str) -> VenueLocation {
        VenueLocation {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            show_count: id,
        }
    }

    fn show(id: i64, start_time: DateTime<Utc>) -> ShowDetails {
        ShowDetails {
            show_id: id,
            start_time,
            artist_id: 1,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            venue_id: 1,
            venue_name: "The Musical Hop".to_string(),
            venue_image_link: None,
        }
    }

    #[test]
    fn test_group_venues_by_area() {
        let areas = group_venues_by_area(vec![
            venue(3, "The Dueling Pianos Bar", "New York", "NY"),
            venue(2, "The Musical Hop", "San Francisco", "CA"),
            venue(1, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "CA");
        assert_eq!(areas[0].city, "San Francisco");
        let names: Vec<_> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Park Square Live Music & Coffee", "The Musical Hop"]
        );
        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues[0].num_upcoming_shows, 3);
    }

    #[test]
    fn test_same_city_name_in_different_states_stays_apart() {
        let areas = group_venues_by_area(vec![
            venue(1, "Riverside Hall", "Portland", "OR"),
            venue(2, "Harbor Stage", "Portland", "ME"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
    }

    #[test]
    fn test_every_venue_in_exactly_one_sorted_area() {
        let cities = [("Austin", "TX"), ("Dallas", "TX"), ("Miami", "FL")];
        let venues: Vec<VenueLocation> = (1..=30)
            .map(|id| {
                let (city, state) = cities[(id as usize) % cities.len()];
                let name: String = CompanyName().fake();
                venue(id, &name, city, state)
            })
            .collect();

        let areas = group_venues_by_area(venues);

        let mut seen: Vec<i64> = areas
            .iter()
            .flat_map(|a| a.venues.iter().map(|v| v.id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=30).collect::<Vec<_>>());

        for area in &areas {
            assert!(area.venues.windows(2).all(|w| w[0].name <= w[1].name));
        }
        let keys: Vec<_> = areas.iter().map(|a| (&a.state, &a.city)).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_group_venues_empty() {
        assert!(group_venues_by_area(Vec::new()).is_empty());
    }

    #[test]
    fn test_partition_shows_past_and_upcoming() {
        let now: DateTime<Utc> = "2026-10-19T12:00:00Z".parse().unwrap();
        let schedule = partition_shows(
            vec![
                show(1, now + Duration::days(30)),
                show(2, now - Duration::days(400)),
                show(3, now + Duration::hours(1)),
                show(4, now - Duration::seconds(1)),
            ],
            now,
        );

        let past: Vec<_> = schedule.past.iter().map(|s| s.show_id).collect();
        let upcoming: Vec<_> = schedule.upcoming.iter().map(|s| s.show_id).collect();
        assert_eq!(past, vec![2, 4]);
        assert_eq!(upcoming, vec![3, 1]);
    }

    #[test]
    fn test_partition_show_at_now_is_in_neither_set() {
        let now: DateTime<Utc> = "2026-10-19T12:00:00Z".parse().unwrap();
        let schedule = partition_shows(vec![show(1, now)], now);
        assert!(schedule.past.is_empty());
        assert!(schedule.upcoming.is_empty());
    }

    #[test]
    fn test_partition_is_exclusive_and_exhaustive() {
        let now: DateTime<Utc> = "2026-10-19T12:00:00Z".parse().unwrap();
        let shows: Vec<_> = (-10..=10)
            .filter(|offset| *offset != 0)
            .map(|offset| show(offset + 100, now + Duration::minutes(offset)))
            .collect();
        let total = shows.len();

        let schedule = partition_shows(shows, now);

        assert_eq!(schedule.past.len() + schedule.upcoming.len(), total);
        assert!(schedule.past.iter().all(|s| s.start_time < now));
        assert!(schedule.upcoming.iter().all(|s| s.start_time > now));
        assert!(schedule
            .past
            .iter()
            .all(|p| !schedule.upcoming.iter().any(|u| u.show_id == p.show_id)));
    }
}
