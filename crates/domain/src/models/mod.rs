//! Domain models for Fyyur.

pub mod artist;
pub mod listing;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistDetail, ArtistForm, ArtistList};
pub use listing::{
    DeleteOutcome, DeletePolicy, DeleteResponse, FormTemplate, MutationResponse, SearchHit,
    SearchRequest, SearchResults, ShowCountMode,
};
pub use show::{
    ArtistAppearance, NewShowForm, Show, ShowDetails, ShowForm, ShowList, ShowListing,
    VenueAppearance,
};
pub use venue::{Venue, VenueArea, VenueDetail, VenueForm, VenueLocation, VenueSummary};
