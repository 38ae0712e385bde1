use api::Listing;
use dioxus::prelude::*;

use crate::components::{Container, EmptyState};
use crate::listings::ListingCard;

#[cfg(debug_assertions)]
fn log_home_render(listing_count: usize) {
    // Lightweight render trace for diagnosing refresh issues.
    println!("[home] render ({listing_count} listings)");
}

/// What the page shows once the catalog has resolved.
#[derive(Debug, Clone, PartialEq)]
enum HomeContent {
    Empty,
    Grid(Vec<Listing>),
}

impl HomeContent {
    fn from_listings(listings: Vec<Listing>) -> Self {
        if listings.is_empty() {
            HomeContent::Empty
        } else {
            HomeContent::Grid(listings)
        }
    }
}

/// Landing page: the catalog grid, or the empty state when nothing matches.
///
/// Loading is fenced by the shell's `SuspenseBoundary`; a failed fetch
/// aborts the render into the shell's `ErrorBoundary`.
#[component]
pub fn Home() -> Element {
    let mut catalog = use_resource(|| async move {
        // Both halves must land before the empty-vs-grid decision.
        futures::join!(api::get_listings(), api::get_current_user())
    });

    let snapshot = catalog.suspend()?;
    let (listings, session) = snapshot.cloned();
    let (listings, session) = (
        listings.map_err(dioxus::CapturedError::from_display)?,
        session.map_err(dioxus::CapturedError::from_display)?,
    );

    #[cfg(debug_assertions)]
    log_home_render(listings.len());

    match HomeContent::from_listings(listings) {
        HomeContent::Empty => rsx! {
            EmptyState {
                show_reset: true,
                on_reset: EventHandler::new(move |_| catalog.restart()),
            }
        },
        HomeContent::Grid(listings) => rsx! {
            Container {
                div { class: "listing-grid",
                    for listing in listings.into_iter() {
                        ListingCard {
                            key: "{listing.id}",
                            listing: listing.clone(),
                            session: session.clone(),
                        }
                    }
                }
            }
        },
    }
}
