//! # Search Commands
//!
//! The landing page's "Find Your Ride" form hands off to the listing page
//! through the URL.

use tracing::debug;

use rental_core::search::SearchForm;

/// Listing page URL for the submitted form, e.g.
/// `/vehicles?location=Miami&vehicleType=luxury`. Empty fields are left out.
pub fn build_search_url(form: &SearchForm) -> String {
    let url = form.to_url();
    debug!(url = %url, "build_search_url command");
    url
}
