//! Fixed, argument-free queries issued by the dashboard.

/// Full event list with nested location and tags.
pub const EVENTS_QUERY: &str = r"{
  events {
    id
    title
    location {
      id
      name
      mapsLink
      website
    }
    price
    icsLink
    tags {
      id
      name
    }
    url
  }
}";

/// Catalog of every known tag.
pub const TAGS_QUERY: &str = r"{
  tags {
    name
  }
}";
