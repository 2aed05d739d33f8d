//! Event card presentation.
//!
//! Turns an [`Event`] into the values a card displays. Two tag names are
//! sentinels: the age restriction tag becomes a badge and the free admission
//! tag is represented by the price field, so neither shows up as a regular
//! tag badge.

use serde::{Deserialize, Serialize};

use crate::model::{Event, Tag};

/// Tag names with special rendering meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentinels {
    /// Tag that marks an event as adults only.
    pub adults_only: String,
    /// Tag that marks an event as free to enter.
    pub free_admission: String,
}

impl Sentinels {
    pub const DEFAULT_ADULTS_ONLY: &str = "Ab 18 Jahren";
    pub const DEFAULT_FREE_ADMISSION: &str = "Eintritt frei";

    /// Returns true if `tag` is rendered through a dedicated element.
    pub fn is_sentinel(&self, tag: &Tag) -> bool {
        tag.name() == self.adults_only || tag.name() == self.free_admission
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            adults_only: Self::DEFAULT_ADULTS_ONLY.to_string(),
            free_admission: Self::DEFAULT_FREE_ADMISSION.to_string(),
        }
    }
}

/// Currency suffix appended to non-free prices.
pub const DEFAULT_CURRENCY_SUFFIX: &str = "€";

/// Display values for one event card.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub title: String,
    pub url: String,
    pub adults_only: bool,
    pub price: String,
    pub ics_link: String,
    pub location_name: String,
    pub maps_link: String,
    pub website: String,
    pub visible_tags: Vec<Tag>,
}

impl EventCard {
    /// Builds the card for `event` with the default currency suffix.
    pub fn from_event(event: &Event, sentinels: &Sentinels) -> Self {
        Self::with_currency(event, sentinels, DEFAULT_CURRENCY_SUFFIX)
    }

    pub fn with_currency(event: &Event, sentinels: &Sentinels, currency_suffix: &str) -> Self {
        Self {
            title: event.title.clone(),
            url: event.url.clone(),
            adults_only: event.has_tag(&sentinels.adults_only),
            price: format_price_with(event.price, currency_suffix),
            ics_link: event.ics_link.clone(),
            location_name: event.location.name.clone(),
            maps_link: event.location.maps_link.clone(),
            website: event.location.website.clone(),
            visible_tags: visible_tags(&event.tags, sentinels),
        }
    }
}

/// Returns `tags` in order without the sentinel tags.
pub fn visible_tags(tags: &[Tag], sentinels: &Sentinels) -> Vec<Tag> {
    tags.iter()
        .filter(|tag| !sentinels.is_sentinel(tag))
        .cloned()
        .collect()
}

/// Formats a price as `"Free"` or e.g. `"4.00€"`.
pub fn format_price(price: Option<f64>) -> String {
    format_price_with(price, DEFAULT_CURRENCY_SUFFIX)
}

/// Formats a price with an explicit currency suffix.
///
/// Missing, zero and non-finite amounts are free. Other amounts are rounded
/// half away from zero to cents and always shown with two decimals.
pub fn format_price_with(price: Option<f64>, currency_suffix: &str) -> String {
    match price {
        Some(amount) if amount != 0.0 && amount.is_finite() => {
            // `+ 0.0` turns a rounded `-0.0` into `0.0`.
            let rounded = (amount * 100.0).round() / 100.0 + 0.0;
            format!("{rounded:.2}{currency_suffix}")
        }
        _ => "Free".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    fn event(price: Option<f64>, tags: &[&str]) -> Event {
        Event {
            id: Some("1".to_string()),
            title: "Night".to_string(),
            price,
            ics_link: "https://ics/1".to_string(),
            url: "https://events/1".to_string(),
            location: Location {
                id: None,
                name: "Club".to_string(),
                maps_link: "https://maps/club".to_string(),
                website: "https://club".to_string(),
            },
            tags: tags.iter().copied().map(Tag::new).collect(),
        }
    }

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(Tag::name).collect()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(0.0)), "Free");
        assert_eq!(format_price(None), "Free");
        assert_eq!(format_price(Some(4.0)), "4.00€");
        assert_eq!(format_price(Some(3.456)), "3.46€");
        assert_eq!(format_price(Some(5.0)), "5.00€");
        assert_eq!(format_price(Some(12.1)), "12.10€");
    }

    #[test]
    fn test_format_price_non_finite_is_free() {
        assert_eq!(format_price(Some(f64::NAN)), "Free");
        assert_eq!(format_price(Some(f64::INFINITY)), "Free");
    }

    #[test]
    fn test_format_price_tiny_negative_has_no_sign() {
        assert_eq!(format_price(Some(-0.001)), "0.00€");
        assert_eq!(format_price(Some(-2.5)), "-2.50€");
    }

    #[test]
    fn test_format_price_custom_suffix() {
        assert_eq!(format_price_with(Some(7.5), " EUR"), "7.50 EUR");
        assert_eq!(format_price_with(Some(0.0), " EUR"), "Free");
    }

    #[test]
    fn test_adults_only_badge_and_visible_tags() {
        let card = EventCard::from_event(
            &event(Some(5.0), &["Ab 18 Jahren", "Techno"]),
            &Sentinels::default(),
        );

        assert!(card.adults_only);
        assert_eq!(names(&card.visible_tags), ["Techno"]);
        assert_eq!(card.price, "5.00€");
    }

    #[test]
    fn test_free_admission_tag_hidden_without_badge() {
        let card = EventCard::from_event(&event(Some(0.0), &["Eintritt frei"]), &Sentinels::default());

        assert!(!card.adults_only);
        assert!(card.visible_tags.is_empty());
        assert_eq!(card.price, "Free");
    }

    #[test]
    fn test_visible_tags_keep_source_order() {
        let card = EventCard::from_event(
            &event(None, &["Jazz", "Eintritt frei", "Ambient", "Ab 18 Jahren", "Live"]),
            &Sentinels::default(),
        );

        assert_eq!(names(&card.visible_tags), ["Jazz", "Ambient", "Live"]);
    }

    #[test]
    fn test_sentinels_match_exact_names_only() {
        let card = EventCard::from_event(&event(None, &["ab 18 jahren"]), &Sentinels::default());

        assert!(!card.adults_only);
        assert_eq!(names(&card.visible_tags), ["ab 18 jahren"]);
    }

    #[test]
    fn test_configured_sentinels() {
        let sentinels = Sentinels {
            adults_only: "18+".to_string(),
            free_admission: "Free entry".to_string(),
        };
        let card = EventCard::from_event(&event(None, &["18+", "Free entry", "Ab 18 Jahren"]), &sentinels);

        assert!(card.adults_only);
        assert_eq!(names(&card.visible_tags), ["Ab 18 Jahren"]);
    }

    #[test]
    fn test_card_copies_links() {
        let card = EventCard::from_event(&event(None, &[]), &Sentinels::default());

        assert_eq!(card.url, "https://events/1");
        assert_eq!(card.ics_link, "https://ics/1");
        assert_eq!(card.maps_link, "https://maps/club");
        assert_eq!(card.website, "https://club");
        assert_eq!(card.location_name, "Club");
    }
}
