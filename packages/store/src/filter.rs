//! # Client-side hotel filtering
//!
//! [`HotelFilter`] derives the visible subset of an already-fetched hotel list
//! from three resettable criteria. It never touches the base list; callers keep
//! the full list and re-run [`HotelFilter::apply`] whenever a criterion changes.
//!
//! | Criterion | Inactive value | Match rule |
//! |-----------|----------------|------------|
//! | search text | blank | case-insensitive substring of hotel name or city name |
//! | price range | `min = 0, max = 0` | `price >= min` and (`max == 0` or `price <= max`) |
//! | city | [`ALL_CITIES`] | exact city name |
//!
//! ## Composition
//!
//! [`FilterMode::Independent`] applies only the most recently changed criterion
//! to the full list, so picking a city discards an active price range and vice
//! versa. [`FilterMode::Combined`] requires every active criterion to match.

use crate::models::Hotel;

/// Sentinel city value meaning "no city filter".
pub const ALL_CITIES: &str = "All Cities";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Last-changed criterion wins.
    #[default]
    Independent,
    /// All active criteria must match.
    Combined,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `0, 0` disables the price filter.
    pub fn is_unbounded(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    pub fn contains(&self, price: f64) -> bool {
        if self.is_unbounded() {
            return true;
        }
        price >= self.min && (self.max == 0.0 || price <= self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Criterion {
    Search,
    Price,
    City,
}

/// Search text, price range and city, plus which one changed last.
#[derive(Clone, Debug, PartialEq)]
pub struct HotelFilter {
    mode: FilterMode,
    search: String,
    price: PriceRange,
    city: String,
    last_changed: Option<Criterion>,
}

impl Default for HotelFilter {
    fn default() -> Self {
        Self::new(FilterMode::default())
    }
}

impl HotelFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            search: String::new(),
            price: PriceRange::default(),
            city: ALL_CITIES.to_string(),
            last_changed: None,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.last_changed = Some(Criterion::Search);
    }

    pub fn set_price(&mut self, min: f64, max: f64) {
        self.price = PriceRange::new(min, max);
        self.last_changed = Some(Criterion::Price);
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
        self.last_changed = Some(Criterion::City);
    }

    /// Back to the sentinel values; [`apply`](Self::apply) returns the full list again.
    pub fn reset(&mut self) {
        self.search.clear();
        self.price = PriceRange::default();
        self.city = ALL_CITIES.to_string();
        self.last_changed = None;
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.price.is_unbounded() || self.city != ALL_CITIES
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        match self.mode {
            FilterMode::Independent => match self.last_changed {
                None => true,
                Some(Criterion::Search) => self.matches_search(hotel),
                Some(Criterion::Price) => self.price.contains(hotel.price),
                Some(Criterion::City) => self.matches_city(hotel),
            },
            FilterMode::Combined => {
                self.matches_search(hotel)
                    && self.price.contains(hotel.price)
                    && self.matches_city(hotel)
            }
        }
    }

    /// The derived view over `hotels`, in their original order.
    pub fn apply(&self, hotels: &[Hotel]) -> Vec<Hotel> {
        hotels.iter().filter(|h| self.matches(h)).cloned().collect()
    }

    fn matches_search(&self, hotel: &Hotel) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        hotel.name.to_lowercase().contains(&needle)
            || hotel.city.name.to_lowercase().contains(&needle)
    }

    fn matches_city(&self, hotel: &Hotel) -> bool {
        self.city == ALL_CITIES || hotel.city.name == self.city
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn hotel(id: i64, name: &str, city: &str, price: f64) -> Hotel {
        Hotel {
            id,
            name: name.to_string(),
            price,
            city: City {
                id,
                name: city.to_string(),
                country: "Peru".to_string(),
            },
            ..Default::default()
        }
    }

    fn hotels() -> Vec<Hotel> {
        vec![
            hotel(1, "Casa Andina", "Lima", 80.0),
            hotel(2, "Inkaterra", "Cusco", 250.0),
            hotel(3, "Miraflores Park", "Lima", 300.0),
            hotel(4, "Hostal Sol", "Arequipa", 40.0),
        ]
    }

    fn ids(list: &[Hotel]) -> Vec<i64> {
        list.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_fresh_filter_returns_everything() {
        let filter = HotelFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&hotels()), hotels());
    }

    #[test]
    fn test_zero_price_range_is_identity() {
        for mode in [FilterMode::Independent, FilterMode::Combined] {
            let mut filter = HotelFilter::new(mode);
            filter.set_price(0.0, 0.0);
            assert_eq!(filter.apply(&hotels()), hotels());
        }
    }

    #[test]
    fn test_all_cities_is_identity() {
        for mode in [FilterMode::Independent, FilterMode::Combined] {
            let mut filter = HotelFilter::new(mode);
            filter.set_city(ALL_CITIES);
            assert_eq!(filter.apply(&hotels()), hotels());
        }
    }

    #[test]
    fn test_city_filter_exact_name() {
        let mut filter = HotelFilter::default();
        filter.set_city("Lima");
        assert_eq!(ids(&filter.apply(&hotels())), vec![1, 3]);

        filter.set_city("lima");
        assert!(filter.apply(&hotels()).is_empty());
    }

    #[test]
    fn test_search_matches_name_or_city_case_insensitively() {
        let mut filter = HotelFilter::default();
        filter.set_search("CUSCO");
        assert_eq!(ids(&filter.apply(&hotels())), vec![2]);

        filter.set_search("park");
        assert_eq!(ids(&filter.apply(&hotels())), vec![3]);

        filter.set_search("   ");
        assert_eq!(filter.apply(&hotels()), hotels());
    }

    #[test]
    fn test_price_bounds() {
        let mut filter = HotelFilter::default();

        filter.set_price(100.0, 0.0);
        assert_eq!(ids(&filter.apply(&hotels())), vec![2, 3]);

        filter.set_price(0.0, 100.0);
        assert_eq!(ids(&filter.apply(&hotels())), vec![1, 4]);

        filter.set_price(80.0, 250.0);
        assert_eq!(ids(&filter.apply(&hotels())), vec![1, 2]);
    }

    #[test]
    fn test_independent_mode_last_criterion_wins() {
        let mut filter = HotelFilter::new(FilterMode::Independent);
        filter.set_price(200.0, 0.0);
        filter.set_city("Lima");
        // The price range is still recorded but no longer applied.
        assert_eq!(filter.price(), PriceRange::new(200.0, 0.0));
        assert_eq!(ids(&filter.apply(&hotels())), vec![1, 3]);

        filter.set_price(0.0, 100.0);
        assert_eq!(ids(&filter.apply(&hotels())), vec![1, 4]);
    }

    #[test]
    fn test_combined_mode_intersects_criteria() {
        let mut filter = HotelFilter::new(FilterMode::Combined);
        filter.set_price(200.0, 0.0);
        filter.set_city("Lima");
        assert_eq!(ids(&filter.apply(&hotels())), vec![3]);

        filter.set_search("casa");
        assert!(filter.apply(&hotels()).is_empty());
    }

    #[test]
    fn test_reset_restores_sentinels() {
        let mut filter = HotelFilter::new(FilterMode::Combined);
        filter.set_search("sol");
        filter.set_price(10.0, 50.0);
        filter.set_city("Arequipa");
        assert!(filter.is_active());

        filter.reset();
        assert_eq!(filter.search(), "");
        assert!(filter.price().is_unbounded());
        assert_eq!(filter.city(), ALL_CITIES);
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&hotels()), hotels());
    }

    #[test]
    fn test_apply_leaves_base_list_untouched() {
        let base = hotels();
        let mut filter = HotelFilter::default();
        filter.set_city("Cusco");
        let view = filter.apply(&base);
        assert_eq!(view.len(), 1);
        assert_eq!(base, hotels());
    }
}
