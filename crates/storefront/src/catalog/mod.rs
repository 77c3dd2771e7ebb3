//! Product catalog: generated once at startup, read-only thereafter.
//!
//! The catalog owns every [`Product`] record. It is generated from a seeded
//! RNG (see [`generator`]) so a given configuration always produces the same
//! catalog, and it is never mutated after generation, so reads need no lock.

pub mod generator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ss_stores_core::{ProductId, types::money};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Menswear,
    Womenwear,
    Footwear,
    Home,
    Electronics,
    Lifestyle,
    Fitness,
}

impl Category {
    /// All categories, in catalog generation order.
    pub const ALL: [Self; 7] = [
        Self::Menswear,
        Self::Womenwear,
        Self::Footwear,
        Self::Home,
        Self::Electronics,
        Self::Lifestyle,
        Self::Fitness,
    ];

    /// The lowercase key used in URLs, filters, and JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Menswear => "menswear",
            Self::Womenwear => "womenwear",
            Self::Footwear => "footwear",
            Self::Home => "home",
            Self::Electronics => "electronics",
            Self::Lifestyle => "lifestyle",
            Self::Fitness => "fitness",
        }
    }

    /// The human-readable category name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Menswear => "Menswear",
            Self::Womenwear => "Womenwear",
            Self::Footwear => "Footwear",
            Self::Home => "Home",
            Self::Electronics => "Electronics",
            Self::Lifestyle => "Lifestyle",
            Self::Fitness => "Fitness",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A purchasable product.
///
/// Immutable after generation; orders snapshot the whole record at placement
/// time, so historical orders are decoupled from catalog regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: Category,
    pub category_name: String,
    pub brand: String,
    pub color: String,
    #[serde(with = "money::serde_2dp")]
    pub price: Decimal,
    #[serde(with = "money::serde_2dp")]
    pub original_price: Decimal,
    /// Discount percentage against the original price (0 when not on sale).
    pub discount: u32,
    pub description: String,
    pub image: String,
    pub images: Vec<String>,
    /// Display-only inventory metadata; never enforced on cart operations.
    pub stock: u32,
    pub in_stock: bool,
    /// Average rating, one decimal place, 3.0-5.0.
    pub rating: f64,
    /// Review count shown on product cards.
    pub reviews: u32,
    pub tags: Vec<String>,
    pub sizes: Vec<String>,
    pub featured: bool,
    pub new_arrival: bool,
    pub bestseller: bool,
}

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

impl SortOrder {
    /// Parse a listing sort key. Unknown keys mean "no sorting", matching the
    /// lenient query handling of the original API.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "rating" => Some(Self::Rating),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }
}

/// Filter, sort, and pagination parameters for [`Catalog::search`].
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Case-insensitive substring match over title, description, and tags.
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub brand: Option<String>,
    pub sort: Option<SortOrder>,
    /// 1-based page number; values below 1 are clamped to 1.
    pub page: Option<usize>,
    /// Page size; 0 or absent falls back to [`Catalog::DEFAULT_PAGE_SIZE`].
    pub limit: Option<usize>,
}

/// One page of search results, borrowing from the catalog.
#[derive(Debug)]
pub struct ProductPage<'a> {
    pub products: Vec<&'a Product>,
    pub total_products: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// A distinct category entry for the category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub key: Category,
    pub name: String,
}

/// The read-only product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Default page size for product listings.
    pub const DEFAULT_PAGE_SIZE: usize = 12;

    /// Maximum number of related products returned for a product detail.
    pub const RELATED_LIMIT: usize = 4;

    /// Maximum number of products returned by the featured listing.
    pub const FEATURED_LIMIT: usize = 8;

    /// Create a catalog from pre-built products (used by tests).
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Generate the catalog from a seed. Identical seeds and sizes always
    /// yield identical catalogs.
    #[must_use]
    pub fn generate(seed: u64, products_per_category: u32) -> Self {
        Self::new(generator::generate(seed, products_per_category))
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in generation order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in the same category as `product`, excluding it, capped at
    /// [`Self::RELATED_LIMIT`].
    #[must_use]
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(Self::RELATED_LIMIT)
            .collect()
    }

    /// Featured products, capped at [`Self::FEATURED_LIMIT`].
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .take(Self::FEATURED_LIMIT)
            .collect()
    }

    /// Distinct categories present in the catalog, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut seen = std::collections::HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category))
            .map(|p| CategorySummary {
                key: p.category,
                name: p.category.display_name().to_string(),
            })
            .collect()
    }

    /// Filter, sort, and paginate the catalog.
    #[must_use]
    pub fn search(&self, filter: &ProductFilter) -> ProductPage<'_> {
        let search_term = filter.search.as_deref().map(str::to_lowercase);
        let min_price = filter.min_price.unwrap_or(Decimal::ZERO);
        let max_price = filter.max_price.unwrap_or(Decimal::MAX);

        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|c| p.category.key() == c)
            })
            .filter(|p| {
                search_term.as_deref().is_none_or(|term| {
                    p.title.to_lowercase().contains(term)
                        || p.description.to_lowercase().contains(term)
                        || p.tags.iter().any(|tag| tag.to_lowercase().contains(term))
                })
            })
            .filter(|p| p.price >= min_price && p.price <= max_price)
            .filter(|p| filter.brand.as_deref().is_none_or(|b| p.brand == b))
            .collect();

        match filter.sort {
            Some(SortOrder::PriceLow) => matches.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortOrder::PriceHigh) => matches.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(SortOrder::Rating) => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Some(SortOrder::Newest) => matches.sort_by(|a, b| b.id.cmp(&a.id)),
            None => {}
        }

        let limit = match filter.limit {
            Some(limit) if limit > 0 => limit,
            _ => Self::DEFAULT_PAGE_SIZE,
        };
        let current_page = filter.page.unwrap_or(1).max(1);
        let total_products = matches.len();
        let total_pages = total_products.div_ceil(limit);
        let start = (current_page - 1).saturating_mul(limit);

        let products: Vec<&Product> = matches.into_iter().skip(start).take(limit).collect();
        let has_next_page = start.saturating_add(limit) < total_products;

        ProductPage {
            products,
            total_products,
            total_pages,
            current_page,
            has_next_page,
            has_prev_page: current_page > 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::generate(7, 5)
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = Catalog::generate(7, 5);
        let b = Catalog::generate(7, 5);
        let numbers =
            |c: &Catalog| c.all().iter().map(|p| p.title.clone()).collect::<Vec<_>>();
        assert_eq!(numbers(&a), numbers(&b));
        assert_ne!(numbers(&a), numbers(&Catalog::generate(8, 5)));
    }

    #[test]
    fn test_ids_are_dense_and_one_based() {
        let catalog = small_catalog();
        assert_eq!(catalog.len(), 35); // 7 categories × 5
        for (index, product) in catalog.all().iter().enumerate() {
            assert_eq!(product.id.as_i32(), i32::try_from(index).unwrap() + 1);
        }
    }

    #[test]
    fn test_get_resolves_by_id() {
        let catalog = small_catalog();
        let product = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert!(catalog.get(ProductId::new(9999)).is_none());
    }

    #[test]
    fn test_related_same_category_excludes_self() {
        let catalog = small_catalog();
        let product = catalog.get(ProductId::new(1)).unwrap();
        let related = catalog.related(product);
        assert!(related.len() <= Catalog::RELATED_LIMIT);
        for r in related {
            assert_eq!(r.category, product.category);
            assert_ne!(r.id, product.id);
        }
    }

    #[test]
    fn test_search_filters_by_category_and_brand() {
        let catalog = small_catalog();
        let page = catalog.search(&ProductFilter {
            category: Some("menswear".to_string()),
            ..ProductFilter::default()
        });
        assert_eq!(page.total_products, 5);
        assert!(page.products.iter().all(|p| p.category == Category::Menswear));

        let brand = page.products.first().unwrap().brand.clone();
        let page = catalog.search(&ProductFilter {
            category: Some("menswear".to_string()),
            brand: Some(brand.clone()),
            ..ProductFilter::default()
        });
        assert!(page.products.iter().all(|p| p.brand == brand));
    }

    #[test]
    fn test_search_unknown_category_is_empty_not_an_error() {
        let catalog = small_catalog();
        let page = catalog.search(&ProductFilter {
            category: Some("spelunking".to_string()),
            ..ProductFilter::default()
        });
        assert_eq!(page.total_products, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_search_price_range() {
        let catalog = small_catalog();
        let min = Decimal::new(100, 0);
        let page = catalog.search(&ProductFilter {
            min_price: Some(min),
            ..ProductFilter::default()
        });
        assert!(page.products.iter().all(|p| p.price >= min));
    }

    #[test]
    fn test_search_sorts_by_price() {
        let catalog = small_catalog();
        let page = catalog.search(&ProductFilter {
            sort: Some(SortOrder::PriceLow),
            limit: Some(100),
            ..ProductFilter::default()
        });
        let prices: Vec<Decimal> = page.products.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_search_pagination_flags() {
        let catalog = small_catalog();
        let first = catalog.search(&ProductFilter {
            limit: Some(10),
            ..ProductFilter::default()
        });
        assert_eq!(first.total_products, 35);
        assert_eq!(first.total_pages, 4);
        assert_eq!(first.current_page, 1);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = catalog.search(&ProductFilter {
            page: Some(4),
            limit: Some(10),
            ..ProductFilter::default()
        });
        assert_eq!(last.products.len(), 5);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn test_search_zero_limit_falls_back_to_default() {
        let catalog = small_catalog();
        let page = catalog.search(&ProductFilter {
            limit: Some(0),
            ..ProductFilter::default()
        });
        assert_eq!(page.products.len(), Catalog::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_search_matches_tags() {
        let catalog = small_catalog();
        // every generated product carries its category key as a tag
        let page = catalog.search(&ProductFilter {
            search: Some("fitness".to_string()),
            limit: Some(100),
            ..ProductFilter::default()
        });
        assert!(page.total_products >= 5);
    }

    #[test]
    fn test_categories_are_distinct() {
        let catalog = small_catalog();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 7);
        assert_eq!(
            categories.first().unwrap(),
            &CategorySummary {
                key: Category::Menswear,
                name: "Menswear".to_string()
            }
        );
    }

    #[test]
    fn test_featured_cap() {
        let catalog = Catalog::generate(7, 50);
        assert!(catalog.featured().len() <= Catalog::FEATURED_LIMIT);
        assert!(catalog.featured().iter().all(|p| p.featured));
    }

    #[test]
    fn test_sort_order_parse_is_lenient() {
        assert_eq!(SortOrder::parse("price-low"), Some(SortOrder::PriceLow));
        assert_eq!(SortOrder::parse("price-high"), Some(SortOrder::PriceHigh));
        assert_eq!(SortOrder::parse("rating"), Some(SortOrder::Rating));
        assert_eq!(SortOrder::parse("newest"), Some(SortOrder::Newest));
        assert_eq!(SortOrder::parse("alphabetical"), None);
    }
}
