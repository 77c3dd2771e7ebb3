//! Seeded product generator.
//!
//! Ports the storefront's static data tables (per-category item names,
//! brands, colors, description templates, tags, size charts) into a
//! deterministic generator: a fixed seed and per-category count always
//! produce the same catalog, which keeps restarts and tests stable.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use ss_stores_core::ProductId;

use super::{Category, Product};

struct CategorySpec {
    category: Category,
    items: &'static [&'static str],
    brands: &'static [&'static str],
    colors: &'static [&'static str],
    extra_tags: &'static [&'static str],
    sizes: &'static [&'static str],
}

const CATEGORY_SPECS: [CategorySpec; 7] = [
    CategorySpec {
        category: Category::Menswear,
        items: &[
            "T-Shirt", "Shirt", "Jeans", "Chinos", "Hoodie", "Sweater", "Jacket", "Blazer",
            "Polo", "Tank Top", "Shorts", "Tracksuit", "Suit", "Vest", "Cardigan", "Sweatshirt",
            "Joggers", "Cargo Pants", "Dress Shirt", "Henley",
        ],
        brands: &[
            "Nike", "Adidas", "Zara", "H&M", "Uniqlo", "Levi's", "Tommy Hilfiger",
            "Calvin Klein", "Ralph Lauren", "Gap",
        ],
        colors: &[
            "Black", "White", "Navy", "Gray", "Blue", "Red", "Green", "Khaki", "Brown",
            "Burgundy",
        ],
        extra_tags: &["casual", "formal", "comfortable", "stylish", "cotton", "denim"],
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
    },
    CategorySpec {
        category: Category::Womenwear,
        items: &[
            "Dress", "Blouse", "Skirt", "Jeans", "Top", "Sweater", "Cardigan", "Jacket",
            "Pants", "Jumpsuit", "Blazer", "T-Shirt", "Tank Top", "Shorts", "Leggings", "Coat",
            "Hoodie", "Tunic", "Kimono", "Romper",
        ],
        brands: &[
            "Zara", "H&M", "Forever 21", "Mango", "ASOS", "Uniqlo", "Gap", "Banana Republic",
            "Ann Taylor", "Loft",
        ],
        colors: &[
            "Black", "White", "Pink", "Red", "Blue", "Navy", "Beige", "Gray", "Purple", "Green",
        ],
        extra_tags: &[
            "elegant", "chic", "trendy", "comfortable", "versatile", "fashionable",
        ],
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
    },
    CategorySpec {
        category: Category::Footwear,
        items: &[
            "Sneakers", "Boots", "Sandals", "Heels", "Flats", "Loafers", "Oxford",
            "Running Shoes", "Dress Shoes", "Casual Shoes", "Ankle Boots", "Pumps", "Wedges",
            "Slip-ons", "High Tops", "Basketball Shoes", "Hiking Boots", "Ballet Flats",
            "Moccasins", "Espadrilles",
        ],
        brands: &[
            "Nike", "Adidas", "Converse", "Vans", "Puma", "New Balance", "Reebok", "Timberland",
            "Dr. Martens", "Clarks",
        ],
        colors: &[
            "Black", "White", "Brown", "Tan", "Navy", "Gray", "Red", "Blue", "Green", "Pink",
        ],
        extra_tags: &[
            "comfortable", "durable", "athletic", "casual", "walking", "running",
        ],
        sizes: &["6", "7", "8", "9", "10", "11", "12"],
    },
    CategorySpec {
        category: Category::Home,
        items: &[
            "Cushion", "Throw Blanket", "Candle", "Vase", "Picture Frame", "Lamp", "Mirror",
            "Rug", "Curtains", "Plant Pot", "Wall Art", "Storage Box", "Decorative Bowl",
            "Clock", "Bookend", "Coaster Set", "Table Runner", "Pillow Cover", "Ornament",
            "Basket",
        ],
        brands: &[
            "IKEA", "West Elm", "Target", "HomeGoods", "Pottery Barn", "CB2",
            "Urban Outfitters", "Anthropologie", "World Market", "Wayfair",
        ],
        colors: &[
            "White", "Beige", "Gray", "Black", "Navy", "Gold", "Silver", "Green", "Blue", "Pink",
        ],
        extra_tags: &[
            "decorative", "modern", "cozy", "stylish", "functional", "contemporary",
        ],
        sizes: &["Small", "Medium", "Large"],
    },
    CategorySpec {
        category: Category::Electronics,
        items: &[
            "Smartphone", "Laptop", "Tablet", "Headphones", "Speaker", "Smartwatch", "Camera",
            "Gaming Console", "Monitor", "Keyboard", "Mouse", "Charger", "Power Bank",
            "Earbuds", "Webcam", "Hard Drive", "USB Cable", "Phone Case", "Screen Protector",
            "Adapter",
        ],
        brands: &[
            "Apple", "Samsung", "Sony", "LG", "HP", "Dell", "Lenovo", "Asus", "Acer",
            "Microsoft",
        ],
        colors: &[
            "Black", "White", "Silver", "Space Gray", "Rose Gold", "Blue", "Red", "Green",
            "Purple", "Gold",
        ],
        extra_tags: &["tech", "gadget", "wireless", "portable", "smart", "digital"],
        sizes: &["32GB", "64GB", "128GB", "256GB"],
    },
    CategorySpec {
        category: Category::Lifestyle,
        items: &[
            "Backpack", "Wallet", "Sunglasses", "Watch", "Jewelry", "Perfume", "Handbag",
            "Scarf", "Hat", "Belt", "Umbrella", "Travel Mug", "Water Bottle", "Notebook",
            "Pen Set", "Keychain", "Phone Holder", "Luggage", "Tote Bag", "Crossbody Bag",
        ],
        brands: &[
            "Coach", "Michael Kors", "Kate Spade", "Fossil", "Ray-Ban", "Oakley", "Tumi",
            "Samsonite", "Herschel", "JanSport",
        ],
        colors: &[
            "Black", "Brown", "Tan", "Navy", "Red", "Pink", "White", "Gray", "Gold", "Silver",
        ],
        extra_tags: &[
            "accessory", "premium", "luxury", "practical", "travel", "everyday",
        ],
        sizes: &["One Size", "Small", "Medium", "Large"],
    },
    CategorySpec {
        category: Category::Fitness,
        items: &[
            "Yoga Mat", "Dumbbells", "Resistance Bands", "Water Bottle", "Gym Bag",
            "Protein Shaker", "Fitness Tracker", "Jump Rope", "Foam Roller", "Kettlebell",
            "Exercise Ball", "Yoga Block", "Workout Gloves", "Ankle Weights", "Pull-up Bar",
            "Ab Wheel", "Balance Board", "Massage Ball", "Stretching Strap", "Weight Plates",
        ],
        brands: &[
            "Nike", "Adidas", "Under Armour", "Lululemon", "Reebok", "Puma", "Fitbit",
            "Garmin", "TRX", "Bowflex",
        ],
        colors: &[
            "Black", "Gray", "Blue", "Pink", "Purple", "Green", "Red", "White", "Orange",
            "Yellow",
        ],
        extra_tags: &["workout", "exercise", "training", "gym", "health", "active"],
        sizes: &["Light", "Medium", "Heavy"],
    },
];

/// Generate `products_per_category` products for every category.
///
/// IDs are dense and 1-based in generation order.
#[must_use]
pub fn generate(seed: u64, products_per_category: u32) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut products =
        Vec::with_capacity(CATEGORY_SPECS.len() * products_per_category as usize);
    let mut next_id = 1;

    for spec in &CATEGORY_SPECS {
        for _ in 0..products_per_category {
            products.push(generate_product(&mut rng, spec, ProductId::new(next_id)));
            next_id += 1;
        }
    }

    products
}

fn generate_product(rng: &mut StdRng, spec: &CategorySpec, id: ProductId) -> Product {
    let item = *spec.items.choose(rng).unwrap_or(&"Item");
    let brand = *spec.brands.choose(rng).unwrap_or(&"Generic");
    let color = *spec.colors.choose(rng).unwrap_or(&"Black");

    let price = Decimal::from(rng.random_range(20..220));
    let discount: u32 = if rng.random_bool(0.3) {
        rng.random_range(5..35)
    } else {
        0
    };
    let original_price = if discount > 0 {
        // back-compute the pre-discount price, floored to whole units
        (price * Decimal::from(100) / Decimal::from(100 - discount)).floor()
    } else {
        price
    };

    let item_lower = item.to_lowercase();
    let slug = item_lower.replace(' ', "-");
    let category_key = spec.category.key();
    let mut image_path =
        || format!("/images/{category_key}/{slug}-{}.jpg", rng.random_range(1..=5));
    let image = image_path();
    let images = vec![image_path(), image_path(), image_path()];

    let rating = (rng.random::<f64>().mul_add(2.0, 3.0) * 10.0).round() / 10.0;

    let mut tags = vec![item_lower.clone(), category_key.to_string()];
    let extra = rng.random_range(2..5);
    tags.extend(spec.extra_tags.iter().take(extra).map(ToString::to_string));

    Product {
        id,
        title: format!("{brand} {color} {item}"),
        category: spec.category,
        category_name: spec.category.display_name().to_string(),
        brand: brand.to_string(),
        color: color.to_string(),
        price,
        original_price,
        discount,
        description: description(rng, spec.category, &item_lower, brand, color),
        image,
        images,
        stock: rng.random_range(10..110),
        in_stock: true,
        rating,
        reviews: rng.random_range(10..510),
        tags,
        sizes: spec.sizes.iter().map(ToString::to_string).collect(),
        featured: rng.random_bool(0.1),
        new_arrival: rng.random_bool(0.2),
        bestseller: rng.random_bool(0.15),
    }
}

fn description(
    rng: &mut StdRng,
    category: Category,
    item_lower: &str,
    brand: &str,
    color: &str,
) -> String {
    let templates: [String; 3] = match category {
        Category::Menswear => [
            format!(
                "Premium quality {item_lower} from {brand}. Crafted with attention to detail and modern styling."
            ),
            format!(
                "Comfortable and stylish {item_lower} perfect for everyday wear. Made with high-quality materials."
            ),
            format!(
                "Classic {item_lower} with a contemporary twist. Versatile piece that pairs well with any outfit."
            ),
        ],
        Category::Womenwear => [
            format!(
                "Elegant {item_lower} designed for the modern woman. Features flattering fit and premium fabric."
            ),
            format!(
                "Chic and versatile {item_lower} that transitions seamlessly from day to night."
            ),
            format!(
                "Stylish {item_lower} with contemporary design elements. Perfect for any occasion."
            ),
        ],
        Category::Footwear => [
            format!(
                "Comfortable {item_lower} with superior cushioning and support. Perfect for all-day wear."
            ),
            format!(
                "Stylish {item_lower} that combines fashion and function. Durable construction for long-lasting wear."
            ),
            format!(
                "Premium {item_lower} with excellent grip and comfort. Ideal for both casual and active wear."
            ),
        ],
        Category::Home => [
            format!(
                "Beautiful {item_lower} that adds style and functionality to your living space."
            ),
            "Quality home decor piece that complements any interior design style.".to_string(),
            format!(
                "Elegant {item_lower} crafted with attention to detail and superior materials."
            ),
        ],
        Category::Electronics => [
            format!("Latest {item_lower} with advanced features and reliable performance."),
            format!(
                "High-quality {item_lower} designed for modern lifestyle and connectivity needs."
            ),
            format!(
                "Innovative {item_lower} with cutting-edge technology and user-friendly design."
            ),
        ],
        Category::Lifestyle => [
            format!(
                "Premium {item_lower} that combines style and practicality for everyday use."
            ),
            "Elegant accessory that adds sophistication to your personal style.".to_string(),
            format!(
                "Quality {item_lower} designed for the modern lifestyle with attention to detail."
            ),
        ],
        Category::Fitness => [
            format!(
                "Professional-grade {item_lower} designed for optimal performance and durability."
            ),
            "High-quality fitness equipment that helps you achieve your workout goals."
                .to_string(),
            format!("Durable {item_lower} perfect for home workouts and gym sessions."),
        ],
    };

    let base = templates.choose(rng).cloned().unwrap_or_default();
    let color_lower = color.to_lowercase();
    format!(
        "{base} Available in {color_lower} color. This {brand} {item_lower} offers exceptional \
         value and quality construction. Perfect for those who appreciate both style and \
         functionality."
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_are_whole_units_in_range() {
        let products = generate(1, 20);
        for p in &products {
            assert!(p.price >= Decimal::from(20) && p.price < Decimal::from(220));
            assert_eq!(p.price, p.price.floor());
        }
    }

    #[test]
    fn test_discounted_products_have_higher_original_price() {
        let products = generate(1, 200);
        let discounted: Vec<_> = products.iter().filter(|p| p.discount > 0).collect();
        assert!(!discounted.is_empty());
        for p in discounted {
            assert!((5..35).contains(&p.discount));
            assert!(p.original_price >= p.price);
        }
        for p in products.iter().filter(|p| p.discount == 0) {
            assert_eq!(p.original_price, p.price);
        }
    }

    #[test]
    fn test_rating_range_and_precision() {
        let products = generate(1, 50);
        for p in &products {
            assert!((3.0..=5.0).contains(&p.rating));
            let tenths = p.rating * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tags_include_item_and_category() {
        let products = generate(1, 10);
        for p in &products {
            assert!(p.tags.contains(&p.category.key().to_string()));
            assert!(p.tags.len() >= 4); // item + category + at least 2 extras
        }
    }

    #[test]
    fn test_sizes_follow_category_chart() {
        let products = generate(1, 5);
        let footwear = products
            .iter()
            .find(|p| p.category == Category::Footwear)
            .unwrap();
        assert_eq!(footwear.sizes, ["6", "7", "8", "9", "10", "11", "12"]);
    }

    #[test]
    fn test_title_is_brand_color_item() {
        let products = generate(1, 5);
        for p in &products {
            assert!(p.title.starts_with(&format!("{} {} ", p.brand, p.color)));
        }
    }
}
