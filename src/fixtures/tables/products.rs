// fixtures/tables/products.rs
//
// The marketplace catalog: travel essentials, handloom, tribal crafts and
// regional sweets. Prices in INR; a few items carry a list price so the
// discount sort has something to order.

use rust_decimal::Decimal;

use crate::fixtures::{MockTable, Partition};
use crate::web_app::model::{BudgetRange, Currency, Domain, FacetCount, SearchResult};

pub struct ProductsTable;

/// Marketplace category ids, "all" first
pub const CATEGORIES: [(&str, &str); 5] = [
    ("all", "All Products"),
    ("travel-essentials", "Travel Essentials"),
    ("handloom", "Handloom"),
    ("tribal-crafts", "Tribal Crafts"),
    ("regional-sweets", "Regional Sweets"),
];

pub const DESTINATIONS: [&str; 6] = ["Ranchi", "Jamshedpur", "Dhanbad", "Dumka", "Hazaribagh", "Bokaro"];

struct Row {
    id: u32,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    price: i64,
    list_price: Option<i64>,
    rating: f64,
    reviews: u32,
    recommended: &'static [&'static str],
    budget: BudgetRange,
    tags: &'static [&'static str],
    image: &'static str,
}

impl From<&Row> for SearchResult {
    fn from(row: &Row) -> Self {
        let mut product = SearchResult::new(row.id.to_string(), Domain::Marketplace, row.name);
        product.sub_info = row.description.to_string();
        product.description = row.description.to_string();
        product.category = row.category.to_string();
        product.price = Decimal::from(row.price);
        product.original_price = row.list_price.map(Decimal::from);
        product.currency = Currency::Inr;
        product.rating = row.rating;
        product.review_count = row.reviews;
        product.destinations = row.recommended.iter().map(|d| d.to_string()).collect();
        product.budget_range = Some(row.budget);
        product.tags = row.tags.iter().map(|t| t.to_string()).collect();
        product.image = format!("https://images.unsplash.com/{}?w=400&h=300&fit=crop", row.image);
        product
    }
}

const ROWS: &[Row] = &[
    Row {
        id: 1,
        name: "Trekking Backpack 60L",
        category: "travel-essentials",
        description: "Durable waterproof backpack perfect for Jharkhand's hilly terrain and monsoon season.",
        price: 2499,
        list_price: Some(2999),
        rating: 4.5,
        reviews: 128,
        recommended: &["ranchi", "jamshedpur", "dhanbad"],
        budget: BudgetRange::Mid,
        tags: &["waterproof", "trekking", "60L", "durable"],
        image: "photo-1553062407-98eeb64c6a62",
    },
    Row {
        id: 2,
        name: "Monsoon Raincoat",
        category: "travel-essentials",
        description: "Lightweight, breathable raincoat essential for Jharkhand's heavy monsoons.",
        price: 899,
        list_price: None,
        rating: 4.3,
        reviews: 95,
        recommended: &["all"],
        budget: BudgetRange::Budget,
        tags: &["raincoat", "monsoon", "waterproof", "lightweight"],
        image: "photo-1578662996442-48f60103fc96",
    },
    Row {
        id: 3,
        name: "Comprehensive First Aid Kit",
        category: "travel-essentials",
        description: "Complete medical kit with essentials for remote travel in tribal areas.",
        price: 1299,
        list_price: Some(1499),
        rating: 4.7,
        reviews: 203,
        recommended: &["all"],
        budget: BudgetRange::Mid,
        tags: &["medical", "safety", "emergency", "remote travel"],
        image: "photo-1576091160399-112ba8d25d1f",
    },
    Row {
        id: 4,
        name: "Jharkhand Trail Mix",
        category: "travel-essentials",
        description: "Energy-packed mix of local nuts, dried fruits, and seeds from Jharkhand.",
        price: 349,
        list_price: None,
        rating: 4.4,
        reviews: 87,
        recommended: &["all"],
        budget: BudgetRange::Budget,
        tags: &["snacks", "energy", "local", "nuts"],
        image: "photo-1599599810694-57a2ca8276a8",
    },
    Row {
        id: 5,
        name: "Santal Tribe Cotton Saree",
        category: "handloom",
        description: "Authentic handwoven saree by Santal artisans with traditional geometric patterns.",
        price: 3500,
        list_price: Some(4200),
        rating: 4.8,
        reviews: 67,
        recommended: &["ranchi", "dumka"],
        budget: BudgetRange::Premium,
        tags: &["saree", "handwoven", "santal", "traditional"],
        image: "photo-1610030469983-98e550d6193c",
    },
    Row {
        id: 6,
        name: "Khadi Cotton Kurta Set",
        category: "handloom",
        description: "Comfortable khadi cotton kurta perfect for exploring Jharkhand's cultural sites.",
        price: 1899,
        list_price: None,
        rating: 4.5,
        reviews: 142,
        recommended: &["ranchi", "jamshedpur"],
        budget: BudgetRange::Mid,
        tags: &["khadi", "cotton", "kurta", "cultural"],
        image: "photo-1594633312681-425c7b97ccd1",
    },
    Row {
        id: 7,
        name: "Traditional Gamcha Towel",
        category: "handloom",
        description: "Hand-woven gamcha towel, a versatile cloth used by locals across Jharkhand.",
        price: 299,
        list_price: None,
        rating: 4.2,
        reviews: 76,
        recommended: &["all"],
        budget: BudgetRange::Budget,
        tags: &["gamcha", "handwoven", "versatile", "traditional"],
        image: "photo-1557804506-669a67965ba0",
    },
    Row {
        id: 8,
        name: "Dokra Metal Elephant",
        category: "tribal-crafts",
        description: "Exquisite Dokra art piece crafted using ancient lost-wax casting technique.",
        price: 2200,
        list_price: Some(2600),
        rating: 4.9,
        reviews: 34,
        recommended: &["ranchi", "dhanbad"],
        budget: BudgetRange::Premium,
        tags: &["dokra", "metal art", "handcrafted", "traditional"],
        image: "photo-1578662996442-48f60103fc96",
    },
    Row {
        id: 9,
        name: "Bamboo Basket Set",
        category: "tribal-crafts",
        description: "Handcrafted bamboo baskets by tribal artisans, perfect for home decor.",
        price: 899,
        list_price: None,
        rating: 4.4,
        reviews: 56,
        recommended: &["all"],
        budget: BudgetRange::Budget,
        tags: &["bamboo", "baskets", "eco-friendly", "decor"],
        image: "photo-1586023492125-27b2c045efd7",
    },
    Row {
        id: 10,
        name: "Tribal Wooden Mask",
        category: "tribal-crafts",
        description: "Traditional wooden mask representing Jharkhand's rich tribal heritage.",
        price: 1599,
        list_price: None,
        rating: 4.6,
        reviews: 41,
        recommended: &["ranchi", "dumka"],
        budget: BudgetRange::Mid,
        tags: &["wooden", "mask", "tribal", "heritage"],
        image: "photo-1578662996442-48f60103fc96",
    },
    Row {
        id: 11,
        name: "Thekua (Traditional Sweet)",
        category: "regional-sweets",
        description: "Authentic Thekua, a beloved Jharkhand festival sweet made with jaggery and wheat.",
        price: 299,
        list_price: None,
        rating: 4.7,
        reviews: 189,
        recommended: &["all"],
        budget: BudgetRange::Budget,
        tags: &["thekua", "festival", "sweet", "jaggery"],
        image: "photo-1606313564200-e75d5e30476c",
    },
    Row {
        id: 12,
        name: "Pitha Variety Pack",
        category: "regional-sweets",
        description: "Assorted traditional rice cakes including Arsa and Kheer Pitha.",
        price: 449,
        list_price: Some(499),
        rating: 4.5,
        reviews: 93,
        recommended: &["ranchi", "jamshedpur"],
        budget: BudgetRange::Budget,
        tags: &["pitha", "rice cakes", "traditional", "variety"],
        image: "photo-1571091718767-18b5b1457add",
    },
];

impl MockTable for ProductsTable {
    fn partitions() -> Vec<Partition> {
        CATEGORIES
            .iter()
            .filter(|(id, _)| *id != "all")
            .map(|(id, _)| Partition {
                key: *id,
                rows: ROWS
                    .iter()
                    .filter(|row| row.category == *id)
                    .map(SearchResult::from)
                    .collect(),
            })
            .collect()
    }
}

/// Per-category product counts, in catalog category order
pub fn category_facets(products: &[SearchResult]) -> Vec<FacetCount> {
    CATEGORIES
        .iter()
        .map(|(id, _)| FacetCount {
            value: id.to_string(),
            count: if *id == "all" {
                products.len() as i64
            } else {
                products.iter().filter(|p| p.category == *id).count() as i64
            },
        })
        .collect()
}
