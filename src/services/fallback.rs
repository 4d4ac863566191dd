//! Rule-based gift ideas used when the text-generation service is unavailable
//! or returns nothing usable.

use rand::{seq::SliceRandom, Rng};

use crate::models::{split_interests, REASON_SEPARATOR};

/// Category keyword → generic gift ideas
pub static FALLBACK_TABLE: &[(&str, &[&str])] = &[
    (
        "books",
        &[
            "Bestselling novel",
            "Bookstore gift card",
            "Handmade bookmark",
            "Book subscription",
            "Reading lamp",
            "Collector’s edition set",
        ],
    ),
    (
        "music",
        &[
            "Concert ticket voucher",
            "Wireless headphones",
            "Bluetooth speaker",
            "Music subscription",
            "Vinyl record",
            "Musical instrument accessory",
        ],
    ),
    (
        "fitness",
        &[
            "Yoga mat",
            "Fitness tracker",
            "Gym class voucher",
            "Resistance bands",
            "Shaker bottle",
            "Dumbbell set",
        ],
    ),
    (
        "tech",
        &[
            "Power bank",
            "Wireless earbuds",
            "Smart LED bulb",
            "Portable speaker",
            "Gadget gift card",
            "Smartwatch strap",
        ],
    ),
    (
        "art",
        &[
            "Sketchbook",
            "Painting kit",
            "Online art class voucher",
            "Framed print",
            "Custom portrait",
            "Set of brushes",
        ],
    ),
    (
        "home",
        &[
            "Scented candles",
            "Table lamp",
            "Succulent plant",
            "Throw blanket",
            "Decorative frame",
            "Wall clock",
        ],
    ),
    (
        "travel",
        &[
            "Backpack",
            "Travel pillow",
            "Trip voucher",
            "Portable charger",
            "Luggage tag",
            "Travel organizer kit",
        ],
    ),
    (
        "sports",
        &[
            "Football",
            "Cricket bat",
            "Sports jersey",
            "Match ticket voucher",
            "Gym bag",
            "Sports water bottle",
        ],
    ),
    (
        "food",
        &[
            "Chocolate hamper",
            "Cooking class voucher",
            "Restaurant gift card",
            "Gourmet coffee set",
            "Snack basket",
            "Exotic tea sampler",
        ],
    ),
    (
        "gaming",
        &[
            "Gaming mouse",
            "Mechanical keyboard",
            "Steam gift card",
            "Headset stand",
            "Gamepad controller",
            "LED desk lights",
        ],
    ),
    (
        "fashion",
        &[
            "Trendy watch",
            "Sunglasses",
            "Wallet",
            "Handbag",
            "Jewelry piece",
            "Fashion store voucher",
            "Stylish dress",
            "Scarf",
            "Perfume",
        ],
    ),
    (
        "photography",
        &[
            "Camera strap",
            "Tripod",
            "Photo album",
            "Photography workshop",
            "Portable light",
            "Camera cleaning kit",
        ],
    ),
    (
        "gardening",
        &[
            "Plant pot set",
            "Gardening tool kit",
            "Seeds pack",
            "Hanging planter",
            "Indoor plant light",
            "Compost bin",
        ],
    ),
    (
        "pets",
        &[
            "Pet toy set",
            "Pet grooming kit",
            "Personalized pet collar",
            "Pet bed",
            "Treats basket",
            "Pet water fountain",
        ],
    ),
    (
        "wellness",
        &[
            "Aroma diffuser",
            "Massage voucher",
            "Spa gift set",
            "Meditation app subscription",
            "Essential oils kit",
            "Herbal tea set",
        ],
    ),
    (
        "handcrafts",
        &[
            "Handmade jewelry",
            "Clay pottery set",
            "Hand-painted mug",
            "Embroidery kit",
            "Crochet set",
            "Wood carving miniature",
        ],
    ),
    (
        "diy",
        &[
            "DIY candle making kit",
            "DIY soap kit",
            "DIY robotics kit",
            "DIY painting set",
            "DIY jewelry kit",
            "DIY terrarium kit",
        ],
    ),
    (
        "kids",
        &[
            "Building blocks set",
            "Story books",
            "Educational puzzle",
            "Remote control toy",
            "Drawing set",
            "Soft toys",
        ],
    ),
    (
        "office",
        &[
            "Desk organizer",
            "Fancy pen set",
            "Notebook",
            "Office plant",
            "Coffee mug",
            "Ergonomic mousepad",
        ],
    ),
    (
        "luxury",
        &[
            "Designer wallet",
            "Luxury perfume",
            "Gold-plated pen",
            "Silk scarf",
            "Premium watch",
            "Designer handbag",
        ],
    ),
    (
        "festival",
        &[
            "Fairy lights",
            "Festive sweets box",
            "Decorative lantern",
            "Puja thali",
            "Gift hamper",
            "Ethnic dress",
        ],
    ),
];

/// Used when no interest keyword matches a category
pub static GENERIC_SUGGESTIONS: &[&str] = &[
    "Gift card — flexible choice",
    "Experience voucher — memorable gift",
    "Personalized item — thoughtful",
    "Subscription — long-lasting",
    "Accessory — improves experience",
];

/// Every fallback line a set of interests can produce, before sampling.
///
/// A keyword selects a category when it is a substring of the category name,
/// so `"art"` picks up `art` only while `"s"` picks up most of the table.
pub fn candidate_pool(interests: &str) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();

    for keyword in split_interests(interests) {
        for (category, items) in FALLBACK_TABLE {
            if !category.contains(keyword.as_str()) {
                continue;
            }
            for item in *items {
                let line = format!(
                    "{} {} good for {} lovers",
                    title_case(item),
                    REASON_SEPARATOR,
                    category
                );
                if !pool.contains(&line) {
                    pool.push(line);
                }
            }
        }
    }

    if pool.is_empty() {
        pool = GENERIC_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }

    pool
}

/// Draws up to `needed` distinct fallback suggestions for `interests`.
pub fn suggest<R: Rng + ?Sized>(interests: &str, needed: usize, rng: &mut R) -> Vec<String> {
    let pool = candidate_pool(interests);
    let take = needed.min(pool.len());

    pool.choose_multiple(rng, take).cloned().collect()
}

/// Capitalizes the first letter of every word and lowercases the rest.
/// Hyphens and spaces start a new word, apostrophes don't.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = !matches!(c, '\'' | '’');
        }
    }

    out
}
