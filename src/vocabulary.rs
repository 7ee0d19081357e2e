//! Option lists the analysis service chooses from. Values outside these lists
//! are still rendered; they are only reported.

use crate::record::{FIELD_ORDER, FieldKey, FieldRecord};

const PURPOSE: &[&str] = &[
    "SNS Post",
    "TikTok Thumbnail / Short Video Use",
    "YouTube Thumbnail",
    "E-commerce Product Image",
    "Ad Banner",
    "Blog / Media Illustration Image",
    "Profile Icon",
    "Presentation Illustration",
    "LINE-style Stamp Image",
    "App Promotional Visual",
    "Event Announcement Visual",
];

const SUBJECT: &[&str] = &[
    "Human",
    "Animal",
    "Food",
    "Vehicle",
    "Building",
    "Landscape",
    "Fantasy creature",
    "Character",
    "Robot",
    "Pet",
    "Plant",
    "Furniture",
    "Home Appliance",
    "Gadget",
    "Art / Abstract Object",
    "Clothing",
    "Cosmetics",
    "Accessories",
    "Dish",
    "Drink",
];

const SITUATION: &[&str] = &[
    "Standing",
    "Sitting",
    "Walking",
    "Running",
    "Working",
    "Eating",
    "Speaking",
    "Posing",
    "Using smartphone",
    "Using computer",
    "Reading",
    "Sleeping",
    "Relaxing",
    "Driving",
    "Shopping",
    "Taking a photo",
    "Being photographed",
    "Exercising",
    "Dancing",
    "Studying",
    "Cooking",
    "Cleaning",
    "Playing games",
    "Talking on the phone",
];

const AGE_RANGE: &[&str] = &[
    "Newborn / 0–1 month",
    "Infant / 1 month–1 year",
    "Toddler / 1–3 years",
    "Preschooler / 3–6 years",
    "Lower elementary / Grades 1–3",
    "Upper elementary / Grades 4–6",
    "Junior high / 12–15 years",
    "High school / 15–18 years",
    "College / 18–22 years",
    "Young adult / 20–29 years",
    "Adult / 30–39 years",
    "Middle-aged / 40–59 years",
    "Senior / 60–74 years",
    "Elderly / 75+ years",
];

const GENDER: &[&str] = &["Male", "Female", "Non-binary", "Unknown"];

const NATIONALITY: &[&str] = &[
    "Japan",
    "China",
    "Korea",
    "Taiwan",
    "India",
    "USA",
    "Canada",
    "United Kingdom",
    "France",
    "Germany",
    "Italy",
    "Spain",
    "Russia",
    "Brazil",
    "Mexico",
    "Australia",
    "Turkey",
    "Saudi Arabia",
    "United Arab Emirates",
    "Egypt",
    "South Africa",
];

const STYLE: &[&str] = &[
    "Realistic",
    "Hyper-realistic",
    "Photo-realistic",
    "Cinematic",
    "Natural light photo",
    "Portrait photo",
    "Fashion magazine style",
    "Street snap style",
    "Product photo",
    "High-end camera shot",
    "Smartphone selfie style",
    "Smartphone photo style",
    "Anime",
    "Manga",
    "Watercolor",
    "Oil painting",
    "Fantasy",
    "Cyberpunk",
    "3D render",
];

const SHOT_DISTANCE: &[&str] = &[
    "Extreme close-up",
    "Close-up",
    "Medium close-up",
    "Medium shot",
    "Full shot",
    "Long shot",
];

const CAMERA_ANGLE: &[&str] = &[
    "Eye-level",
    "Low angle",
    "High angle",
    "Top view",
    "Over-the-shoulder",
];

const LIGHTING_COLOR: &[&str] = &[
    "Natural light",
    "Soft light",
    "Hard light / Hard shadows",
    "Dramatic lighting",
    "Backlight",
    "Top light",
    "Spotlight",
    "Neon light",
    "Low light",
    "Dim light",
    "Night lighting",
    "Isolated spotlight",
    "Warm tone",
    "Cool tone",
];

const BACKGROUND: &[&str] = &[
    "Studio",
    "Living room",
    "Bedroom",
    "Kitchen",
    "Office / Study",
    "Cafe",
    "Classroom",
    "Shop interior",
    "Street",
    "Park",
    "Forest",
    "Beach",
    "Mountain",
    "Sunset outdoors",
    "Night city",
    "Futuristic / Sci-fi",
    "Fantasy world",
    "Space",
    "Factory",
    "Ruins",
    "Abstract",
    "Gradient background",
    "White background",
    "Black background",
];

const CITY: &[&str] = &[
    "Tokyo",
    "Kyoto",
    "Osaka",
    "Sapporo",
    "Fukuoka",
    "New York",
    "Los Angeles",
    "San Francisco",
    "Paris",
    "London",
    "Berlin",
    "Rome",
    "Beijing",
    "Shanghai",
    "Shenzhen",
    "Seoul",
    "Bangkok",
];

const LOCATION_TYPE: &[&str] = &[
    "Downtown",
    "Residential area",
    "Business district",
    "Tourist spot",
    "Old town",
    "Shopping street",
    "Park / Plaza",
    "Riverside / Lakeside",
    "Harbor",
    "Beach area",
    "Airport",
    "Station",
    "Bus terminal",
    "Highway / Main road",
    "Alleyway",
    "Market",
    "Stadium area",
    "Campus / School area",
    "Industrial area",
    "Suburb",
];

const OUTPUT_FORMAT: &[&str] = &["PNG", "JPG"];

const ASPECT_RATIO: &[&str] = &["1:1", "3:4", "4:3", "9:16", "16:9", "21:9"];

/// Allowed values for `key`; `None` for the free-text field.
pub fn options(key: FieldKey) -> Option<&'static [&'static str]> {
    let list = match key {
        FieldKey::Purpose => PURPOSE,
        FieldKey::Subject => SUBJECT,
        FieldKey::Situation => SITUATION,
        FieldKey::AgeRange => AGE_RANGE,
        FieldKey::Gender => GENDER,
        FieldKey::Nationality => NATIONALITY,
        FieldKey::Style => STYLE,
        FieldKey::ShotDistance => SHOT_DISTANCE,
        FieldKey::CameraAngle => CAMERA_ANGLE,
        FieldKey::LightingColor => LIGHTING_COLOR,
        FieldKey::Background => BACKGROUND,
        FieldKey::City => CITY,
        FieldKey::LocationType => LOCATION_TYPE,
        FieldKey::OutputFormat => OUTPUT_FORMAT,
        FieldKey::AspectRatio => ASPECT_RATIO,
        FieldKey::AdditionalWords => return None,
    };
    Some(list)
}

/// Empty values count as known: the field is simply unset.
pub fn is_known_value(key: FieldKey, value: &str) -> bool {
    value.is_empty() || options(key).is_none_or(|list| list.contains(&value))
}

/// Fields whose value is outside the vocabulary, in table order.
pub fn unrecognized_fields(record: &FieldRecord) -> Vec<FieldKey> {
    FIELD_ORDER
        .into_iter()
        .filter(|&key| !is_known_value(key, record.get(key)))
        .collect()
}
