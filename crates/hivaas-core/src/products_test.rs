use serde_json::json;

use super::*;

fn decode(value: Value) -> Product {
    serde_json::from_value(value).expect("product should decode")
}

#[test]
fn size_labels_round_trip_through_from_label() {
    for size in Size::ALL {
        assert_eq!(Size::from_label(size.label()), Some(size));
    }
}

#[test]
fn size_from_str_is_case_insensitive() {
    assert_eq!("xl".parse::<Size>().unwrap(), Size::Xl);
    assert_eq!(" 2xl ".parse::<Size>().unwrap(), Size::Xxl);
    assert!(matches!(
        "XXL".parse::<Size>(),
        Err(CoreError::UnknownSize(ref s)) if s == "XXL"
    ));
}

#[test]
fn from_label_is_exact() {
    assert_eq!(Size::from_label("m"), None);
    assert_eq!(Size::from_label("M"), Some(Size::M));
}

#[test]
fn decodes_object_sizes() {
    let product = decode(json!({
        "product_code": "A",
        "description": "Silk Saree",
        "price": 100,
        "type": "Saree",
        "sizes": {"M": true, "L": false, "XXL": true}
    }));
    assert!(product.has_size(Size::M));
    assert!(!product.has_size(Size::L));
    assert!(!product.has_size(Size::Xs));
    assert_eq!(product.sizes.available().collect::<Vec<_>>(), vec![Size::M]);
}

#[test]
fn decodes_string_encoded_sizes() {
    let product = decode(json!({
        "product_code": "A",
        "price": 100,
        "sizes": "{\"S\":true,\"3XL\":true,\"M\":false}"
    }));
    assert_eq!(
        product.sizes.available().collect::<Vec<_>>(),
        vec![Size::S, Size::Xxxl]
    );
}

#[test]
fn unparseable_sizes_string_means_nothing_available() {
    let product = decode(json!({
        "product_code": "A",
        "price": 100,
        "sizes": "{not json"
    }));
    assert_eq!(product.sizes, SizeAvailability::default());
}

#[test]
fn size_flags_follow_truthiness() {
    let sizes = SizeAvailability::from_value(&json!({
        "XS": 1, "S": 0, "M": "yes", "L": "", "XL": null
    }));
    assert!(sizes.is_available(Size::Xs));
    assert!(!sizes.is_available(Size::S));
    assert!(sizes.is_available(Size::M));
    assert!(!sizes.is_available(Size::L));
    assert!(!sizes.is_available(Size::Xl));
}

#[test]
fn missing_optional_fields_default() {
    let product = decode(json!({"product_code": "A", "price": 10}));
    assert_eq!(product.description, "");
    assert_eq!(product.product_type, "");
    assert!(product.images().is_empty());
    assert!(!product.is_sold_out());
}

#[test]
fn numeric_code_and_string_price_are_accepted() {
    let product = decode(json!({"product_code": 4021, "price": " 1299.50 "}));
    assert_eq!(product.product_code, "4021");
    assert!((product.price - 1299.5).abs() < f64::EPSILON);
}

#[test]
fn non_numeric_price_fails_decode() {
    let result = serde_json::from_value::<Product>(json!({"product_code": "A", "price": "free"}));
    assert!(result.is_err());
}

#[test]
fn sold_out_is_case_insensitive_false() {
    for marker in [json!("false"), json!("FALSE"), json!("False"), json!(false)] {
        let product = decode(json!({"product_code": "A", "price": 1, "in_stock": marker}));
        assert!(product.is_sold_out(), "expected sold out for {marker}");
    }
    for marker in [json!("true"), json!(true), json!("no"), json!(null), json!(0)] {
        let product = decode(json!({"product_code": "A", "price": 1, "in_stock": marker}));
        assert!(!product.is_sold_out(), "expected in stock for {marker}");
    }
}

#[test]
fn images_skip_blank_slots_and_keep_order() {
    let product = decode(json!({
        "product_code": "A",
        "price": 1,
        "image1": "https://cdn.example/1.jpg",
        "image2": "",
        "image3": "   ",
        "image4": null,
        "image5": "https://cdn.example/5.jpg"
    }));
    assert_eq!(
        product.images(),
        vec!["https://cdn.example/1.jpg", "https://cdn.example/5.jpg"]
    );
}
