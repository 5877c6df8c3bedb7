use hivaas_core::{Product, Size, SortOption, SELECT_SIZE_HINT};
use serde_json::json;

use super::*;

fn config() -> AppConfig {
    AppConfig {
        catalog_url: "http://localhost/api/products".to_string(),
        log_level: "info".to_string(),
        request_timeout_secs: None,
        user_agent: "test".to_string(),
        share_phone: "918073879674".to_string(),
        currency_symbol: "\u{20b9}".to_string(),
        page_size: 2,
        notice_millis: 2000,
        recommended_count: 5,
    }
}

fn product(code: &str, price: u32, ty: &str, sizes: serde_json::Value, in_stock: &str) -> Product {
    serde_json::from_value(json!({
        "product_code": code,
        "description": format!("{ty} {code}"),
        "price": price,
        "type": ty,
        "sizes": sizes,
        "in_stock": in_stock,
        "image1": format!("https://cdn.example/{code}-1.jpg"),
        "image2": format!("https://cdn.example/{code}-2.jpg"),
    }))
    .expect("fixture should decode")
}

fn session() -> Session {
    let products = vec![
        product("A", 100, "Saree", json!({"M": true, "L": true}), "true"),
        product("B", 50, "Kurti", json!({"S": true}), "true"),
        product("C", 75, "Saree", json!({"M": true}), "false"),
    ];
    let config = config();
    let store = CatalogStore::with_products(products, config.page_size, config.recommended_count);
    Session::new(store, config)
}

fn run(session: &mut Session, cmd: BrowseCommand) -> String {
    match session.execute(cmd) {
        Step::Continue(out) => out,
        Step::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn quit_ends_session() {
    assert_eq!(session().execute(BrowseCommand::Quit), Step::Quit);
}

#[test]
fn paging_and_filters() {
    let mut s = session();
    let first = run(&mut s, BrowseCommand::Show);
    assert!(first.contains("Showing 3 products"));
    assert!(first.contains("Page 1 of 2"));

    let second = run(&mut s, BrowseCommand::Next);
    assert!(second.contains("[C]"));
    assert!(second.contains("Page 2 of 2"));

    let filtered = run(&mut s, BrowseCommand::Size(Size::M));
    assert!(filtered.starts_with("Size: M\n"));
    assert!(filtered.contains("Showing 2 products"));
    assert!(filtered.contains("Page 1 of 1"));

    let sorted = run(&mut s, BrowseCommand::Sort(SortOption::PriceAscending));
    let c = sorted.find("[C]").unwrap();
    let a = sorted.find("[A]").unwrap();
    assert!(c < a);
}

#[test]
fn no_matches_shows_recommended() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::Search("lehenga".to_string()));
    assert!(out.contains("No products found for selected filters."));
    assert!(out.contains("Recommended Products"));
    assert!(out.contains("[A]") && out.contains("[B]") && out.contains("[C]"));

    let cleared = run(&mut s, BrowseCommand::Clear);
    assert!(cleared.contains("Showing 3 products"));
}

#[test]
fn unknown_type_is_reported() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::Type("Lehenga".to_string()));
    assert!(out.contains("unknown type"));
}

#[test]
fn wish_without_sizes_shows_instruction() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::Wish("A".to_string()));
    assert_eq!(out.trim_end(), WishlistError::NoSizesSelected.to_string());
    assert!(s.wishlist().is_empty());

    let card = run(&mut s, BrowseCommand::Card("A".to_string()));
    assert!(card.contains(SELECT_SIZE_HINT));
}

#[test]
fn wish_adds_then_removes() {
    let mut s = session();
    run(
        &mut s,
        BrowseCommand::Pick {
            code: "A".to_string(),
            size: Size::M,
        },
    );
    let added = run(&mut s, BrowseCommand::Wish("A".to_string()));
    assert_eq!(added, "Added to wishlist!\n");
    assert!(s.wishlist().contains("A"));

    let panel = run(&mut s, BrowseCommand::Wishlist);
    assert!(panel.starts_with("My Wishlist (1)"));

    let removed = run(&mut s, BrowseCommand::Wish("A".to_string()));
    assert_eq!(removed, "Removed from wishlist!\n");
    assert!(s.wishlist().is_empty());

    let card = run(&mut s, BrowseCommand::Card("A".to_string()));
    assert!(card.contains(SELECT_SIZE_HINT));
}

#[test]
fn unwish_removes_from_panel() {
    let mut s = session();
    run(
        &mut s,
        BrowseCommand::Pick {
            code: "B".to_string(),
            size: Size::S,
        },
    );
    run(&mut s, BrowseCommand::Wish("B".to_string()));
    let out = run(&mut s, BrowseCommand::Unwish("B".to_string()));
    assert!(out.starts_with("Removed from wishlist!\n"));
    assert!(out.contains("Your wishlist is empty."));
}

#[test]
fn sold_out_card_rejects_picks_but_rotates_images() {
    let mut s = session();
    let card = run(
        &mut s,
        BrowseCommand::Pick {
            code: "C".to_string(),
            size: Size::M,
        },
    );
    assert!(card.contains("Sold Out"));
    assert!(!card.contains("[M]"));

    let rotated = run(
        &mut s,
        BrowseCommand::Image {
            code: "C".to_string(),
            step: ImageStep::Prev,
        },
    );
    assert!(rotated.contains("Image 2 / 2: https://cdn.example/C-2.jpg"));

    let out = run(&mut s, BrowseCommand::Wish("C".to_string()));
    assert!(out.contains("sold out"));
}

#[test]
fn view_and_close_image() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::View("A".to_string()));
    assert_eq!(out, "Full-size image: https://cdn.example/A-1.jpg\n");
    assert_eq!(run(&mut s, BrowseCommand::Close("A".to_string())), "Image closed\n");
}

#[test]
fn share_wishlist_prints_text_and_link() {
    let mut s = session();
    assert!(run(&mut s, BrowseCommand::Share).contains("Your wishlist is empty."));

    for size in [Size::M, Size::L] {
        run(
            &mut s,
            BrowseCommand::Pick {
                code: "A".to_string(),
                size,
            },
        );
    }
    run(&mut s, BrowseCommand::Wish("A".to_string()));
    let out = run(&mut s, BrowseCommand::Share);
    assert!(out.starts_with(
        "Hi, I'm interested in the following products:\nA: Saree A (\u{20b9}100) - Sizes: M, L\n"
    ));
    assert!(out.contains("https://wa.me/918073879674?text=Hi%2C%20I'm%20interested"));
}

#[test]
fn send_single_product() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::Send("B".to_string()));
    assert_eq!(out.trim_end(), WishlistError::NoSizesSelected.to_string());

    run(
        &mut s,
        BrowseCommand::Pick {
            code: "B".to_string(),
            size: Size::S,
        },
    );
    let out = run(&mut s, BrowseCommand::Send("B".to_string()));
    assert!(out.starts_with("Hi, I'm interested in Product Code: B - Kurti B. Sizes: S\n"));
}

#[test]
fn unknown_code_is_reported() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::Card("Z".to_string()));
    assert_eq!(out, "no product with code Z\n");
}

#[test]
fn guide_prints_shopper_instructions() {
    let mut s = session();
    let out = run(&mut s, BrowseCommand::Guide);
    assert!(out.starts_with("You can use the filters at the top"));
    assert!(out.ends_with("Happy shopping!\n"));
}
