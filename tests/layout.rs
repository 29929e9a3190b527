use frame_studio::frame::{ContentVariant, Frame};
use frame_studio::layer::{ProductImageLayer, ProductPosition};
use frame_studio::layout::{
    BOTTOM_MARGIN, RESERVE_MAX, RESERVE_MIN, TOP_MARGIN, estimate_lines, estimate_text,
    frame_product_band, product_band,
};

#[test]
fn test_reserve_for_long_copy() {
    let headline = "a".repeat(40);
    let body = "b".repeat(80);
    let estimate = estimate_text(&headline, &body);

    assert_eq!(estimate.headline_lines, 3);
    assert_eq!(estimate.body_lines, 3);
    assert!((estimate.reserve - 0.54).abs() < 1e-5);
}

#[test]
fn test_line_estimates() {
    assert_eq!(estimate_lines("", 17), 1);
    assert_eq!(estimate_lines(&"x".repeat(17), 17), 1);
    assert_eq!(estimate_lines(&"x".repeat(18), 17), 2);
    // Characters, not bytes
    assert_eq!(estimate_lines(&"é".repeat(17), 17), 1);
}

#[test]
fn test_reserve_is_clamped() {
    let short = estimate_text("", "");
    assert!((short.reserve - RESERVE_MIN).abs() < 1e-5);

    let long = estimate_text(&"h".repeat(200), &"b".repeat(500));
    assert!((long.reserve - RESERVE_MAX).abs() < 1e-5);
}

#[test]
fn test_band_positions() {
    let reserve = 0.5;

    let top = product_band(ProductPosition::Top, reserve);
    assert!((top.top - TOP_MARGIN).abs() < 1e-5);
    assert!((top.bottom - (1.0 - BOTTOM_MARGIN - reserve)).abs() < 1e-5);

    let bottom = product_band(ProductPosition::Bottom, reserve);
    assert!((bottom.top - (TOP_MARGIN + reserve)).abs() < 1e-5);
    assert!((bottom.bottom - (1.0 - BOTTOM_MARGIN)).abs() < 1e-5);

    assert!((top.height() - bottom.height()).abs() < 1e-5);
    let (y0, y1) = top.to_px(1000.0);
    assert!((y0 - 120.0).abs() < 1e-3);
    assert!((y1 - 420.0).abs() < 1e-3);
}

#[test]
fn test_band_follows_current_copy() {
    let mut frame = Frame::new();
    assert!(frame_product_band(&frame).is_none());

    frame.product_image = Some(ProductImageLayer::default());
    let empty = frame_product_band(&frame).unwrap();

    frame.variants[0] = ContentVariant::new("a".repeat(40), "b".repeat(80));
    let long = frame_product_band(&frame).unwrap();
    assert!(long.height() < empty.height());
    assert!((long.bottom - (1.0 - BOTTOM_MARGIN - 0.54)).abs() < 1e-5);
}
