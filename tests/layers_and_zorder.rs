use frame_studio::assets::{AssetCatalog, AssetRecord, AssetSource, InMemoryCatalog};
use frame_studio::layer::patch::{ImagePatch, ProductImagePatch};
use frame_studio::layer::{
    BackgroundKind, IconLayer, ImageLayer, Layer, LayerKind, PatternLayer, ProductImageLayer,
    wrap_rotation,
};
use frame_studio::zorder::{
    self, BackgroundOrder, EDITING_IMAGE_Z, ICON_Z, PRODUCT_IMAGE_Z, PROGRESS_Z, move_element,
};

fn is_permutation(order: &BackgroundOrder) -> bool {
    let kinds = order.kinds();
    BackgroundKind::ALL
        .iter()
        .all(|kind| kinds.iter().filter(|k| *k == kind).count() == 1)
}

#[test]
fn test_reorder_fill_over_image() {
    let order = BackgroundOrder::default();
    assert_eq!(
        order.kinds(),
        [BackgroundKind::Fill, BackgroundKind::Pattern, BackgroundKind::Image]
    );

    let reordered = order
        .reorder(BackgroundKind::Fill, BackgroundKind::Image)
        .expect("fill and image are distinct");
    assert_eq!(
        reordered.kinds(),
        [BackgroundKind::Pattern, BackgroundKind::Image, BackgroundKind::Fill]
    );
}

#[test]
fn test_every_reorder_keeps_a_permutation() {
    let mut order = BackgroundOrder::default();
    for active in BackgroundKind::ALL {
        for over in BackgroundKind::ALL {
            if let Some(next) = order.reorder(active, over) {
                assert!(is_permutation(&next));
                order = next;
            }
        }
    }
    assert!(is_permutation(&order));
}

#[test]
fn test_reorder_onto_itself_is_noop() {
    let order = BackgroundOrder::default();
    assert!(order.reorder(BackgroundKind::Pattern, BackgroundKind::Pattern).is_none());
}

#[test]
fn test_order_rejects_non_permutations() {
    assert!(
        BackgroundOrder::new([BackgroundKind::Fill, BackgroundKind::Fill, BackgroundKind::Image])
            .is_none()
    );

    let duplicate: Result<BackgroundOrder, _> = serde_json::from_str(r#"["fill","fill","image"]"#);
    assert!(duplicate.is_err());
    let short: Result<BackgroundOrder, _> = serde_json::from_str(r#"["fill","image"]"#);
    assert!(short.is_err());

    let valid: BackgroundOrder = serde_json::from_str(r#"["image","fill","pattern"]"#).unwrap();
    assert_eq!(valid.z_index(BackgroundKind::Image), 1);
    assert_eq!(valid.z_index(BackgroundKind::Pattern), 3);
}

#[test]
fn test_move_element_generic() {
    let order = vec!['a', 'b', 'c', 'd'];
    assert_eq!(move_element(&order, &'d', &'b'), Some(vec!['a', 'd', 'b', 'c']));
    assert_eq!(move_element(&order, &'a', &'c'), Some(vec!['b', 'c', 'a', 'd']));
    assert_eq!(move_element(&order, &'a', &'z'), None);
    assert_eq!(move_element(&order, &'b', &'b'), None);
}

#[test]
fn test_z_index_bands() {
    let order = BackgroundOrder::default();
    assert_eq!(zorder::z_index(LayerKind::Fill, &order, false), 1);
    assert_eq!(zorder::z_index(LayerKind::Pattern, &order, false), 2);
    assert_eq!(zorder::z_index(LayerKind::Image, &order, false), 3);
    assert_eq!(zorder::z_index(LayerKind::ProductImage, &order, false), PRODUCT_IMAGE_Z);
    assert_eq!(zorder::z_index(LayerKind::Icon, &order, false), ICON_Z);
    assert_eq!(zorder::z_index(LayerKind::Progress, &order, false), PROGRESS_Z);

    // Foreground always stays above every background
    for kind in [LayerKind::ProductImage, LayerKind::Icon, LayerKind::Progress] {
        assert!(zorder::z_index(kind, &order, false) > 3);
    }
}

#[test]
fn test_editing_image_is_lifted_above_everything() {
    let order = BackgroundOrder::default();
    let lifted = zorder::z_index(LayerKind::Image, &order, true);
    assert_eq!(lifted, EDITING_IMAGE_Z);
    for kind in LayerKind::ALL.into_iter().filter(|k| *k != LayerKind::Image) {
        assert!(lifted > zorder::z_index(kind, &order, true));
    }
    // Other layers are unaffected by the override
    assert_eq!(zorder::z_index(LayerKind::Fill, &order, true), 1);
}

#[test]
fn test_image_clamping() {
    let layer = ImageLayer {
        x: 3.0,
        y: -7.0,
        scale: 12.0,
        opacity: 1.5,
        rotation: -90.0,
        ..ImageLayer::new("a.jpg")
    }
    .clamped();

    assert_eq!(layer.x, 1.0);
    assert_eq!(layer.y, -1.0);
    assert_eq!(layer.scale, 5.0);
    assert_eq!(layer.opacity, 1.0);
    assert!((layer.rotation - 270.0).abs() < 1e-5);

    let tiny = ImagePatch::scale(0.01).apply(ImageLayer::default());
    assert_eq!(tiny.scale, 0.5);
}

#[test]
fn test_nan_values_fall_back() {
    let layer = ImageLayer {
        x: f32::NAN,
        scale: f32::NAN,
        opacity: f32::NAN,
        rotation: f32::INFINITY,
        ..ImageLayer::default()
    }
    .clamped();

    assert_eq!(layer.x, 0.0);
    assert_eq!(layer.scale, 1.0);
    assert_eq!(layer.opacity, 1.0);
    assert_eq!(layer.rotation, 0.0);
}

#[test]
fn test_clamping_is_idempotent() {
    let layer = ProductImageLayer {
        scale: 9.0,
        border_radius: -4.0,
        offset_x: 500.0,
        ..ProductImageLayer::default()
    };
    let once = layer.clamped();
    let twice = once.clone().clamped();
    assert_eq!(once, twice);
    assert_eq!(once.scale, 2.0);
    assert_eq!(once.border_radius, 0.0);
    // Pixel offsets have no bound
    assert_eq!(once.offset_x, 500.0);
}

#[test]
fn test_product_patch_only_touches_set_fields() {
    let layer = ProductImageLayer {
        src: "shoe.png".to_string(),
        scale: 1.5,
        ..ProductImageLayer::default()
    };
    let moved = ProductImagePatch::offset(12.0, -8.0).apply(layer.clone());
    assert_eq!(moved.offset_x, 12.0);
    assert_eq!(moved.offset_y, -8.0);
    assert_eq!(moved.scale, layer.scale);
    assert_eq!(moved.src, layer.src);
}

#[test]
fn test_wrap_rotation() {
    assert!((wrap_rotation(370.0) - 10.0).abs() < 1e-5);
    assert!((wrap_rotation(-10.0) - 350.0).abs() < 1e-5);
    assert_eq!(wrap_rotation(360.0), 0.0);
    let tiny = wrap_rotation(-1e-9);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn test_layers_from_catalog_records() {
    let catalog: InMemoryCatalog = [
        AssetRecord {
            id: "dots".to_string(),
            source: AssetSource::Path("patterns/dots.svg".to_string()),
            default_scale: 40.0,
            default_opacity: 0.4,
            tile_size: 32.0,
        },
        AssetRecord {
            id: "star".to_string(),
            source: AssetSource::Svg("<svg/>".to_string()),
            default_scale: 1.2,
            default_opacity: 1.0,
            tile_size: 24.0,
        },
    ]
    .into_iter()
    .collect();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("dots"));
    assert!(catalog.get("waves").is_none());

    let pattern = PatternLayer::from_asset(catalog.get("dots").unwrap());
    assert_eq!(pattern.pattern_id, "dots");
    assert_eq!(pattern.scale, 5.0);
    assert!((pattern.opacity - 0.4).abs() < 1e-5);

    let icon = IconLayer::from_asset(catalog.get("star").unwrap());
    assert_eq!(icon.path, "star");
    assert!((icon.scale - 1.2).abs() < 1e-5);
    assert!(icon.visible);
}
