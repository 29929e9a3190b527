use egui::Vec2;
use frame_studio::command::Command;
use frame_studio::config::StudioConfig;
use frame_studio::document::{Document, ProjectKind};
use frame_studio::event::StoreEvent;
use frame_studio::frame::TextField;
use frame_studio::id::FrameId;
use frame_studio::layer::patch::{FillPatch, IconPatch, ImagePatch};
use frame_studio::layer::{
    BackgroundKind, FillLayer, IconLayer, ImageLayer, LayerKind, ProductImageLayer, Stretch,
};
use frame_studio::state::ProjectSnapshot;
use frame_studio::store::Store;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn carousel(frames: usize) -> Store {
    let mut store = Store::new(Document::new(ProjectKind::Carousel));
    for index in 1..frames {
        store.dispatch(Command::AddFrame { index });
    }
    store.clear_history();
    store
}

fn frame_id(store: &Store, index: usize) -> FrameId {
    store.document().frames[index].id
}

fn image(store: &Store, index: usize) -> ImageLayer {
    store.document().frames[index].image.clone().expect("frame has an image")
}

#[test]
fn test_remove_last_frame_is_noop() {
    init_logging();
    let mut store = carousel(1);
    let id = frame_id(&store, 0);

    let events = store.dispatch(Command::RemoveFrame { frame_id: id });
    assert!(events.is_empty());
    assert_eq!(store.document().frames.len(), 1);
    assert!(!store.can_undo());
}

#[test]
fn test_remove_frame_and_undo() {
    let mut store = carousel(3);
    let id = frame_id(&store, 1);

    let events = store.dispatch(Command::RemoveFrame { frame_id: id });
    assert!(events.contains(&StoreEvent::FrameRemoved { frame_id: id }));
    assert_eq!(store.document().frames.len(), 2);

    let events = store.undo();
    assert!(events.contains(&StoreEvent::FrameAdded { frame_id: id, index: 1 }));
    assert_eq!(frame_id(&store, 1), id);
}

#[test]
fn test_update_on_missing_layer_creates_default() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);

    let events = store.dispatch(Command::UpdateIcon {
        frame_id: id,
        patch: IconPatch {
            scale: Some(1.5),
            ..IconPatch::default()
        },
    });

    let icon = store.document().frames[0].icon.clone().unwrap();
    assert_eq!(icon.scale, 1.5);
    assert_eq!(icon.color, IconLayer::default().color);
    assert!(events.contains(&StoreEvent::LayerAdded {
        frame_id: id,
        kind: LayerKind::Icon
    }));
}

#[test]
fn test_unknown_frame_is_ignored() {
    let mut store = carousel(1);
    let before = store.document().clone();

    let events = store.dispatch(Command::SetImage {
        frame_id: FrameId::new(),
        layer: ImageLayer::new("a.jpg"),
    });
    assert!(events.is_empty());
    assert_eq!(*store.document(), before);
}

#[test]
fn test_identical_update_adds_no_history() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::SetFill {
        frame_id: id,
        layer: FillLayer::solid("#ff0000"),
    });
    assert_eq!(store.history().past_len(), 1);

    let events = store.dispatch(Command::SetFill {
        frame_id: id,
        layer: FillLayer::solid("#ff0000"),
    });
    assert!(events.is_empty());
    assert_eq!(store.history().past_len(), 1);
}

#[test]
fn test_layer_added_fires_once_and_again_on_redo() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    let added = StoreEvent::LayerAdded {
        frame_id: id,
        kind: LayerKind::Image,
    };

    let events = store.dispatch(Command::SetImage {
        frame_id: id,
        layer: ImageLayer::new("a.jpg"),
    });
    assert_eq!(events.iter().filter(|e| **e == added).count(), 1);

    // Updating an existing layer is not an addition
    let events = store.dispatch(Command::UpdateImage {
        frame_id: id,
        patch: ImagePatch::scale(2.0),
    });
    assert!(!events.contains(&added));

    store.undo();
    let events = store.undo();
    assert!(events.contains(&StoreEvent::LayerRemoved {
        frame_id: id,
        kind: LayerKind::Image
    }));

    let events = store.redo();
    assert!(events.contains(&added));
    assert!(events.contains(&StoreEvent::HistoryChanged {
        can_undo: true,
        can_redo: true
    }));
}

#[test]
fn test_new_frame_inherits_variant_count() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::AddVariant { frame_id: id });
    store.dispatch(Command::AddVariant { frame_id: id });
    store.dispatch(Command::UpdateText {
        frame_id: id,
        field: TextField::Headline,
        text: "Summer sale".to_string(),
    });

    store.dispatch(Command::AddFrame { index: 1 });
    let added = &store.document().frames[1];
    assert_eq!(added.variants.len(), 3);
    assert!(added.variants.iter().all(|v| v.headline.is_empty() && v.body.is_empty()));
    assert_eq!(added.current_variant, 0);
}

#[test]
fn test_variants_keep_current_index_valid() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::AddVariant { frame_id: id });
    store.dispatch(Command::AddVariant { frame_id: id });
    assert_eq!(store.document().frames[0].current_variant, 2);

    store.dispatch(Command::RemoveVariant { frame_id: id, index: 2 });
    assert_eq!(store.document().frames[0].current_variant, 1);

    let events = store.dispatch(Command::SelectVariant { frame_id: id, index: 5 });
    assert!(events.is_empty());

    store.dispatch(Command::RemoveVariant { frame_id: id, index: 0 });
    let events = store.dispatch(Command::RemoveVariant { frame_id: id, index: 0 });
    assert!(events.is_empty());
    assert_eq!(store.document().frames[0].variants.len(), 1);
    assert_eq!(store.document().frames[0].current_variant, 0);
}

#[test]
fn test_single_frame_kinds_reject_frame_changes() {
    for kind in [ProjectKind::VideoCover, ProjectKind::SingleImage] {
        let mut store = Store::new(Document::new(kind));
        let id = frame_id(&store, 0);

        assert!(store.dispatch(Command::AddFrame { index: 1 }).is_empty());
        assert!(store.dispatch(Command::DuplicateFrame { frame_id: id }).is_empty());
        assert!(store.dispatch(Command::RemoveFrame { frame_id: id }).is_empty());
        assert_eq!(store.document().frames.len(), 1);
    }
}

#[test]
fn test_duplicate_and_move_frames() {
    let mut store = carousel(2);
    let first = frame_id(&store, 0);
    let second = frame_id(&store, 1);
    store.dispatch(Command::SetImage {
        frame_id: first,
        layer: ImageLayer::new("a.jpg"),
    });

    store.dispatch(Command::DuplicateFrame { frame_id: first });
    let copy = &store.document().frames[1];
    assert_ne!(copy.id, first);
    assert_eq!(copy.image, store.document().frames[0].image);

    let copy_id = copy.id;
    let events = store.dispatch(Command::MoveFrame {
        active: first,
        over: second,
    });
    assert!(events.contains(&StoreEvent::FramesReordered));
    assert_eq!(store.document().frame_ids(), vec![copy_id, second, first]);
}

#[test]
fn test_reorder_background_command() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);

    store.dispatch(Command::ReorderBackground {
        frame_id: id,
        active: BackgroundKind::Fill,
        over: BackgroundKind::Image,
    });
    assert_eq!(
        store.document().frames[0].background_order.kinds(),
        [BackgroundKind::Pattern, BackgroundKind::Image, BackgroundKind::Fill]
    );

    let events = store.dispatch(Command::ReorderBackground {
        frame_id: id,
        active: BackgroundKind::Image,
        over: BackgroundKind::Image,
    });
    assert!(events.is_empty());
}

#[test]
fn test_stretch_and_unstretch_background() {
    let mut store = carousel(4);
    let start = frame_id(&store, 1);
    store.dispatch(Command::SetFill {
        frame_id: start,
        layer: FillLayer::gradient("linear-gradient(#000, #fff)"),
    });

    store.dispatch(Command::StretchBackground {
        frame_id: start,
        span: 5,
    });
    let frames = &store.document().frames;
    assert!(frames[0].background.is_none());
    for (offset, frame) in frames[1..].iter().enumerate() {
        let fill = frame.background.as_ref().unwrap();
        assert_eq!(fill.stretch, Some(Stretch { span: 3, offset }));
    }

    store.dispatch(Command::UnstretchBackground {
        frame_id: frame_id(&store, 3),
    });
    assert!(
        store.document().frames[1..]
            .iter()
            .all(|frame| frame.background.as_ref().unwrap().stretch.is_none())
    );
}

#[test]
fn test_unstretch_with_oversized_span() {
    let mut store = carousel(3);
    let id = frame_id(&store, 1);
    store.dispatch(Command::SetFill {
        frame_id: id,
        layer: FillLayer::default(),
    });
    store.dispatch(Command::UpdateFill {
        frame_id: id,
        patch: FillPatch {
            stretch: Some(Some(Stretch {
                span: usize::MAX,
                offset: 1,
            })),
            ..FillPatch::default()
        },
    });

    store.dispatch(Command::UnstretchBackground { frame_id: id });
    let fill = store.document().frames[1].background.as_ref().unwrap();
    assert_eq!(fill.stretch, None);
}

#[test]
fn test_hydrate_normalizes_document() {
    init_logging();
    let mut document = Document::new(ProjectKind::Carousel);
    document.frames[0].image = Some(ImageLayer {
        x: 40.0,
        scale: 99.0,
        opacity: 7.0,
        ..ImageLayer::new("a.jpg")
    });
    document.frames[0].background = Some(FillLayer {
        stretch: Some(Stretch {
            span: usize::MAX,
            offset: 0,
        }),
        ..FillLayer::default()
    });
    document.frames[0].current_variant = 4;

    let mut store = carousel(1);
    store.hydrate(ProjectSnapshot::new(document));
    let frame = &store.document().frames[0];
    let image = frame.image.as_ref().unwrap();
    assert!((image.scale - 5.0).abs() < 1e-5);
    assert!((image.opacity - 1.0).abs() < 1e-5);
    assert!((image.x - 1.0).abs() < 1e-5);
    assert_eq!(frame.current_variant, 0);
    assert_eq!(frame.background.as_ref().unwrap().stretch, None);

    let id = frame.id;
    store.dispatch(Command::UnstretchBackground { frame_id: id });
    assert!(!store.can_undo());
}

#[test]
fn test_fill_patch_clamps_opacity() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::UpdateFill {
        frame_id: id,
        patch: FillPatch {
            opacity: Some(-2.0),
            ..FillPatch::default()
        },
    });
    assert_eq!(store.document().frames[0].background.as_ref().unwrap().opacity, 0.0);
}

#[test]
fn test_drag_is_one_undo_step() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::SetImage {
        frame_id: id,
        layer: ImageLayer::new("a.jpg"),
    });
    let before_drag = store.history().past_len();

    store.begin_image_pan(id, Vec2::new(200.0, 200.0)).unwrap();
    assert!(store.is_dragging());
    for step in 1..=30 {
        store.drag_to(Vec2::new(step as f32, 0.0));
    }
    let session = store.end_drag().unwrap();
    assert_eq!(session.layer_kind(), LayerKind::Image);

    assert!((image(&store, 0).x - 0.3).abs() < 1e-5);
    assert_eq!(store.history().past_len(), before_drag + 1);

    store.undo();
    assert_eq!(image(&store, 0).x, 0.0);
    store.redo();
    assert!((image(&store, 0).x - 0.3).abs() < 1e-5);
}

#[test]
fn test_separate_drags_are_separate_steps() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::SetProductImage {
        frame_id: id,
        layer: ProductImageLayer::default(),
    });

    for _ in 0..2 {
        store.begin_product_drag(id).unwrap();
        store.drag_to(Vec2::new(10.0, 5.0));
        store.drag_to(Vec2::new(20.0, 10.0));
        store.end_drag();
    }
    let product = store.document().frames[0].product_image.clone().unwrap();
    assert_eq!((product.offset_x, product.offset_y), (40.0, 20.0));

    store.undo();
    let product = store.document().frames[0].product_image.clone().unwrap();
    assert_eq!((product.offset_x, product.offset_y), (20.0, 10.0));
}

#[test]
fn test_cancelled_drag_restores_and_leaves_no_step() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    store.dispatch(Command::SetImage {
        frame_id: id,
        layer: ImageLayer {
            x: 0.1,
            ..ImageLayer::new("a.jpg")
        },
    });
    let past = store.history().past_len();

    store.begin_image_pan(id, Vec2::new(100.0, 100.0)).unwrap();
    store.drag_to(Vec2::new(20.0, 20.0));
    store.drag_to(Vec2::new(40.0, 20.0));
    store.cancel_drag();

    assert!(!store.is_dragging());
    assert!((image(&store, 0).x - 0.1).abs() < 1e-5);
    assert_eq!(image(&store, 0).y, 0.0);
    assert_eq!(store.history().past_len(), past);
}

#[test]
fn test_drag_needs_a_layer() {
    let mut store = carousel(1);
    let id = frame_id(&store, 0);
    assert!(store.begin_image_pan(id, Vec2::new(100.0, 100.0)).is_none());
    assert!(store.begin_product_drag(id).is_none());
    assert!(store.drag_to(Vec2::new(5.0, 5.0)).is_empty());
}

#[test]
fn test_history_limit_from_config() {
    let config = StudioConfig {
        history_limit: 2,
        ..StudioConfig::default()
    };
    let mut store = Store::from_config(Document::new(ProjectKind::Carousel), &config);
    let id = frame_id(&store, 0);
    for layout in 1..=5 {
        store.dispatch(Command::SetLayout {
            frame_id: id,
            layout,
            variant: 0,
        });
    }
    assert_eq!(store.history().past_len(), 2);
}

#[test]
fn test_hydrate_resets_history() {
    let mut store = carousel(2);
    let id = frame_id(&store, 0);
    store.dispatch(Command::SetImage {
        frame_id: id,
        layer: ImageLayer::new("a.jpg"),
    });
    let snapshot = store.serialize();

    let mut other = carousel(1);
    other.dispatch(Command::AddFrame { index: 0 });
    let events = other.hydrate(snapshot.clone());

    assert_eq!(events[0], StoreEvent::Hydrated);
    assert_eq!(*other.document(), snapshot.document);
    assert!(!other.can_undo());
    assert!(!other.can_redo());
}
