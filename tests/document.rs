//! Validates source-mode selection, rasterization purity, and empty-source detection

use image::{Rgba, RgbaImage};
use tilepreview::PreviewError;
use tilepreview::document::{
    AcceptAll, Confirm, DeclineAll, Document, Layer, Selection, SourceMode, resolve,
};
use tilepreview::grid::Dimensions;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

struct CountingConfirm {
    calls: usize,
    answer: bool,
}

impl Confirm for CountingConfirm {
    fn confirm(&mut self, _message: &str, _title: &str) -> bool {
        self.calls += 1;
        self.answer
    }
}

fn two_layer_document() -> Document {
    let mut document = Document::from_image(RgbaImage::from_pixel(8, 8, RED));
    document.push_layer(Layer::pixel("Detail", 2, 2, RgbaImage::from_pixel(4, 4, BLUE)));
    document
}

#[test]
fn test_selection_wins_over_layers() {
    let mut document = two_layer_document();
    document.select(Selection::new(1, 1, 3, 3));

    let source = resolve(&document, &mut AcceptAll).unwrap();

    assert_eq!(source.mode, SourceMode::Selection);
    assert_eq!(source.dimensions, Dimensions::new(3, 3));
    // selection content comes from the flattened document
    assert_eq!(*source.content.get_pixel(0, 0), RED);
    assert_eq!(*source.content.get_pixel(2, 2), BLUE);
}

#[test]
fn test_layer_mode_for_multi_layer_documents() {
    let document = two_layer_document();

    let source = resolve(&document, &mut AcceptAll).unwrap();

    assert_eq!(source.mode, SourceMode::Layer);
    assert_eq!(source.dimensions, Dimensions::new(4, 4));
    assert_eq!(*source.content.get_pixel(0, 0), BLUE);
}

#[test]
fn test_image_mode_for_single_layer_documents() {
    let document = Document::from_image(RgbaImage::from_pixel(8, 6, RED));

    let source = resolve(&document, &mut AcceptAll).unwrap();

    assert_eq!(source.mode, SourceMode::Image);
    assert_eq!(source.dimensions, Dimensions::new(8, 6));
}

#[test]
fn test_empty_selection_is_rejected() {
    let mut document = two_layer_document();
    document.select(Selection::new(2, 2, 0, 5));

    let result = resolve(&document, &mut AcceptAll);
    assert!(matches!(result, Err(PreviewError::EmptySource { .. })));
}

#[test]
fn test_selection_is_clamped_to_the_document() {
    let mut document = Document::from_image(RgbaImage::from_pixel(10, 10, RED));
    document.select(Selection::new(6, 6, 8, 8));

    let source = resolve(&document, &mut AcceptAll).unwrap();
    assert_eq!(source.dimensions, Dimensions::new(4, 4));
}

#[test]
fn test_selection_outside_the_document_is_rejected() {
    let mut document = Document::from_image(RgbaImage::from_pixel(10, 10, RED));
    document.select(Selection::new(12, 0, 4, 4));

    let result = resolve(&document, &mut AcceptAll);
    assert!(matches!(result, Err(PreviewError::EmptySource { .. })));
}

#[test]
fn test_empty_active_layer_is_rejected() {
    let mut document = Document::from_image(RgbaImage::from_pixel(8, 8, RED));
    document.push_layer(Layer::pixel("Empty", 0, 0, RgbaImage::new(0, 0)));

    let result = resolve(&document, &mut AcceptAll);
    assert!(matches!(result, Err(PreviewError::EmptySource { .. })));
}

#[test]
fn test_document_without_artwork_is_rejected() {
    let mut document = Document::new(8, 8);
    document.push_layer(Layer::pixel("Empty", 0, 0, RgbaImage::new(0, 0)));

    let result = resolve(&document, &mut AcceptAll);
    assert!(matches!(result, Err(PreviewError::EmptySource { .. })));
}

#[test]
fn test_group_is_flattened_without_mutating_the_document() {
    let mut document = Document::from_image(RgbaImage::from_pixel(8, 8, RED));
    document.push_layer(Layer::group(
        "Props",
        vec![
            Layer::pixel("A", 0, 0, RgbaImage::from_pixel(2, 2, GREEN)),
            Layer::pixel("B", 4, 4, RgbaImage::from_pixel(2, 2, BLUE)),
        ],
    ));

    let source = resolve(&document, &mut AcceptAll).unwrap();

    assert_eq!(source.mode, SourceMode::Layer);
    // union of the children's bounds
    assert_eq!(source.dimensions, Dimensions::new(6, 6));
    assert_eq!(*source.content.get_pixel(0, 0), GREEN);
    assert_eq!(*source.content.get_pixel(5, 5), BLUE);
    assert_eq!(source.content.get_pixel(3, 3).0[3], 0);

    // the original document still holds the unmerged group
    assert_eq!(document.layer_count(), 2);
    assert!(document.active_layer().is_some_and(Layer::is_group));
}

#[test]
fn test_declined_group_confirmation_cancels_cleanly() {
    let mut document = Document::from_image(RgbaImage::from_pixel(8, 8, RED));
    document.push_layer(Layer::group(
        "Props",
        vec![Layer::pixel("A", 0, 0, RgbaImage::from_pixel(2, 2, GREEN))],
    ));

    let result = resolve(&document, &mut DeclineAll);
    assert!(result.is_err_and(|e| e.is_cancellation()));
}

#[test]
fn test_confirmation_is_only_requested_for_groups() {
    let mut confirm = CountingConfirm {
        calls: 0,
        answer: true,
    };

    let document = two_layer_document();
    resolve(&document, &mut confirm).unwrap();
    assert_eq!(confirm.calls, 0);

    let mut grouped = Document::from_image(RgbaImage::from_pixel(8, 8, RED));
    grouped.push_layer(Layer::group(
        "Props",
        vec![Layer::pixel("A", 0, 0, RgbaImage::from_pixel(2, 2, GREEN))],
    ));
    resolve(&grouped, &mut confirm).unwrap();
    assert_eq!(confirm.calls, 1);
}

#[test]
fn test_selection_beats_any_layer_configuration() {
    // a selection resolves to SELECTION regardless of layer count
    for layer_count in 1..4 {
        let mut document = Document::from_image(RgbaImage::from_pixel(8, 8, RED));
        for i in 1..layer_count {
            document.push_layer(Layer::pixel(
                format!("L{i}"),
                0,
                0,
                RgbaImage::from_pixel(2, 2, BLUE),
            ));
        }
        document.select(Selection::new(0, 0, 5, 5));

        let source = resolve(&document, &mut AcceptAll).unwrap();
        assert_eq!(source.mode, SourceMode::Selection);
        assert_eq!(source.dimensions, Dimensions::new(5, 5));
    }
}
