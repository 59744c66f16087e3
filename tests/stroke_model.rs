use eframe_doodle::interchange::{strokes_from_json, strokes_to_json};
use eframe_doodle::{Colour, Document, NamedColour, Segment, Stroke, StrokeRef, Thickness};

fn sample_strokes() -> Vec<StrokeRef> {
    vec![
        Stroke::new_ref(
            NamedColour::Black.into(),
            Thickness::new(2).unwrap(),
            vec![
                Segment::new(1.0, 1.0, 5.0, 1.0),
                Segment::new(5.0, 1.0, 5.0, 9.5),
            ],
        ),
        Stroke::new_ref(Colour::Rgb([12, 34, 56]), Thickness::new(16).unwrap(), vec![]),
        Stroke::new_ref(
            NamedColour::LightGrey.into(),
            Thickness::new(1).unwrap(),
            vec![Segment::new(-3.0, 7.25, 40.0, 0.0)],
        ),
    ]
}

#[test]
fn test_replace_all_with_get_all_is_unchanged() {
    let mut document = Document::new();
    for stroke in sample_strokes() {
        document.append(stroke);
    }

    let before = document.get_all();
    document.replace_all(document.get_all());
    assert_eq!(document.get_all(), before);
}

#[test]
fn test_replace_all_swaps_everything() {
    let mut document = Document::new();
    document.append(sample_strokes()[0].clone());

    document.replace_all(sample_strokes()[1..].to_vec());
    assert_eq!(document.len(), 2);
    assert_eq!(document.strokes()[0].colour(), Colour::Rgb([12, 34, 56]));

    document.replace_all(Vec::new());
    assert!(document.is_empty());
}

#[test]
fn test_strokes_compare_by_content() {
    let a = sample_strokes();
    let b = sample_strokes();
    assert_eq!(a, b);
    assert_ne!(a[0], a[2]);
}

#[test]
fn test_json_round_trip_is_exact() {
    let strokes = sample_strokes();
    let json = strokes_to_json(&strokes).unwrap();
    let restored = strokes_from_json(&json).unwrap();
    assert_eq!(restored, strokes);
}
