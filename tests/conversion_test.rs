use json2fig::scene::{layer_structure, Color, LayoutMode, Paint, TextAutoResize};
use json2fig::style::{parse_color, parse_dimension};
use json2fig::{
    convert, convert_bytes, ConversionOptions, ConvertError, FontBook, FontName, Format,
    SchemaHint,
};
use serde_json::{json, Value as JsonValue};
use std::io::Write;

fn run(json: JsonValue) -> json2fig::Result<json2fig::Conversion> {
    let _ = env_logger::builder().is_test(true).try_init();
    convert(&json, &ConversionOptions::default(), &mut FontBook::permissive())
}

#[test]
fn test_color_resolution() {
    let red = parse_color(&json!("#ff0000"));
    assert_eq!((red.r, red.g, red.b), (1.0, 0.0, 0.0));

    let green = parse_color(&json!("rgb(0, 255, 0)"));
    assert_eq!((green.r, green.g, green.b), (0.0, 1.0, 0.0));

    let blue = parse_color(&json!("blue"));
    assert_eq!((blue.r, blue.g, blue.b), (0.0, 0.0, 1.0));

    let unknown = parse_color(&json!("not-a-color"));
    assert_eq!((unknown.r, unknown.g, unknown.b), (0.0, 0.0, 0.0));
}

#[test]
fn test_dimension_resolution() {
    assert_eq!(parse_dimension(Some(&json!("24px")), 0.0), 24.0);
    assert_eq!(parse_dimension(Some(&json!("12")), 0.0), 12.0);
    assert_eq!(parse_dimension(Some(&json!("auto")), 100.0), 100.0);
}

#[test]
fn test_native_frame() {
    let conversion = run(json!({
        "type": "FRAME",
        "absoluteBoundingBox": {"x": 10, "y": 20, "width": 300, "height": 150}
    }))
    .unwrap();

    assert_eq!(conversion.format, Format::Native);
    assert_eq!(conversion.roots.len(), 1);

    let frame = &conversion.roots[0];
    assert!(frame.is_container());
    assert_eq!((frame.x, frame.y, frame.width, frame.height), (10.0, 20.0, 300.0, 150.0));
    assert!(frame.children().is_empty());
}

#[test]
fn test_markup_nested_text() {
    let conversion = run(json!({
        "type": "div",
        "children": [{
            "type": "div",
            "text": "Hello",
            "position": {"absolute": {"x": 0, "y": 0, "width": 100, "height": 30}}
        }]
    }))
    .unwrap();

    assert_eq!(conversion.format, Format::Markup);
    let root = &conversion.roots[0];
    assert!(root.is_container());
    assert_eq!(root.children().len(), 1);

    let text = &root.children()[0];
    let props = text.text().unwrap();
    assert_eq!(props.characters, "Hello");
    assert_eq!(props.text_auto_resize, TextAutoResize::Height);
    assert_eq!(text.width, 100.0);
}

#[test]
fn test_hidden_nodes_not_tallied() {
    let conversion = run(json!({
        "type": "div",
        "children": [
            {"type": "p", "text": "visible"},
            {"type": "div", "styles": {"display": "none"}, "children": [{"type": "p", "text": "gone"}]}
        ]
    }))
    .unwrap();

    assert_eq!(conversion.summary.created, 2);
    assert_eq!(conversion.summary.node_types.get("TEXT"), Some(&1));
    assert_eq!(conversion.summary.node_types.get("FRAME"), Some(&1));
}

#[test]
fn test_multi_frame_wrapper() {
    let conversion = run(json!({
        "type": "CANVAS",
        "frames": [
            {"type": "FRAME", "absoluteBoundingBox": {"x": 0, "y": 0, "width": 100, "height": 100}},
            {"type": "FRAME", "absoluteBoundingBox": {"x": 200, "y": 0, "width": 100, "height": 100}}
        ]
    }))
    .unwrap();

    let wrapper = &conversion.roots[0];
    assert_eq!(
        (wrapper.x, wrapper.y, wrapper.width, wrapper.height),
        (0.0, 0.0, 300.0, 100.0)
    );
    assert_eq!(wrapper.children()[1].x, 200.0);
    assert_eq!(conversion.summary.created, 3);
}

#[test]
fn test_null_input() {
    match run(JsonValue::Null) {
        Err(ConvertError::MissingInput) => (),
        _ => panic!("Expected MissingInput error"),
    }
}

#[test]
fn test_flex_column_layout() {
    let conversion = run(json!({
        "type": "div",
        "styles": {"display": "flex", "flexDirection": "column", "gap": "8px"}
    }))
    .unwrap();

    let layout = conversion.roots[0].auto_layout().unwrap();
    assert_eq!(layout.layout_mode, LayoutMode::Vertical);
    assert_eq!(layout.item_spacing, 8.0);
}

#[test]
fn test_font_requests_in_document_order() {
    let mut fonts = FontBook::with_families(["Roboto"]);
    let json = json!({
        "type": "div",
        "children": [
            {"type": "h1", "text": "Title", "styles": {"fontFamily": "Roboto", "fontWeight": 700}},
            {"type": "p", "text": "Body", "styles": {"fontFamily": "Lato"}}
        ]
    });

    let conversion = convert(&json, &ConversionOptions::default(), &mut fonts).unwrap();

    assert_eq!(
        fonts.requested(),
        &[
            FontName::new("Roboto", "Bold"),
            FontName::new("Lato", "Regular"),
            FontName::new("Inter", "Regular"),
        ]
    );
    let body = &conversion.roots[0].children()[1];
    assert_eq!(body.text().unwrap().font_name, FontName::new("Inter", "Regular"));
}

#[test]
fn test_options_from_panel_json() {
    let options: ConversionOptions = serde_json::from_value(json!({
        "preserveColors": false,
        "useAutoLayout": false
    }))
    .unwrap();

    let json = json!({
        "type": "div",
        "styles": {"display": "flex", "backgroundColor": "#ff0000", "color": "#00ff00"},
        "children": [{"type": "span", "text": "x", "styles": {"color": "#00ff00"}}]
    });
    let conversion = convert(&json, &options, &mut FontBook::permissive()).unwrap();

    let root = &conversion.roots[0];
    assert!(root.fills.is_empty());
    assert!(root.auto_layout().is_none());
    assert_eq!(root.children()[0].fills, vec![Paint::solid(Color::BLACK)]);
}

#[test]
fn test_schema_hint_overrides_sniffing() {
    let json = json!({"type": "FRAME", "name": "No bounds"});

    assert!(matches!(run(json.clone()), Err(ConvertError::UnsupportedFormat(_))));

    let conversion = json2fig::convert_with_hint(
        &json,
        SchemaHint::Native,
        &ConversionOptions::default(),
        &mut FontBook::permissive(),
    )
    .unwrap();
    assert_eq!(conversion.roots[0].name, "No bounds");
}

#[test]
fn test_gzip_document() {
    let document = json!({
        "type": "CANVAS",
        "name": "Page",
        "children": [
            {
                "type": "FRAME",
                "name": "Card",
                "absoluteBoundingBox": {"x": 0, "y": 0, "width": 320, "height": 200},
                "children": [{"type": "TEXT", "characters": "Title"}]
            }
        ]
    });

    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(serde_json::to_string(&document).unwrap().as_bytes())
        .unwrap();
    let bytes = encoder.finish().unwrap();

    let conversion = convert_bytes(
        &bytes,
        SchemaHint::Auto,
        &ConversionOptions::default(),
        &mut FontBook::permissive(),
    )
    .unwrap();

    assert_eq!(
        layer_structure(&conversion.roots),
        vec![
            "FRAME \"Page\" 1440x900".to_string(),
            "  FRAME \"Card\" 320x200".to_string(),
            "    TEXT \"Title\" 0x0".to_string(),
        ]
    );
}

#[test]
fn test_output_serialization() {
    let conversion = run(json!({
        "type": "div",
        "id": "hero",
        "styles": {"backgroundColor": "#ffffff", "boxShadow": "0px 4px 12px rgba(0, 0, 0, 0.5)"},
        "position": {"absolute": {"x": 0, "y": 0, "width": 200, "height": 100}}
    }))
    .unwrap();

    let output = serde_json::to_value(&conversion).unwrap();
    assert_eq!(output["format"], "markup");
    assert_eq!(output["summary"]["rootName"], "div#hero");
    assert_eq!(output["roots"][0]["type"], "FRAME");
    assert_eq!(output["roots"][0]["effects"][0]["type"], "DROP_SHADOW");
    assert_eq!(output["roots"][0]["effects"][0]["radius"], 12.0);
}
