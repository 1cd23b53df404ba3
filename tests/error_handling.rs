//! Error reporting for malformed and incomplete packages.

mod common;

use common::VsdxBuilder;
use vsdx::ooxml::opc::OpcError;
use vsdx::{Package, ParseOptions, VsdxError};

fn parse(data: Vec<u8>) -> Result<vsdx::VisioModel, VsdxError> {
    Package::from_bytes(data)?.parse(&ParseOptions::default())
}

#[test]
fn non_zip_input_fails_to_open() {
    let err = Package::from_bytes(b"definitely not a zip archive".to_vec())
        .err()
        .expect("open should fail");
    assert!(matches!(err, VsdxError::Opc(OpcError::ZipError(_))));
}

#[test]
fn missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let err = Package::open(dir.path().join("nope.vsdx"))
        .err()
        .expect("open should fail");
    assert!(matches!(err, VsdxError::Opc(OpcError::PackageNotFound(_))));
}

#[test]
fn missing_document_relationship() {
    let data = VsdxBuilder::new()
        .without_document_rel()
        .core("<dc:title>Not a drawing</dc:title>")
        .build();

    let err = parse(data).unwrap_err();
    assert!(matches!(err, VsdxError::NotVisioDocument(_)), "got {err}");
}

#[test]
fn non_numeric_layer_color() {
    let data = VsdxBuilder::new()
        .page(
            0,
            "Page-1",
            r#"<Section N="Layer"><Row IX="0"><Cell N="Color" V="blue"/></Row></Section>"#,
            "",
        )
        .build();

    let err = parse(data).unwrap_err();
    match &err {
        VsdxError::InPart { part, .. } => assert_eq!(part, "/visio/pages/pages.xml"),
        other => panic!("expected part context, got {other:?}"),
    }
    match err.root_cause() {
        VsdxError::InvalidNumber { location, value } => {
            assert_eq!(location, "Layer/0/Color");
            assert_eq!(value, "blue");
        },
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
    assert!(err.to_string().contains("/visio/pages/pages.xml"));
}

#[test]
fn shape_without_id() {
    let data = VsdxBuilder::new()
        .page(0, "Page-1", "", r#"<Shapes><Shape ID="1"/><Shape NameU="Anonymous"/></Shapes>"#)
        .build();

    let err = parse(data).unwrap_err();
    match &err {
        VsdxError::InPart { part, source } => {
            assert_eq!(part, "/visio/pages/page1.xml");
            assert!(matches!(
                **source,
                VsdxError::MissingAttribute {
                    element: "Shape",
                    attribute: "ID"
                }
            ));
        },
        other => panic!("expected part context, got {other:?}"),
    }
}

#[test]
fn malformed_part_xml() {
    let data = VsdxBuilder::new()
        .page(0, "Page-1", "", "<Shapes><Shape ID=\"1\"></Shapes>")
        .build();

    let err = parse(data).unwrap_err();
    assert!(matches!(err.root_cause(), VsdxError::Xml(_)), "got {err:?}");
}

#[test]
fn invalid_property_type() {
    let data = VsdxBuilder::new()
        .master(
            3,
            "Server",
            r#"<Section N="Property"><Row N="Cores"><Cell N="Type" V="many"/></Row></Section>"#,
        )
        .build();

    let err = parse(data).unwrap_err();
    match &err {
        VsdxError::InPart { part, .. } => assert_eq!(part, "/visio/masters/master1.xml"),
        other => panic!("expected part context, got {other:?}"),
    }
    assert!(matches!(err.root_cause(), VsdxError::InvalidNumber { .. }));
}
