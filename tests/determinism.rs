//! Repeated and concurrent parses produce identical models.

mod common;

use common::{VsdxBuilder, network_drawing};
use std::path::PathBuf;
use std::thread;
use vsdx::{Document, Package, ParseOptions, batch, persist};

fn parse_document(data: Vec<u8>) -> Document {
    Package::from_bytes(data)
        .expect("open package")
        .parse(&ParseOptions::default())
        .expect("parse drawing")
        .document
}

#[test]
fn repeated_parses_match() {
    let first = parse_document(network_drawing());
    for _ in 0..5 {
        assert_eq!(parse_document(network_drawing()), first);
    }
}

#[test]
fn serialized_form_is_stable() {
    let a = Package::from_bytes(network_drawing()).unwrap().parse(&ParseOptions::default()).unwrap();
    let mut b = Package::from_bytes(network_drawing()).unwrap().parse(&ParseOptions::default()).unwrap();
    b.metadata = a.metadata.clone();

    assert_eq!(persist::to_json(&a).unwrap(), persist::to_json(&b).unwrap());
}

#[test]
fn concurrent_parses_match() {
    let expected = parse_document(network_drawing());

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| parse_document(network_drawing())))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let document = handle.join().unwrap();
        assert_eq!(document, expected, "thread {i} produced a different document");
    }
}

#[test]
fn parse_many_keeps_order_and_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths: Vec<PathBuf> = Vec::new();

    for i in 0..6 {
        let path = dir.path().join(format!("drawing-{i}.vsdx"));
        let data = if i == 3 {
            b"corrupt".to_vec()
        } else if i % 2 == 0 {
            network_drawing()
        } else {
            VsdxBuilder::new().page(i, &format!("Only{i}"), "", "").build()
        };
        std::fs::write(&path, data).unwrap();
        paths.push(path);
    }

    let results = batch::parse_many(&paths, &ParseOptions::default());
    assert_eq!(results.len(), paths.len());

    let serial = vsdx::parse(&paths[0]).unwrap().document;
    for (i, result) in results.iter().enumerate() {
        if i == 3 {
            assert!(result.is_err());
            continue;
        }
        let document = &result.as_ref().unwrap().document;
        assert_eq!(document.name, Some(format!("drawing-{i}.vsdx")));
        if i % 2 == 0 {
            let mut document = document.clone();
            document.name = serial.name.clone();
            assert_eq!(document, serial);
        } else {
            assert_eq!(document.pages.keys().copied().collect::<Vec<_>>(), vec![i as u32]);
        }
    }
}
