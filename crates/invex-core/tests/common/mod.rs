//! Test fixtures: small single-page text PDFs built with lopdf.

#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

pub const AMAZON_LINES: &[&str] = &[
    "Tax Invoice/Bill of Supply/Cash Memo",
    "Sold By :",
    "Cloudtail India Private Limited",
    "GST Registration No: 29AAKCS3053N1ZS",
    "Order Number: 402-1234567-7654321",
    "Invoice Number : BLR7-123456",
    "Order Date: 15.03.2024",
    "Invoice Date : 16.03.2024",
    "HSN:85183000",
];

pub const FLIPKART_LINES: &[&str] = &[
    "Tax Invoice",
    "Sold By: Retailnet, Bhiwandi",
    "GSTIN - 27AAPFU0939F1ZV",
    "Order ID: OD330012345678901234",
    "Order Date: 10-02-2024",
    "HSN: 85171300",
    "Payment Mode: Prepaid",
];

/// A one-page PDF showing `lines` top to bottom in Helvetica.
pub fn text_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 11.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

pub fn write_pdf(dir: &Path, name: &str, lines: &[&str]) {
    std::fs::write(dir.join(name), text_pdf(lines)).unwrap();
}
