use super::*;
use serde_json::json;

fn sample_descriptor(name: &str) -> ArrayDescriptor {
    ArrayDescriptor {
        blob: BlobRef {
            id: "0123456789abcdef0123456789abcdef".to_string(),
            encode: ByteOrder::LittleEndian,
            basepath: DATA_DIR_NAME.to_string(),
        },
        array_type: ArrayType::DataArray,
        name: Some(name.to_string()),
        data_type: DataType::Numeric(OutputKind::Float32),
        tuple: 1,
        size: 4,
        ranges: Some(vec![ComponentRange {
            min: 0.0,
            max: 3.0,
            component: None,
        }]),
    }
}

#[test]
fn test_descriptor_serialization() {
    let value = serde_json::to_value(sample_descriptor("pressure")).unwrap();
    assert_eq!(
        value,
        json!({
            "ref": {
                "id": "0123456789abcdef0123456789abcdef",
                "encode": "LittleEndian",
                "basepath": "data"
            },
            "type": "DataArray",
            "name": "pressure",
            "dataType": "Float32Array",
            "tuple": 1,
            "size": 4,
            "ranges": [{ "min": 0.0, "max": 3.0, "component": null }]
        })
    );
}

#[test]
fn test_string_descriptor_has_no_ranges() {
    let mut descriptor = sample_descriptor("labels");
    descriptor.array_type = ArrayType::StringArray;
    descriptor.data_type = DataType::Json;
    descriptor.ranges = None;

    let value = serde_json::to_value(descriptor).unwrap();
    assert_eq!(value["type"], "StringArray");
    assert_eq!(value["dataType"], "JSON");
    assert!(value.get("ranges").is_none());
}

#[test]
fn test_output_kind_names_and_sizes() {
    assert_eq!(OutputKind::Uint8.as_str(), "Uint8Array");
    assert_eq!(OutputKind::Int16.as_str(), "Int16Array");
    assert_eq!(OutputKind::Float64.to_string(), "Float64Array");
    assert_eq!(OutputKind::Int8.byte_size(), 1);
    assert_eq!(OutputKind::Uint16.byte_size(), 2);
    assert_eq!(OutputKind::Uint32.byte_size(), 4);
    assert_eq!(OutputKind::Float64.byte_size(), 8);
}

#[test]
fn test_byte_order_matches_host() {
    let expected = if cfg!(target_endian = "big") {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    };
    assert_eq!(ByteOrder::native(), expected);
    assert_eq!(ByteOrder::default(), expected);
}

#[test]
fn test_metadata_only_document() {
    let value = serde_json::to_value(IndexDocument::new("unsupported.vtu")).unwrap();
    assert_eq!(value, json!({ "metadata": { "name": "unsupported.vtu" } }));
}

#[test]
fn test_document_flattens_kind_tag_and_payload() {
    let mut document = IndexDocument::new("wavelet.vti");
    document.dataset = Some(DatasetNode::ImageData(ImageDataNode {
        origin: [0.0, 0.0, 0.0],
        spacing: [1.0, 1.0, 1.0],
        dimensions: [2, 3, 4],
        attributes: AttributeNodes::default(),
    }));

    let value = serde_json::to_value(document).unwrap();
    assert_eq!(
        value,
        json!({
            "metadata": { "name": "wavelet.vti" },
            "type": "ImageData",
            "ImageData": {
                "Origin": [0.0, 0.0, 0.0],
                "Spacing": [1.0, 1.0, 1.0],
                "Dimensions": [2, 3, 4],
                "PointData": {},
                "CellData": {},
                "FieldData": {}
            }
        })
    );
}

#[test]
fn test_poly_data_omits_missing_topology() {
    let node = PolyDataNode {
        points: sample_descriptor(POINTS_ARRAY_NAME),
        cells: CellsNode {
            polys: Some(sample_descriptor(POLYS_ARRAY_NAME)),
            ..Default::default()
        },
        attributes: AttributeNodes::default(),
    };

    let value = serde_json::to_value(DatasetNode::PolyData(node)).unwrap();
    let cells = value["PolyData"]["Cells"].as_object().unwrap();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells["Polys"]["name"], "_polys");
    assert_eq!(value["PolyData"]["Points"]["name"], "_points");
}

#[test]
fn test_rectilinear_coordinate_keys() {
    let node = RectilinearGridNode {
        dimensions: [2, 1, 1],
        x_coordinates: sample_descriptor("x"),
        y_coordinates: sample_descriptor("y"),
        z_coordinates: sample_descriptor("z"),
        attributes: AttributeNodes::default(),
    };

    let value = serde_json::to_value(DatasetNode::RectilinearGrid(node)).unwrap();
    let payload = &value["RectilinearGrid"];
    assert_eq!(payload["XCoordinates"]["name"], "x");
    assert_eq!(payload["YCoordinates"]["name"], "y");
    assert_eq!(payload["ZCoordinates"]["name"], "z");
}

#[test]
fn test_blocks_preserve_insertion_order() {
    let mut blocks = MultiBlockNode::default();
    blocks.blocks.insert(
        "first".to_string(),
        BlockEntry::Dataset(DatasetNode::Table(TableNode::default())),
    );
    blocks
        .blocks
        .insert("second".to_string(), BlockEntry::Unsupported("Octree".to_string()));

    let text = serde_json::to_string(&DatasetNode::MultiBlock(blocks)).unwrap();
    let first = text.find("\"first\"").unwrap();
    let second = text.find("\"second\"").unwrap();
    assert!(first < second);
    assert!(text.contains("\"second\":\"Octree\""));
}

#[test]
fn test_array_map_duplicate_key_keeps_position() {
    let mut map = ArrayMap::new();
    map.insert("a".to_string(), sample_descriptor("a"));
    map.insert("b".to_string(), sample_descriptor("b"));

    let mut replacement = sample_descriptor("a");
    replacement.size = 99;
    map.insert(replacement.key(), replacement);

    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map["a"].size, 99);
}
