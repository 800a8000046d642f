use super::*;
use crate::model::{
    ArrayValues, AttributeSet, Block, Dataset, DatasetKind, MultiBlock, PolyData, Table,
    TypedArray,
};
use crate::schema::ByteOrder;
use serde_json::Value;
use tempfile::tempdir;

fn read_index(dir: &Path) -> Value {
    let text = fs::read_to_string(dir.join(INDEX_FILE_NAME)).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn data_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.join(DATA_DIR_NAME))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn sample_table() -> DataObject {
    Table::new()
        .with_column(TypedArray::new("x", 1, vec![0.5f32, 1.5, 2.5]))
        .with_column(TypedArray::new("y", 1, vec![1i32, 2, 3]))
        .into()
}

fn sample_mesh() -> PolyData {
    let mut mesh = PolyData::new(TypedArray::unnamed(
        3,
        vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ));
    mesh.polys = Some(TypedArray::unnamed(1, ArrayValues::IdType(vec![3, 0, 1, 2])));
    mesh.attributes = AttributeSet::new().with_point_array(TypedArray::new(
        "temperature",
        1,
        vec![10.0f64, 20.0, 30.0],
    ));
    mesh
}

#[test]
fn test_name_from_source_basename() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::default();
    let stats = converter
        .convert("/some/where/points.csv", &sample_table(), dir.path(), None)
        .unwrap();

    assert_eq!(stats.name, "points.csv");
    assert_eq!(stats.output_dir, dir.path().join("points.csv"));
    assert_eq!(stats.root_kind, Some(DatasetKind::Table));
    let index = read_index(&stats.output_dir);
    assert_eq!(index["metadata"]["name"], "points.csv");
    assert_eq!(index["type"], "Table");
}

#[test]
fn test_rename_overrides_basename() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::default();
    let stats = converter
        .convert("points.csv", &sample_table(), dir.path(), Some("renamed"))
        .unwrap();

    assert!(dir.path().join("renamed").join(INDEX_FILE_NAME).is_file());
    assert_eq!(read_index(&stats.output_dir)["metadata"]["name"], "renamed");
}

#[test]
fn test_invalid_names() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::default();

    for name in ["", "..", "a/b"] {
        let result = converter.convert_named(name, &sample_table(), dir.path());
        assert!(
            matches!(result, Err(ConvertError::InvalidName(_))),
            "accepted {:?}",
            name
        );
    }
    let result = converter.convert("/", &sample_table(), dir.path(), None);
    assert!(matches!(result, Err(ConvertError::InvalidName(_))));
}

#[test]
fn test_compressed_run_leaves_only_gz_blobs() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::new(ConverterConfig::default());
    let stats = converter
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();

    let files = data_files(&stats.output_dir);
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.ends_with(".gz") && f.len() == 32 + 3));
    assert_eq!(stats.blobs.blobs_written, 3);
}

#[test]
fn test_uncompressed_run_uses_bare_hashes() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::new(ConverterConfig::uncompressed());
    let stats = converter
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();

    let index = read_index(&stats.output_dir);
    let id = index["PolyData"]["Points"]["ref"]["id"].as_str().unwrap();
    assert!(data_files(&stats.output_dir).contains(&id.to_string()));
    assert_eq!(index["PolyData"]["Points"]["ref"]["basepath"], DATA_DIR_NAME);
}

#[test]
fn test_byte_order_recorded_per_run() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::new(ConverterConfig {
        byte_order: ByteOrder::BigEndian,
        ..ConverterConfig::uncompressed()
    });
    let stats = converter
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();

    let index = read_index(&stats.output_dir);
    let polys = &index["PolyData"]["Cells"]["Polys"];
    assert_eq!(polys["ref"]["encode"], "BigEndian");
    assert_eq!(
        index["PolyData"]["PointData"]["temperature"]["ref"]["encode"],
        "BigEndian"
    );

    let id = polys["ref"]["id"].as_str().unwrap();
    let bytes = fs::read(stats.output_dir.join(DATA_DIR_NAME).join(id)).unwrap();
    assert_eq!(&bytes[..4], &[0, 0, 0, 3]);
}

#[test]
fn test_unsupported_root_writes_metadata_only() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::default();
    let object = DataObject::Unsupported("HyperTreeGrid".to_string());
    let stats = converter.convert_named("tree", &object, dir.path()).unwrap();

    assert_eq!(stats.root_kind, None);
    assert_eq!(
        read_index(&stats.output_dir),
        serde_json::json!({ "metadata": { "name": "tree" } })
    );
    assert!(data_files(&stats.output_dir).is_empty());
}

#[test]
fn test_reconversion_reuses_blobs() {
    let dir = tempdir().unwrap();
    let converter = DatasetConverter::default();
    let first = converter
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();
    let before = fs::read(first.output_dir.join(INDEX_FILE_NAME)).unwrap();

    let second = converter
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();
    let after = fs::read(second.output_dir.join(INDEX_FILE_NAME)).unwrap();

    assert_eq!(before, after);
    assert_eq!(second.blobs.blobs_written, 0);
    assert_eq!(second.blobs.blobs_reused, 3);
}

#[test]
fn test_unsupported_array_aborts_conversion() {
    let dir = tempdir().unwrap();
    let table: DataObject = Table::new()
        .with_column(TypedArray::new("wide", 1, vec![1u64, 2]))
        .into();

    let converter = DatasetConverter::default();
    let result = converter.convert_named("table", &table, dir.path());
    assert!(matches!(result, Err(ConvertError::SerializeError(_))));
    assert!(!dir.path().join("table").join(INDEX_FILE_NAME).exists());
}

#[test]
fn test_skip_policy_completes_conversion() {
    let dir = tempdir().unwrap();
    let table: DataObject = Table::new()
        .with_column(TypedArray::new("wide", 1, vec![1u64, 2]))
        .with_column(TypedArray::new("narrow", 1, vec![1i32, 2]))
        .into();

    let converter = DatasetConverter::new(ConverterConfig {
        unsupported_arrays: UnsupportedArrayPolicy::Skip,
        ..Default::default()
    });
    let stats = converter.convert_named("table", &table, dir.path()).unwrap();

    assert_eq!(stats.arrays.arrays_skipped, 1);
    let columns = read_index(&stats.output_dir)["Table"]["Columns"].clone();
    let keys: Vec<_> = columns.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["narrow"]);
}

#[test]
fn test_multi_block_document() {
    let dir = tempdir().unwrap();
    let composite = MultiBlock::new()
        .with_block(Block::new("mesh", sample_mesh()))
        .with_block(Block::new("octree", DataObject::Unsupported("Octree".into())))
        .with_block(Block::new("table", Dataset::Table(Table::new())));

    let converter = DatasetConverter::default();
    let stats = converter
        .convert_named("composite", &composite.into(), dir.path())
        .unwrap();

    assert_eq!(stats.root_kind, Some(DatasetKind::MultiBlock));
    let index = read_index(&stats.output_dir);
    assert_eq!(index["type"], "MultiBlock");
    assert_eq!(index["MultiBlock"]["Blocks"]["octree"], "Octree");
    assert_eq!(index["MultiBlock"]["Blocks"]["mesh"]["type"], "PolyData");
}

#[test]
fn test_stats_display() {
    let dir = tempdir().unwrap();
    let stats = DatasetConverter::default()
        .convert_named("points", &sample_table(), dir.path())
        .unwrap();
    let text = stats.to_string();
    assert!(text.starts_with("points (Table): 2 arrays, 0 skipped"));
    assert!(stats.compression_ratio() > 0.0);
}

#[test]
fn test_config_presets() {
    assert_eq!(ConverterConfig::default().compression, CompressionType::Gzip(6));
    assert_eq!(ConverterConfig::default().byte_order, ByteOrder::native());
    assert_eq!(
        ConverterConfig::default().unsupported_arrays,
        UnsupportedArrayPolicy::Abort
    );
    assert_eq!(
        ConverterConfig::uncompressed().compression,
        CompressionType::Uncompressed
    );
    assert_eq!(ConverterConfig::fast().compression, CompressionType::Gzip(1));
    assert_eq!(
        ConverterConfig::max_compression().compression,
        CompressionType::Gzip(9)
    );
}

#[test]
fn test_compressed_rerun_over_uncompressed_output() {
    let dir = tempdir().unwrap();
    DatasetConverter::new(ConverterConfig::uncompressed())
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();
    let stats = DatasetConverter::new(ConverterConfig::default())
        .convert_named("mesh", &sample_mesh().into(), dir.path())
        .unwrap();

    let files = data_files(&stats.output_dir);
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.ends_with(".gz")), "{:?}", files);
}
