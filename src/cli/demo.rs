use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use dsindex::converter::{ConverterConfig, DatasetConverter};
use dsindex::model::{
    ArrayValues, AttributeSet, Block, DataObject, ImageData, MultiBlock, PolyData,
    RectilinearGrid, StringArray, Table, TypedArray, UnstructuredGrid,
};

/// Half-width of the wavelet extent along each axis
const WAVELET_HALF_EXTENT: i64 = 10;

/// VTK cell type code of a tetrahedron
const VTK_TETRA: u8 = 10;

/// Convert the sample datasets into `output`
pub fn run(output: PathBuf, config: ConverterConfig, name_prefix: &str) -> Result<()> {
    info!("dsindex - Sample Dataset Conversion");
    info!("===================================");
    info!("Output directory: {}", output.display());
    info!("Compression: {:?}", config.compression);
    info!("Byte order: {:?}", config.byte_order);

    let converter = DatasetConverter::new(config);
    let cube = sample_cube();

    let samples: Vec<(&str, DataObject)> = vec![
        ("Wavelet.vti", wavelet().into()),
        ("table", point_table(&cube).into()),
        ("cube.vtp", cube.clone().into()),
        ("RectGrid.vtr", rectilinear_grid().into()),
        ("composite.vtm", composite(cube).into()),
    ];

    for (name, object) in &samples {
        let name = format!("{}{}", name_prefix, name);
        let stats = converter
            .convert_named(&name, object, &output)
            .with_context(|| format!("Failed to convert {}", name))?;
        println!("{}", stats);
    }

    info!("Conversion complete!");
    Ok(())
}

/// The analytic "Wavelet" volume over a 21^3 grid centered on the origin.
///
/// Each point carries `RTData`, a Gaussian peak modulated by one sine per
/// axis, computed on coordinates normalized by the extent width.
pub fn wavelet() -> ImageData {
    const MAXIMUM: f64 = 255.0;
    const STANDARD_DEVIATION: f64 = 0.5;
    const FREQUENCY: [f64; 3] = [60.0, 30.0, 40.0];
    const MAGNITUDE: [f64; 3] = [10.0, 18.0, 5.0];

    let extent = -WAVELET_HALF_EXTENT..=WAVELET_HALF_EXTENT;
    let width = (2 * WAVELET_HALF_EXTENT) as f64;
    let side = (2 * WAVELET_HALF_EXTENT + 1) as usize;
    let falloff = 1.0 / (2.0 * STANDARD_DEVIATION * STANDARD_DEVIATION);

    let mut values = Vec::with_capacity(side * side * side);
    for k in extent.clone() {
        let z = -(k as f64) / width;
        for j in extent.clone() {
            let y = -(j as f64) / width;
            for i in extent.clone() {
                let x = -(i as f64) / width;
                let sum = x * x + y * y + z * z;
                let value = MAXIMUM * (-sum * falloff).exp()
                    + MAGNITUDE[0] * (FREQUENCY[0] * x).sin()
                    + MAGNITUDE[1] * (FREQUENCY[1] * y).sin()
                    + MAGNITUDE[2] * (FREQUENCY[2] * z).cos();
                values.push(value as f32);
            }
        }
    }

    let origin = -WAVELET_HALF_EXTENT as f64;
    ImageData {
        origin: [origin; 3],
        spacing: [1.0; 3],
        dimensions: [side as i64; 3],
        attributes: AttributeSet::new().with_point_array(TypedArray::new("RTData", 1, values)),
    }
}

/// Unit cube with per-point, per-cell and field attributes
pub fn sample_cube() -> PolyData {
    let corners: Vec<[f32; 3]> = (0..8u8)
        .map(|c| [(c & 1) as f32, ((c >> 1) & 1) as f32, ((c >> 2) & 1) as f32])
        .collect();

    let faces: [[i64; 4]; 6] = [
        [0, 2, 3, 1],
        [4, 5, 7, 6],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 4, 6, 2],
        [1, 3, 7, 5],
    ];
    let connectivity: Vec<i64> = faces
        .iter()
        .flat_map(|face| std::iter::once(face.len() as i64).chain(face.iter().copied()))
        .collect();

    let normals: Vec<f32> = corners
        .iter()
        .flat_map(|p| {
            let d = p.map(|v| v - 0.5);
            let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
            d.map(|v| v / len)
        })
        .collect();
    let elevation: Vec<f32> = corners.iter().map(|p| p[2]).collect();

    let mut cube = PolyData::new(TypedArray::unnamed(
        3,
        corners.iter().flatten().copied().collect::<Vec<f32>>(),
    ));
    cube.polys = Some(TypedArray::unnamed(1, ArrayValues::IdType(connectivity)));
    cube.attributes = AttributeSet::new()
        .with_point_array(
            TypedArray::new("Normals", 3, normals).with_component_names(["X", "Y", "Z"]),
        )
        .with_point_array(TypedArray::new("Elevation", 1, elevation))
        .with_cell_array(TypedArray::new("FaceId", 1, (0..6).collect::<Vec<i32>>()))
        .with_field_array(StringArray::new("Source", ["dsindex sample"]));
    cube
}

/// Table whose columns are the point arrays of `mesh`
pub fn point_table(mesh: &PolyData) -> Table {
    mesh.attributes
        .point_data
        .iter()
        .cloned()
        .fold(Table::new(), Table::with_column)
}

/// Non-uniform 5x3x2 grid with a distance field
pub fn rectilinear_grid() -> RectilinearGrid {
    let x = vec![0.0f64, 1.0, 2.0, 4.0, 8.0];
    let y = vec![0.0f64, 0.5, 1.0];
    let z = vec![0.0f64, 1.0];

    let mut distance = Vec::with_capacity(x.len() * y.len() * z.len());
    for zk in &z {
        for yj in &y {
            for xi in &x {
                distance.push((xi * xi + yj * yj + zk * zk).sqrt());
            }
        }
    }

    RectilinearGrid {
        dimensions: [x.len() as i64, y.len() as i64, z.len() as i64],
        x_coordinates: TypedArray::new("XCoordinates", 1, x),
        y_coordinates: TypedArray::new("YCoordinates", 1, y),
        z_coordinates: TypedArray::new("ZCoordinates", 1, z),
        attributes: AttributeSet::new()
            .with_point_array(TypedArray::new("Distance", 1, distance)),
    }
}

/// Two tetrahedra sharing a face
pub fn tetrahedra() -> UnstructuredGrid {
    let points = vec![
        0.0f32, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, //
        1.0, 1.0, 1.0,
    ];

    UnstructuredGrid {
        points: TypedArray::unnamed(3, points),
        cells: TypedArray::new(
            "connectivity",
            1,
            ArrayValues::IdType(vec![4, 0, 1, 2, 3, 4, 1, 2, 3, 4]),
        ),
        cell_types: TypedArray::new("types", 1, vec![VTK_TETRA; 2]),
        attributes: AttributeSet::new()
            .with_cell_array(TypedArray::new("Volume", 1, vec![1.0f64 / 6.0, 1.0 / 3.0])),
    }
}

/// Composite mixing supported kinds, an unsupported kind, an empty block and
/// a nested composite
pub fn composite(cube: PolyData) -> MultiBlock {
    let nested = MultiBlock::new().with_block(Block::new("table", point_table(&cube)));

    MultiBlock::new()
        .with_block(Block::new("cube", cube))
        .with_block(Block::new("tetrahedra", tetrahedra()))
        .with_block(Block::new(
            "octree",
            DataObject::Unsupported("HyperTreeGrid".to_string()),
        ))
        .with_block(Block::empty("missing"))
        .with_block(Block::new("nested", nested))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsindex::model::{Array, ScalarType};

    #[test]
    fn test_wavelet_shape() {
        let image = wavelet();
        assert_eq!(image.dimensions, [21, 21, 21]);
        assert_eq!(image.origin, [-10.0; 3]);

        let Array::Numeric(rt) = &image.attributes.point_data[0] else {
            panic!("expected numeric RTData");
        };
        assert_eq!(rt.name.as_deref(), Some("RTData"));
        assert_eq!(rt.scalar_type(), ScalarType::Float32);
        assert_eq!(rt.tuple_count(), 21 * 21 * 21);

        // Peak at the center of the extent
        let center = (10 * 21 + 10) * 21 + 10;
        let value = rt.values.value_f64(center).unwrap();
        assert!((value - (255.0 + 5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_cube_topology() {
        let cube = sample_cube();
        assert_eq!(cube.points.tuple_count(), 8);
        let polys = cube.polys.as_ref().unwrap();
        assert_eq!(polys.values.len(), 6 * 5);
        assert_eq!(cube.attributes.len(), 4);
    }

    #[test]
    fn test_point_table_columns() {
        let table = point_table(&sample_cube());
        let names: Vec<_> = table.columns.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec![Some("Normals"), Some("Elevation")]);
    }

    #[test]
    fn test_rectilinear_grid_sizes() {
        let grid = rectilinear_grid();
        let Array::Numeric(distance) = &grid.attributes.point_data[0] else {
            panic!("expected numeric Distance");
        };
        assert_eq!(distance.tuple_count(), 5 * 3 * 2);
    }

    #[test]
    fn test_run_writes_every_sample() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path().to_path_buf(), ConverterConfig::fast(), "demo_").unwrap();

        for name in ["Wavelet.vti", "table", "cube.vtp", "RectGrid.vtr", "composite.vtm"] {
            let index = dir.path().join(format!("demo_{}", name)).join("index.json");
            assert!(index.is_file(), "missing {}", index.display());
        }
    }
}
