use indexmap::IndexMap;
use log::{debug, warn};

use crate::model::{
    DataObject, Dataset, ImageData, MultiBlock, PolyData, RectilinearGrid, Table, TypedArray,
    UnstructuredGrid,
};
use crate::schema::{
    ArrayDescriptor, BlockEntry, CellsNode, DatasetNode, ImageDataNode, MultiBlockNode,
    PolyDataNode, RectilinearGridNode, TableNode, UnstructuredGridNode, LINES_ARRAY_NAME,
    POINTS_ARRAY_NAME, POLYS_ARRAY_NAME, STRIPS_ARRAY_NAME, VERTS_ARRAY_NAME,
};

use super::{DatasetSerializer, SerializeError};

impl DatasetSerializer<'_> {
    /// Serialize a dataset of any supported kind
    pub fn serialize_dataset(&mut self, dataset: &Dataset) -> Result<DatasetNode, SerializeError> {
        debug!("Serializing {}", dataset.kind());
        let node = match dataset {
            Dataset::PolyData(mesh) => DatasetNode::PolyData(self.serialize_poly_data(mesh)?),
            Dataset::UnstructuredGrid(grid) => {
                DatasetNode::UnstructuredGrid(self.serialize_unstructured_grid(grid)?)
            }
            Dataset::ImageData(image) => DatasetNode::ImageData(self.serialize_image_data(image)?),
            Dataset::RectilinearGrid(grid) => {
                DatasetNode::RectilinearGrid(self.serialize_rectilinear_grid(grid)?)
            }
            Dataset::Table(table) => DatasetNode::Table(self.serialize_table(table)?),
            Dataset::MultiBlock(composite) => {
                DatasetNode::MultiBlock(self.serialize_multi_block(composite)?)
            }
        };
        Ok(node)
    }

    /// Serialize one composite child; unsupported kinds become their kind
    /// name so the composite still lists them
    pub fn serialize_block(&mut self, object: &DataObject) -> Result<BlockEntry, SerializeError> {
        match object {
            DataObject::Dataset(dataset) => {
                Ok(BlockEntry::Dataset(self.serialize_dataset(dataset)?))
            }
            DataObject::Unsupported(kind) => {
                warn!("{} is not supported, writing placeholder", kind);
                Ok(BlockEntry::Unsupported(kind.clone()))
            }
        }
    }

    fn serialize_poly_data(&mut self, mesh: &PolyData) -> Result<PolyDataNode, SerializeError> {
        let points = self.serialize_data_array(&mesh.points, Some(POINTS_ARRAY_NAME))?;
        let cells = CellsNode {
            verts: self.serialize_topology(mesh.verts.as_ref(), VERTS_ARRAY_NAME)?,
            lines: self.serialize_topology(mesh.lines.as_ref(), LINES_ARRAY_NAME)?,
            polys: self.serialize_topology(mesh.polys.as_ref(), POLYS_ARRAY_NAME)?,
            strips: self.serialize_topology(mesh.strips.as_ref(), STRIPS_ARRAY_NAME)?,
        };
        let attributes = self.serialize_attributes(&mesh.attributes)?;

        Ok(PolyDataNode {
            points,
            cells,
            attributes,
        })
    }

    fn serialize_topology(
        &mut self,
        connectivity: Option<&TypedArray>,
        name: &str,
    ) -> Result<Option<ArrayDescriptor>, SerializeError> {
        connectivity
            .map(|array| self.serialize_data_array(array, Some(name)))
            .transpose()
    }

    fn serialize_unstructured_grid(
        &mut self,
        grid: &UnstructuredGrid,
    ) -> Result<UnstructuredGridNode, SerializeError> {
        Ok(UnstructuredGridNode {
            points: self.serialize_data_array(&grid.points, Some(POINTS_ARRAY_NAME))?,
            cells: self.serialize_data_array(&grid.cells, None)?,
            cell_types: self.serialize_data_array(&grid.cell_types, None)?,
            attributes: self.serialize_attributes(&grid.attributes)?,
        })
    }

    fn serialize_image_data(&mut self, image: &ImageData) -> Result<ImageDataNode, SerializeError> {
        Ok(ImageDataNode {
            origin: image.origin,
            spacing: image.spacing,
            dimensions: image.dimensions,
            attributes: self.serialize_attributes(&image.attributes)?,
        })
    }

    fn serialize_rectilinear_grid(
        &mut self,
        grid: &RectilinearGrid,
    ) -> Result<RectilinearGridNode, SerializeError> {
        Ok(RectilinearGridNode {
            dimensions: grid.dimensions,
            x_coordinates: self.serialize_data_array(&grid.x_coordinates, None)?,
            y_coordinates: self.serialize_data_array(&grid.y_coordinates, None)?,
            z_coordinates: self.serialize_data_array(&grid.z_coordinates, None)?,
            attributes: self.serialize_attributes(&grid.attributes)?,
        })
    }

    fn serialize_table(&mut self, table: &Table) -> Result<TableNode, SerializeError> {
        Ok(TableNode {
            columns: self.serialize_arrays(&table.columns)?,
        })
    }

    fn serialize_multi_block(
        &mut self,
        composite: &MultiBlock,
    ) -> Result<MultiBlockNode, SerializeError> {
        let mut blocks = IndexMap::with_capacity(composite.blocks.len());
        for block in &composite.blocks {
            let Some(data) = &block.data else {
                debug!("Block '{}' has no dataset, skipping", block.name);
                continue;
            };
            let entry = self.serialize_block(data)?;
            blocks.insert(block.name.clone(), entry);
        }
        Ok(MultiBlockNode { blocks })
    }
}
