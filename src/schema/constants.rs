/// File name of the index document inside a dataset directory
pub const INDEX_FILE_NAME: &str = "index.json";

/// Name of the blob directory inside a dataset directory
pub const DATA_DIR_NAME: &str = "data";

/// File extension appended to compressed blobs
pub const GZIP_EXTENSION: &str = "gz";

/// Reserved name given to point coordinate arrays
pub const POINTS_ARRAY_NAME: &str = "_points";

/// Reserved name given to PolyData vertex connectivity
pub const VERTS_ARRAY_NAME: &str = "_verts";

/// Reserved name given to PolyData line connectivity
pub const LINES_ARRAY_NAME: &str = "_lines";

/// Reserved name given to PolyData polygon connectivity
pub const POLYS_ARRAY_NAME: &str = "_polys";

/// Reserved name given to PolyData triangle-strip connectivity
pub const STRIPS_ARRAY_NAME: &str = "_strips";
