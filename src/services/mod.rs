// Pouch core services
// Pure and leaf logic: filtering, tag aggregation, CSV parsing, import merge.

pub mod csv_import;
pub mod import_reducer;
pub mod query_engine;
pub mod tag_aggregator;
