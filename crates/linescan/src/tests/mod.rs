mod chunk_helpers;
mod property_partition;
