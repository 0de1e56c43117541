pub mod bulk_scan;
