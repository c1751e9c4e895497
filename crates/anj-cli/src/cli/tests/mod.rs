//! CLI parse tests and end-to-end runs against temp files.
