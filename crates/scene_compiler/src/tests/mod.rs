//! End-to-end tests across parser, validator and compilers

mod end_to_end;
mod scene_files;
