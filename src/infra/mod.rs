// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Things that touch the disk on behalf of the other layers:
//
//   section_store.rs: SqliteSectionStore
//                      Implements SectionStore on top of a
//                      single SQLite table that is dropped and
//                      recreated on every write. Also reads the
//                      table back for the `sections` command.
//
//   config_file.rs:   AppConfig as JSON
//                      Loads the optional --config file and
//                      writes one out for `config --write`.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// SQLite-backed section storage
pub mod section_store;

/// JSON config file loading and saving
pub mod config_file;
