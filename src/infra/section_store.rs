// ============================================================
// Layer 6 - SQLite Section Store
// ============================================================
// Keeps the sections of the most recently processed document
// in one table:
//
//   document_sections
//     section  TEXT   ← section title
//     content  TEXT   ← section body
//
// Every write is a full replacement: the table is dropped and
// recreated, then filled. Nothing from an earlier document ever
// survives a new run.
//
// The drop, create and inserts run in a single transaction, so
// a failed write leaves the previous document's sections intact.
//
// Rows come back in insertion order (rowid), which is the order
// the segmenter first saw each title.
//
// The `sections` command opens the file read-only and never
// creates it.
//
// Reference: rusqlite crate documentation

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::domain::section::{Section, SectionMap};
use crate::domain::traits::SectionStore;

const TABLE: &str = "document_sections";

pub struct SqliteSectionStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteSectionStore {
    /// Open (or create) the database file at `path`.
    /// The table itself is only created by the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .with_context(|| format!("Cannot open section database '{}'", path.display()))?;
        Ok(Self { conn, path })
    }

    /// Open an existing database file for reading only.
    /// Returns None, and creates nothing, if there is no file.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref().to_path_buf();
        let exists = path
            .try_exists()
            .with_context(|| format!("Cannot check section database '{}'", path.display()))?;
        if !exists {
            return Ok(None);
        }

        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("Cannot open section database '{}'", path.display()))?;
        Ok(Some(Self { conn, path }))
    }

    /// A throwaway store, used by tests
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: PathBuf::from(":memory:") })
    }

    /// Read back everything the last write stored.
    /// Returns None if nothing has been written yet.
    pub fn load_all(&self) -> Result<Option<SectionMap>> {
        let exists: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![TABLE],
                |row| row.get(0),
            )
            .optional()?;

        if exists.is_none() {
            return Ok(None);
        }

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT section, content FROM {TABLE} ORDER BY rowid"))?;

        let sections = stmt
            .query_map([], |row| {
                Ok(Section::new(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                ))
            })?
            .collect::<rusqlite::Result<SectionMap>>()
            .with_context(|| format!("Cannot read sections from '{}'", self.path.display()))?;

        Ok(Some(sections))
    }
}

impl SectionStore for SqliteSectionStore {
    fn replace_all(&mut self, sections: &SectionMap) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {TABLE};
             CREATE TABLE {TABLE} (section TEXT, content TEXT);"
        ))?;

        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO {TABLE} (section, content) VALUES (?1, ?2)"
            ))?;
            for section in sections {
                insert.execute(params![section.title, section.body])?;
                tracing::debug!(
                    "Stored section '{}' ({} chars)",
                    section.title,
                    section.body.len()
                );
            }
        }

        tx.commit()
            .with_context(|| format!("Cannot commit sections to '{}'", self.path.display()))?;

        tracing::info!(
            "Replaced {} with {} sections in '{}'",
            TABLE,
            sections.len(),
            self.path.display()
        );
        Ok(())
    }
}
