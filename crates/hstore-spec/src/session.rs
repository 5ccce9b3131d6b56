use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;
use crate::rows::ChoiceRow;
use crate::snapshot::{EditorSnapshot, EditorView};
use crate::validate::{IssueCounts, ValidationReport, validate_rows};

/// Callbacks fired by [`EditorSession`] as rows are edited.
pub trait EditorObserver {
    fn on_change(&mut self, _rows: &[ChoiceRow]) {}
    fn on_missing_count(&mut self, _missing: usize) {}
    fn on_error_count(&mut self, _errors: usize) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EditorObserver for NoopObserver {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("row {index} does not exist (editor has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Owns the current snapshot of one hstore editor and reports changes.
///
/// Issue count callbacks only fire when the count differs from the last
/// one reported.
pub struct EditorSession<O: EditorObserver = NoopObserver> {
    catalog: Catalog,
    snapshot: EditorSnapshot,
    counts: IssueCounts,
    observer: O,
}

impl EditorSession<NoopObserver> {
    pub fn new(catalog: Catalog, rows: Vec<ChoiceRow>) -> Self {
        Self::with_observer(catalog, rows, NoopObserver)
    }
}

impl<O: EditorObserver> EditorSession<O> {
    pub fn with_observer(catalog: Catalog, rows: Vec<ChoiceRow>, observer: O) -> Self {
        let snapshot = EditorSnapshot::new(rows);
        let counts = validate_rows(&catalog, snapshot.rows()).counts();
        Self {
            catalog,
            snapshot,
            counts,
            observer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> &EditorSnapshot {
        &self.snapshot
    }

    pub fn counts(&self) -> IssueCounts {
        self.counts
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn view(&self) -> EditorView {
        self.snapshot.view(&self.catalog)
    }

    pub fn report(&self) -> ValidationReport {
        validate_rows(&self.catalog, self.snapshot.rows())
    }

    pub fn add_row(&mut self) {
        let next = self.snapshot.with_row_added();
        self.commit(next);
    }

    pub fn remove_row(&mut self, index: usize) -> Result<(), EditError> {
        self.ensure_row(index)?;
        let next = self.snapshot.with_row_removed(index);
        self.commit(next);
        Ok(())
    }

    pub fn set_key(&mut self, index: usize, key: impl Into<String>) -> Result<(), EditError> {
        self.ensure_row(index)?;
        let next = self.snapshot.with_key(index, key);
        self.commit(next);
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), EditError> {
        self.ensure_row(index)?;
        let next = self.snapshot.with_value(index, value);
        self.commit(next);
        Ok(())
    }

    fn ensure_row(&self, index: usize) -> Result<(), EditError> {
        if index < self.snapshot.len() {
            Ok(())
        } else {
            Err(EditError::RowOutOfRange {
                index,
                len: self.snapshot.len(),
            })
        }
    }

    fn commit(&mut self, next: EditorSnapshot) {
        self.snapshot = next;
        self.observer.on_change(self.snapshot.rows());

        let counts = validate_rows(&self.catalog, self.snapshot.rows()).counts();
        debug!(
            rows = self.snapshot.len(),
            missing = counts.missing,
            errors = counts.errors,
            "editor rows changed"
        );
        if counts.missing != self.counts.missing {
            self.observer.on_missing_count(counts.missing);
        }
        if counts.errors != self.counts.errors {
            self.observer.on_error_count(counts.errors);
        }
        self.counts = counts;
    }
}
