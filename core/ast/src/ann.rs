//! The annotation subsystem: per-node side-channel lists of comments,
//! warnings and errors.
//!
//! Annotation values are immutable; the `add_*` / `delete_*` operations are
//! pure functions returning a new handle. Empty strings are stripped on
//! construction, and any annotation whose three lists are all empty interns
//! to [`Ann::EMPTY`]. An annotation is fixed at AST node construction time
//! and cannot be re-attached afterwards.

use crate::arena::{Ann, NodeStore};
use crate::nodes::AnnRecord;

/// Selects one of an annotation's three string lists.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum AnnList {
    Comments,
    Warnings,
    Errors,
}

impl AnnList {
    fn of<'a>(self, record: &'a AnnRecord) -> &'a Vec<String> {
        match self {
            AnnList::Comments => &record.comments,
            AnnList::Warnings => &record.warnings,
            AnnList::Errors => &record.errors,
        }
    }

    fn of_mut(self, record: &mut AnnRecord) -> &mut Vec<String> {
        match self {
            AnnList::Comments => &mut record.comments,
            AnnList::Warnings => &mut record.warnings,
            AnnList::Errors => &mut record.errors,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AnnList::Comments => "comments",
            AnnList::Warnings => "warnings",
            AnnList::Errors => "errors",
        }
    }
}

impl NodeStore {
    /// A new annotation from three string lists. Empty strings are dropped;
    /// if all three lists end up empty, the canonical [`Ann::EMPTY`] handle
    /// is returned instead of a fresh allocation.
    pub fn create_ann(
        &mut self,
        comments: Vec<String>,
        warnings: Vec<String>,
        errors: Vec<String>,
    ) -> Ann {
        let strip = |v: Vec<String>| -> Vec<String> { v.into_iter().filter(|s| !s.is_empty()).collect() };
        self.alloc_ann(AnnRecord {
            comments: strip(comments),
            warnings: strip(warnings),
            errors: strip(errors),
        })
    }

    /// A new annotation with `text` appended to `a`'s comments; `a` is
    /// untouched.
    pub fn add_ann_comments(&mut self, a: Ann, text: &str) -> Ann {
        self.ann_push(a, AnnList::Comments, text)
    }

    /// A new annotation with `text` appended to `a`'s warnings; `a` is
    /// untouched.
    pub fn add_ann_warnings(&mut self, a: Ann, text: &str) -> Ann {
        self.ann_push(a, AnnList::Warnings, text)
    }

    /// A new annotation with `text` appended to `a`'s errors; `a` is
    /// untouched.
    pub fn add_ann_errors(&mut self, a: Ann, text: &str) -> Ann {
        self.ann_push(a, AnnList::Errors, text)
    }

    /// A new annotation with comment `index` removed and later comments
    /// shifted down one position; `a` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete_ann_comments(&mut self, a: Ann, index: usize) -> Ann {
        self.ann_remove(a, AnnList::Comments, index)
    }

    /// A new annotation with warning `index` removed and later warnings
    /// shifted down one position; `a` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete_ann_warnings(&mut self, a: Ann, index: usize) -> Ann {
        self.ann_remove(a, AnnList::Warnings, index)
    }

    /// A new annotation with error `index` removed and later errors shifted
    /// down one position; `a` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete_ann_errors(&mut self, a: Ann, index: usize) -> Ann {
        self.ann_remove(a, AnnList::Errors, index)
    }

    /// Number of comments; 0 for [`Ann::EMPTY`].
    #[must_use]
    pub fn size_of_ann_comments(&self, a: Ann) -> usize {
        self.ann_record(a).comments.len()
    }

    /// Number of warnings; 0 for [`Ann::EMPTY`].
    #[must_use]
    pub fn size_of_ann_warnings(&self, a: Ann) -> usize {
        self.ann_record(a).warnings.len()
    }

    /// Number of errors; 0 for [`Ann::EMPTY`].
    #[must_use]
    pub fn size_of_ann_errors(&self, a: Ann) -> usize {
        self.ann_record(a).errors.len()
    }

    /// The comment at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get_ann_comments(&self, a: Ann, index: usize) -> &str {
        self.ann_get(a, AnnList::Comments, index)
    }

    /// The warning at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get_ann_warnings(&self, a: Ann, index: usize) -> &str {
        self.ann_get(a, AnnList::Warnings, index)
    }

    /// The error at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get_ann_errors(&self, a: Ann, index: usize) -> &str {
        self.ann_get(a, AnnList::Errors, index)
    }

    fn ann_push(&mut self, a: Ann, list: AnnList, text: &str) -> Ann {
        if text.is_empty() {
            // consistent with the stripping rule on construction
            return a;
        }
        let mut record = self.ann_record(a).clone();
        list.of_mut(&mut record).push(text.to_string());
        self.alloc_ann(record)
    }

    fn ann_remove(&mut self, a: Ann, list: AnnList, index: usize) -> Ann {
        let mut record = self.ann_record(a).clone();
        let items = list.of_mut(&mut record);
        assert!(
            index < items.len(),
            "index {index} out of range for annotation {} of {} entries",
            list.label(),
            items.len()
        );
        items.remove(index);
        self.alloc_ann(record)
    }

    fn ann_get(&self, a: Ann, list: AnnList, index: usize) -> &str {
        let items = list.of(self.ann_record(a));
        items.get(index).map_or_else(
            || {
                panic!(
                    "index {index} out of range for annotation {} of {} entries",
                    list.label(),
                    items.len()
                )
            },
            String::as_str,
        )
    }
}
