//! Draft/committed filter state.
//!
//! Every screen keeps two copies of its filter set: the *draft* the form
//! edits freely, and the *committed* copy fetches use. The committed copy is
//! only ever assigned from the draft - wholesale on apply/clear, or per-field
//! for the reactive search field - never mutated by fetch results.

/// Two parallel filter sets: a freely edited draft and the committed copy
/// used for fetching.
#[derive(Debug, Clone, Default)]
pub struct FilterState<F> {
    draft: F,
    committed: F,
}

impl<F: Clone + PartialEq + Default> FilterState<F> {
    /// A filter state with both copies at their defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: F::default(),
            committed: F::default(),
        }
    }

    /// The in-progress form values. Editing the draft has no fetch side
    /// effect.
    #[must_use]
    pub const fn draft(&self) -> &F {
        &self.draft
    }

    /// Mutable access to the draft for form edits.
    pub const fn draft_mut(&mut self) -> &mut F {
        &mut self.draft
    }

    /// The last-applied filter set fetches run against.
    #[must_use]
    pub const fn committed(&self) -> &F {
        &self.committed
    }

    /// Copy the entire draft into the committed set (explicit "apply").
    pub fn apply(&mut self) {
        self.committed = self.draft.clone();
    }

    /// Reset both draft and committed to defaults (explicit "clear").
    pub fn clear(&mut self) {
        self.draft = F::default();
        self.committed = F::default();
    }

    /// Commit a single reactive field.
    ///
    /// The mutation is applied to both copies so the draft stays in sync
    /// with what the fetch will use, without committing the rest of the
    /// draft.
    pub fn commit_field(&mut self, mutate: impl Fn(&mut F)) {
        mutate(&mut self.draft);
        mutate(&mut self.committed);
    }

    /// Whether the draft has edits not yet applied.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }
}
