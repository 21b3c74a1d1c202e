//! Ordered, append-only list of generating elements.

use crate::bounds::Element;
use crate::error::ActionError;

/// Generators in insertion order; immutable once added. A generator's
/// position doubles as its edge label in the word graph.
#[derive(Clone, Debug, Default)]
pub struct GeneratorSet<E: Element> {
    elements: Vec<E>,
}

impl<E: Element> GeneratorSet<E> {
    /// Creates an empty generator set.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Number of generators.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if no generator has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `element`, returning its label. O(1).
    pub fn push(&mut self, element: E) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// The generator with the given label.
    ///
    /// # Errors
    /// [`ActionError::LabelOutOfRange`] if no such generator exists.
    pub fn get(&self, label: usize) -> Result<&E, ActionError> {
        self.elements
            .get(label)
            .ok_or(ActionError::LabelOutOfRange {
                label,
                out_degree: self.elements.len(),
            })
    }

    /// Generators in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }
}
