use super::ast::{Cell, Reference, Tape};

impl Tape {
    /// Classify every identifier mentioned on this tape and its
    /// descendants.
    ///
    /// Data merges bottom-up: each nested tape is resolved first, then
    /// its unresolved names drift into this scope unless something
    /// here already binds them. A name unresolved at the root stays an
    /// upvalue, deferred to whatever hosts the program. Rebuilds the
    /// reference map from scratch, so re-running after a tree edit is
    /// safe.
    pub fn resolve(&mut self) {
        self.references.clear();
        for (index, param) in self.params.iter().enumerate() {
            self.references
                .insert(param.name.clone(), Reference::Param(index));
        }
        // A tape's own label wins over a same-named parameter.
        for (name, index) in &self.labels_to_index {
            self.references.insert(name.clone(), Reference::Local(*index));
        }
        let Tape {
            cells, references, ..
        } = self;
        for block in cells.iter_mut() {
            if let Some(name) = block.identifier() {
                references
                    .entry(name.to_string())
                    .or_insert(Reference::Upvalue);
            } else if let Cell::Tape(child) = &mut block.cell {
                child.resolve();
                for (name, reference) in &child.references {
                    if *reference == Reference::Upvalue && !references.contains_key(name) {
                        references.insert(name.clone(), Reference::Upvalue);
                    }
                }
            }
        }
    }
}
