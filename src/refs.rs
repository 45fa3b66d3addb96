use crate::font::FontStyle;
use pdf_writer::Ref;
use std::collections::HashMap;

/// Every indirect object the writer emits, so later objects can point back at earlier ones
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(FontStyle),
    CidFont(FontStyle),
    ToUnicode(FontStyle),
    FontDescriptor(FontStyle),
    FontData(FontStyle),
}

pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    fn new_id(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Allocate a fresh object id for `ref_type`, replacing any previous one
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.new_id();
        self.refs.insert(ref_type, id);
        id
    }

    /// The id for `ref_type`, allocating one on first use
    pub fn get_or_gen(&mut self, ref_type: RefType) -> Ref {
        match self.get(ref_type) {
            Some(id) => id,
            None => self.gen(ref_type),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_unique_and_stable() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let tree = refs.gen(RefType::PageTree);
        assert_ne!(catalog, tree);
        assert_eq!(refs.get(RefType::Catalog), Some(catalog));

        let bold = refs.get_or_gen(RefType::Font(FontStyle::Bold));
        assert_eq!(refs.get_or_gen(RefType::Font(FontStyle::Bold)), bold);
        assert_eq!(refs.get(RefType::Font(FontStyle::Regular)), None);
    }
}
