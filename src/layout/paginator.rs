use crate::layout::Layout;
use crate::page::{DrawInstruction, Page};
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::{Arena, Id};

/// Owns the vertical cursor and the pages created so far. Every draw goes through
/// [Paginator::draw], which starts a new page first whenever the cursor has reached the
/// bottom of the content area, so nothing is ever drawn below it.
pub struct Paginator {
    pages: Arena<Page>,
    page_order: Vec<Id<Page>>,
    current: Id<Page>,
    y: Pt,
    top: Pt,
    bottom: Pt,
}

impl Paginator {
    /// Start laying out on page 1 with the cursor at `top`
    pub fn new(top: Pt, bottom: Pt) -> Paginator {
        let mut pages = Arena::new();
        let current = pages.alloc(Page::new(1));
        Paginator {
            pages,
            page_order: vec![current],
            current,
            y: top,
            top,
            bottom,
        }
    }

    /// Move the cursor down the page
    pub fn advance(&mut self, dy: Pt) {
        self.y += dy;
    }

    /// Start a new page if the cursor has run off the bottom of the current one.
    /// Returns whether a page break happened.
    pub fn ensure_room(&mut self) -> bool {
        if self.y >= self.bottom {
            self.break_page();
            true
        } else {
            false
        }
    }

    fn break_page(&mut self) {
        let number = self.page_order.len() + 1;
        log::debug!(
            "page break at y = {} (bottom {}), starting page {}",
            self.y,
            self.bottom,
            number
        );
        self.current = self.pages.alloc(Page::new(number));
        self.page_order.push(self.current);
        self.y = self.top;
    }

    /// Draw at the cursor, breaking the page first if needed. `make` receives the
    /// baseline the instruction must sit on.
    pub fn draw<F>(&mut self, make: F)
    where
        F: FnOnce(Pt) -> DrawInstruction,
    {
        self.ensure_room();
        let instruction = make(self.y);
        self.pages[self.current].add_instruction(instruction);
    }

    /// Finish layout, handing the pages over in creation order
    pub fn finish(self, page_size: PageSize) -> Layout {
        Layout {
            page_size,
            pages: self.pages,
            page_order: self.page_order,
        }
    }
}
