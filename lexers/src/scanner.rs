#![deny(warnings)]

/// A character cursor over any `char` source holding at most one
/// pushed-back character. Tokenizers read ahead one char and hand it back
/// when it belongs to the next token.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    pending: Option<char>,
    pos: usize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let next = self.pending.take().or_else(|| self.src.next());
        if next.is_some() {
            self.pos += 1;
        }
        next
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, pending: None, pos: 0 }
    }

    // offset of the char the next call to self.next() returns
    pub fn pos(&self) -> usize {
        self.pos
    }

    // Hand back the last char returned by next. Only one slot is kept,
    // pushing back twice without reading in between is a caller bug.
    pub fn push_back(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "Scanner pushback slot in use");
        self.pending = Some(c);
        self.pos -= 1;
    }

    pub fn peek(&mut self) -> Option<char> {
        let peeked = self.next()?;
        self.push_back(peeked);
        Some(peeked)
    }

    // Advance the scanner only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        let next = self.next()?;
        if any.contains(&next) {
            return Some(next);
        }
        self.push_back(next);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }
}
