/// Hands out `default0`, `default1`, ... for styles a script left unnamed.
///
/// Each document owns its own generator, so numbering starts over per
/// document and needs no synchronisation.
#[derive(Debug, Clone, Default)]
pub struct StyleIdGenerator {
    next: u64,
}

impl StyleIdGenerator {
    pub fn new() -> StyleIdGenerator {
        StyleIdGenerator::default()
    }

    /// Returns the next identifier. Never returns the same one twice.
    pub fn next_id(&mut self) -> String {
        let id = format!("default{}", self.next);
        self.next += 1;
        id
    }
}
