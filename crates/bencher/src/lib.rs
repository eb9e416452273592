/// A fire-once chain shape to benchmark: the bound condition and how many
/// `run` / `otherwise` links follow it.
#[derive(Debug, Copy, Clone)]
pub struct ChainCase {
    name: &'static str,
    condition: bool,
    links: usize,
}

impl ChainCase {
    pub const fn new(name: &'static str, condition: bool, links: usize) -> Self {
        Self { name, condition, links }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn condition(&self) -> bool {
        self.condition
    }

    pub fn links(&self) -> usize {
        self.links
    }
}

pub fn chain_cases() -> Vec<ChainCase> {
    vec![
        ChainCase::new("true_short", true, 2),
        ChainCase::new("false_short", false, 2),
        ChainCase::new("true_long", true, 16),
        ChainCase::new("false_long", false, 16),
    ]
}
