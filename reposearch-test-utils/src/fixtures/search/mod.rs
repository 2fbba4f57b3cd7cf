use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn search<'a>(&'a mut self) -> SearchFixtures<'a> {
        SearchFixtures { context: self }
    }
}

pub struct SearchFixtures<'a> {
    pub context: &'a mut TestContext,
}
