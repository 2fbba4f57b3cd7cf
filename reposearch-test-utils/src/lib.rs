pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use mockito::Matcher;

    pub use crate::{
        constant::{TEST_KEYWORD, TEST_TOKEN, TEST_USERNAME, TEST_USER_AGENT},
        fixtures::search::factory,
        TestBuilder, TestContext, TestError,
    };
}
