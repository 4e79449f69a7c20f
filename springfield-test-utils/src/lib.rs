pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::{catalog, store},
        test_setup_with_favorite_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
