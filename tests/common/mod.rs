mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_accelerations_valid, assert_air_data_valid, assert_vector_eq};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
