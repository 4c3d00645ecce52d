pub mod concurrent;
pub mod generics;
pub mod subjects;
pub mod utils;

pub use concurrent::SharedMap;
pub use generics::{Bunch, Processor, Stack};
pub use utils::error::{LabError, Result};
