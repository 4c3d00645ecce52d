pub mod bunch;
pub mod cmp;
pub mod collect;
pub mod guidelines;
pub mod processor;
pub mod stack;

pub use bunch::Bunch;
pub use processor::{EchoProcessor, Processor, StringProcessor};
pub use stack::Stack;
