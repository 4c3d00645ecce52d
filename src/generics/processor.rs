//! Generics on a trait: a two-parameter `Processor` and a helper that pipes
//! its output into a channel.

use crate::utils::error::{LabError, Result};
use tokio::sync::mpsc::Sender;

pub trait Processor<I, O>: Send + Sync {
    fn process(&self, input: I) -> Result<O>;
}

/// The string-to-string instantiation as a nameable object type; callers
/// hold a `Box<StringProcessor>` or `&StringProcessor`.
pub type StringProcessor = dyn Processor<String, String>;

/// The concrete string-to-string instantiation used in the demo.
pub struct EchoProcessor;

impl Processor<String, String> for EchoProcessor {
    fn process(&self, input: String) -> Result<String> {
        Ok(format!("processed/{}/processed", input))
    }
}

pub async fn forward_to_channel<I, O, P>(input: I, tx: Sender<O>, processor: &P) -> Result<()>
where
    P: Processor<I, O>,
{
    let out = processor.process(input)?;
    tx.send(out).await.map_err(|_| LabError::ChannelClosed)
}
