pub mod error;
pub mod pool;
pub mod registry;
pub mod tongues;

#[cfg(test)]
mod tests;

pub use error::{DispatchError, user_message};
pub use pool::InstancePool;
pub use registry::ProviderRegistry;
pub use tongues::{Operation, Output, Tongues, TranslationResult};
