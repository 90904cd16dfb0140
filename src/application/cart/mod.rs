mod cart_pricer;
mod errors;

pub use cart_pricer::CartPricer;
pub use errors::{CartPricingError, Result};
