//! Rating delivery adapters.

mod mock_gateway;

pub use mock_gateway::MockRatingGateway;
