mod impact;
mod order_type;
mod side;
mod simulated_order;
mod venue;

pub use impact::ImpactResult;
pub use order_type::OrderType;
pub use side::Side;
pub use simulated_order::{OrderRequest, SimulatedOrder};
pub use venue::{ParseVenueError, Venue};
