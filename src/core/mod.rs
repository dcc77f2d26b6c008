// Core modules implementing the greeter, the calculator, and error modeling.
pub mod calc;
pub mod coerce;
pub mod error;
pub mod greet;
