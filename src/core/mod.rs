// Core modules implementing the decoder algebra, runner, and error modeling.
pub mod decoder;
pub mod error;
pub mod run;
