pub mod unroll_spf;

pub use unroll_spf::{SpfUnrollResult, UnrollSpfUseCase};
