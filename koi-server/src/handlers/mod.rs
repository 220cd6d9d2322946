pub mod diagnostics;
pub mod exoplanets;
