/// The runtime value type.
///
/// Defines the `Value` enum produced by evaluation, together with the
/// truthiness and equality rules every operator relies on and the display
/// format used when results are printed.
pub mod core;
