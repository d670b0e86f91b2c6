//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// `Default` is the state before anything happened; it is also what
/// `std::mem::take` leaves behind while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
