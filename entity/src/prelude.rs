pub use super::shift::Entity as Shift;
pub use super::shift_request::Entity as ShiftRequest;
pub use super::shift_role::Entity as ShiftRole;
pub use super::user::Entity as User;
pub use super::worker_shift_assignment::Entity as WorkerShiftAssignment;
