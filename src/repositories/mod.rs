//! Domain-level CRUD over the stores: required-field checks, typed merges
//! for partial updates, and store failures re-classified as `AppError`.

pub mod department;
pub mod employee;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
