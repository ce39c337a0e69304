// Entity Models
//
// - person: Employee, Manager and the parsed Record variant
// - department: the aggregate that owns a manager and its employees

pub mod department;
pub mod person;

pub use department::Department;
pub use person::{Employee, Manager, Record};
