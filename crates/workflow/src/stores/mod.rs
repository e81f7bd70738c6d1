mod application;
mod noc;

pub use application::InternshipApplicationStore;
pub use noc::NocRequestStore;
