pub mod completion_certificate;
pub mod internship_application;
pub mod internship_posting;
pub mod noc_request;
pub mod notification;
pub mod person;
pub mod weekly_report;
