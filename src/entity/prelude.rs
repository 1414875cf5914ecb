pub use super::attendance_records::Entity as AttendanceRecords;
