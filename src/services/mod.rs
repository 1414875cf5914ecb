pub mod attendance;
pub mod dispatcher;

pub use attendance::AttendanceService;
pub use dispatcher::DispatcherService;
