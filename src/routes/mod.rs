pub mod attendance;

pub mod dispatcher;

pub use attendance::configure_attendance_routes;
pub use dispatcher::configure_dispatcher_routes;
