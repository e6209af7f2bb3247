pub mod dispatch;
pub mod state;
