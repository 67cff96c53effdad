//! 엔티티 공통 값 객체

pub mod time_stamped;

pub use time_stamped::TimeStamped;
