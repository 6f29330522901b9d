pub mod event;
pub mod member;
pub mod partner;
pub mod question;
pub mod team_member;
