pub mod appointment;
pub mod assessment;
pub mod comment;
pub mod contact_request;
pub mod counsellor_client;
pub mod counsellor_note;
pub mod forum_post;
pub mod mood_entry;
pub mod notification;
pub mod resource;
pub mod user;
