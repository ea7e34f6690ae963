pub mod meetup;
pub mod rsvp;
pub mod user;
