mod activity;
mod club;
mod connection;
mod course;
mod deadline;
mod directory;
mod enrollment;
mod event;
mod interest;
mod mark;
mod registration;
mod resource;
mod review;
mod study_invite;
mod user;
mod user_deadline;
