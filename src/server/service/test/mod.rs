mod connection;
mod deadline;
mod directory;
mod event;
mod resource;
mod review;
mod study;
mod user;
