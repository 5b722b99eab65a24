pub mod connection;
pub mod friendships;
pub mod opportunities;
pub mod profiles;
pub mod users;
