pub mod category;
pub mod config;
pub mod contact;
pub mod digits;
pub mod game;
pub mod scroller;
pub mod sound;
pub mod spawner;
pub mod state;
pub mod world;

pub use game::FlappyBird;

flap_web::export_game!(FlappyBird, "flappy-bird");
