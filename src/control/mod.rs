pub mod audio;
pub mod camera;
pub mod environment;
pub mod propulsion;
pub mod rocket;
pub mod scene;
