pub mod device;
pub mod playback;
pub mod route;
pub mod video_source;
