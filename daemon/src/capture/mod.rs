pub mod frame_socket;

pub use frame_socket::FrameSocket;
