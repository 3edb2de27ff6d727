// Copyright @yucwang 2026

pub mod accumulation;
pub mod frame_buffer;

pub use self::accumulation::AccumulationBuffer;
pub use self::frame_buffer::FrameBuffer;
