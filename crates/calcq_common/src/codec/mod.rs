mod json;

pub use json::CalcqJsonCodec;
